//! The vote-augmented image entity and the vote event types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::photo::{Photo, PhotoSize};

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

/// A registered image: display URLs plus its vote tally.
///
/// Owned by the registry; the serde field names match the wire shape the
/// web client expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub large: String,
    #[serde(rename = "upvotes")]
    pub up_votes: i64,
    #[serde(rename = "downvotes")]
    pub down_votes: i64,
}

impl Image {
    /// Construct an image from an external photo record.
    ///
    /// Thumbnail and large URLs are derived via [`Photo::url`]; vote counts
    /// start at zero.
    pub fn from_photo(photo: &Photo) -> Self {
        Self {
            id: photo.id.clone(),
            title: photo.title.clone(),
            thumbnail: photo.url(PhotoSize::Thumbnail),
            large: photo.url(PhotoSize::Large),
            up_votes: 0,
            down_votes: 0,
        }
    }

    /// The current (up, down) tally of this image.
    pub fn tally(&self) -> Tally {
        Tally {
            up: self.up_votes,
            down: self.down_votes,
        }
    }
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// The (up-vote count, down-vote count) pair associated with an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub up: i64,
    pub down: i64,
}

// ---------------------------------------------------------------------------
// Vote
// ---------------------------------------------------------------------------

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A transient vote event: which image, and which way.
///
/// Not persisted as its own entity; it is the input to the tally engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub puppy_id: String,
    pub direction: VoteDirection,
}

impl Vote {
    pub fn new(puppy_id: impl Into<String>, direction: VoteDirection) -> Self {
        Self {
            puppy_id: puppy_id.into(),
            direction,
        }
    }
}
