//! Photo domain types: the external photo record and the Flickr URL builder.
//!
//! See <http://www.flickr.com/services/api/misc.urls.html> for the URL
//! scheme and the size codes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PhotoSize
// ---------------------------------------------------------------------------

/// Image sizes supported by Flickr, with their wire suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotoSize {
    /// 75x75 square crop ("s").
    #[serde(rename = "s")]
    SmallSquare,
    /// 100px longest side ("t").
    #[serde(rename = "t")]
    Thumbnail,
    /// 240px longest side ("m").
    #[serde(rename = "m")]
    Small,
    /// 500px longest side; the URL carries no suffix for this size ("-").
    #[serde(rename = "-")]
    Medium500,
    /// 640px longest side ("z").
    #[serde(rename = "z")]
    Medium640,
    /// 1024px longest side ("b").
    #[serde(rename = "b")]
    Large,
    /// Original upload ("o").
    #[serde(rename = "o")]
    Original,
}

impl PhotoSize {
    /// The one-character suffix used in photo URLs.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::SmallSquare => "s",
            Self::Thumbnail => "t",
            Self::Small => "m",
            Self::Medium500 => "-",
            Self::Medium640 => "z",
            Self::Large => "b",
            Self::Original => "o",
        }
    }
}

impl fmt::Display for PhotoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

/// A photo record as delivered by the search API collaborator.
///
/// All fields arrive as strings, including the visibility flags; this type
/// is read-only input and is only used to derive URLs and an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: String,
    pub title: String,
    #[serde(rename = "ispublic")]
    pub is_public: String,
    #[serde(rename = "isfriend")]
    pub is_friend: String,
    #[serde(rename = "isfamily")]
    pub is_family: String,
}

impl Photo {
    /// Return the URL to this photo in the specified size.
    ///
    /// Pure string assembly; malformed inputs simply produce a malformed
    /// URL.
    pub fn url(&self, size: PhotoSize) -> String {
        if size == PhotoSize::Medium500 {
            return format!(
                "http://farm{}.static.flickr.com/{}/{}_{}.jpg",
                self.farm, self.server, self.id, self.secret
            );
        }
        format!(
            "http://farm{}.static.flickr.com/{}/{}_{}_{}.jpg",
            self.farm, self.server, self.id, self.secret, size
        )
    }
}
