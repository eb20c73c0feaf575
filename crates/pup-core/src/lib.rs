//! pup-core: shared types, errors, and configuration.
//!
//! This crate is the foundational dependency for the other pup-* crates,
//! providing the unified error type, application configuration, the photo
//! domain types with the Flickr URL builder, and the vote-augmented image
//! entity.

pub mod config;
pub mod error;
pub mod image;
pub mod photo;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use image::{Image, Tally, Vote, VoteDirection};
pub use photo::{Photo, PhotoSize};
