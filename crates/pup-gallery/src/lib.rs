//! pup-gallery: the stateful core of the puppy vote service.
//!
//! Holds the in-memory image registry with its vote tally engine, the
//! search-response-to-summary translation, and the [`Gallery`] context
//! that owns the registry behind a lock and reconciles it with the
//! persistent store in pup-db.

pub mod gallery;
pub mod registry;
pub mod summary;

pub use gallery::Gallery;
pub use registry::ImageRegistry;
pub use summary::{GallerySummary, SearchResponse};
