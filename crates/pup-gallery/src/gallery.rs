//! The owning context for the registry and its persistence.
//!
//! [`Gallery`] is the struct the calling context constructs at startup and
//! hands to whatever serves requests. It wraps the registry in a single
//! mutex and carries the database pool for reconciliation.

use parking_lot::Mutex;

use pup_core::{Image, Photo, Result, Tally, Vote};
use pup_db::pool::{self, DbPool};
use pup_db::queries::votes;

use crate::registry::ImageRegistry;
use crate::summary::{GallerySummary, SearchResponse};

/// Registry plus backing store, shareable across request handlers.
///
/// One global mutex guards the whole registry: `vote` is a
/// read-modify-write and must be atomic with respect to concurrent votes
/// on the same id, so every operation takes the lock for its full
/// duration. Lookups hand out snapshot clones, never references into the
/// locked state.
pub struct Gallery {
    registry: Mutex<ImageRegistry>,
    pool: DbPool,
}

impl Gallery {
    /// Build an empty gallery on top of an initialized pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            registry: Mutex::new(ImageRegistry::new()),
            pool,
        }
    }

    /// Register images for a batch of photos.
    ///
    /// Photos already registered are skipped. Returns how many images
    /// were newly added.
    pub fn ingest(&self, photos: &[Photo]) -> usize {
        let mut registry = self.registry.lock();
        let before = registry.len();
        for photo in photos {
            // Current insert semantics cannot fail; keep the reserved
            // error path visible if they ever do.
            if let Err(e) = registry.insert(&Image::from_photo(photo)) {
                tracing::warn!("Skipping photo {}: {e}", photo.id);
            }
        }
        let added = registry.len() - before;
        tracing::debug!("Registered {added} new images from {} photos", photos.len());
        added
    }

    /// Apply a single vote event. `None` when the id is not registered.
    pub fn vote(&self, vote: &Vote) -> Option<Tally> {
        self.registry
            .lock()
            .apply_vote(&vote.puppy_id, vote.direction)
    }

    /// Snapshot of one image by id.
    pub fn find(&self, id: &str) -> Option<Image> {
        self.registry.lock().find(id).cloned()
    }

    /// Snapshot of all images, in insertion order.
    pub fn images(&self) -> Vec<Image> {
        self.registry.lock().all().to_vec()
    }

    /// Translate a search response into the outbound summary, carrying
    /// the full current image list.
    pub fn summarize(&self, search: &SearchResponse) -> Result<GallerySummary> {
        GallerySummary::build(search, self.images())
    }

    /// Flush the registry to the store: one row per image, all in one
    /// transaction. Returns the number of rows written.
    ///
    /// The snapshot is taken under the registry lock, so the flushed
    /// tallies are mutually consistent; votes arriving after the snapshot
    /// land in the next flush.
    pub fn flush(&self) -> Result<usize> {
        let snapshot = self.images();
        let conn = pool::get_conn(&self.pool)?;
        let written = votes::bulk_upsert(&conn, &snapshot)?;
        tracing::debug!("Flushed {written} vote tallies");
        Ok(written)
    }

    /// Reload persisted tallies for the currently registered ids and
    /// merge them back into memory. Returns how many entries were
    /// updated.
    pub fn rehydrate(&self) -> Result<usize> {
        let ids = self.registry.lock().ids();
        let conn = pool::get_conn(&self.pool)?;
        let records = votes::load_by_ids(&conn, &ids)?;

        let mut registry = self.registry.lock();
        let mut merged = 0;
        for record in &records {
            if registry.merge_tally(&record.puppy_id, record.tally()) {
                merged += 1;
            }
        }
        tracing::debug!("Rehydrated {merged} of {} registered images", registry.len());
        Ok(merged)
    }
}
