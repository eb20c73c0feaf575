//! The in-memory image registry and vote tally engine.

use pup_core::{Image, Result, Tally, VoteDirection};

/// In-memory mapping from image id to its vote-augmented record.
///
/// An explicit owned object: construct it where the process starts and
/// hand it to whatever needs it, typically behind the lock in
/// [`crate::Gallery`]. The registry itself has no internal
/// synchronization.
///
/// Entries are kept in insertion order; with the handful of images a
/// single search page yields, linear scans beat an index.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    images: Vec<Image>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a copy of `image` keyed by its id.
    ///
    /// A duplicate id is a no-op: the first entry wins, and its tallies
    /// are untouched. The `Result` is reserved for future validation;
    /// current semantics never fail.
    pub fn insert(&mut self, image: &Image) -> Result<()> {
        if self.images.iter().any(|im| im.id == image.id) {
            return Ok(());
        }

        self.images.push(image.clone());
        Ok(())
    }

    /// Look up an image by id. A miss is a normal negative result.
    pub fn find(&self, id: &str) -> Option<&Image> {
        self.images.iter().find(|im| im.id == id)
    }

    /// Apply one vote to the entry with the given id.
    ///
    /// Each call contributes exactly one additional vote in the given
    /// direction; both counters count occurrences upward and never go
    /// negative. Returns the resulting tally, or `None` when the id is
    /// not registered.
    pub fn apply_vote(&mut self, id: &str, direction: VoteDirection) -> Option<Tally> {
        let image = self.images.iter_mut().find(|im| im.id == id)?;
        match direction {
            VoteDirection::Up => image.up_votes += 1,
            VoteDirection::Down => image.down_votes += 1,
        }
        Some(image.tally())
    }

    /// Overwrite an entry's counts with a persisted tally.
    ///
    /// Used when rehydrating from storage. Returns whether the id was
    /// present.
    pub fn merge_tally(&mut self, id: &str, tally: Tally) -> bool {
        match self.images.iter_mut().find(|im| im.id == id) {
            Some(image) => {
                image.up_votes = tally.up;
                image.down_votes = tally.down;
                true
            }
            None => false,
        }
    }

    /// All registered images, in insertion order.
    pub fn all(&self) -> &[Image] {
        &self.images
    }

    /// The registered ids, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.images.iter().map(|im| im.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> Image {
        Image {
            id: id.into(),
            title: format!("pup {id}"),
            thumbnail: format!("http://farm1.static.flickr.com/2/{id}_s_t.jpg"),
            large: format!("http://farm1.static.flickr.com/2/{id}_s_b.jpg"),
            up_votes: 0,
            down_votes: 0,
        }
    }

    #[test]
    fn insert_is_idempotent_and_first_write_wins() {
        let mut registry = ImageRegistry::new();
        let first = image("1");
        registry.insert(&first).unwrap();
        registry.apply_vote("1", VoteDirection::Up).unwrap();

        let mut second = image("1");
        second.up_votes = 99;
        registry.insert(&second).unwrap();

        assert_eq!(registry.len(), 1);
        // The second insert must not overwrite the first entry's tallies.
        assert_eq!(registry.find("1").unwrap().up_votes, 1);
    }

    #[test]
    fn insert_stores_a_copy() {
        let mut registry = ImageRegistry::new();
        let mut caller_owned = image("1");
        registry.insert(&caller_owned).unwrap();

        // Mutating the caller's instance must not leak into the registry.
        caller_owned.up_votes = 50;
        assert_eq!(registry.find("1").unwrap().up_votes, 0);
    }

    #[test]
    fn find_miss_is_none() {
        let registry = ImageRegistry::new();
        assert!(registry.find("404").is_none());
    }

    #[test]
    fn votes_count_occurrences_upward() {
        let mut registry = ImageRegistry::new();
        registry.insert(&image("1")).unwrap();

        for _ in 0..3 {
            registry.apply_vote("1", VoteDirection::Up);
        }
        for _ in 0..2 {
            registry.apply_vote("1", VoteDirection::Down);
        }

        let tally = registry.find("1").unwrap().tally();
        assert_eq!(tally, Tally { up: 3, down: 2 });
    }

    #[test]
    fn vote_returns_resulting_tally() {
        let mut registry = ImageRegistry::new();
        registry.insert(&image("1")).unwrap();

        let tally = registry.apply_vote("1", VoteDirection::Up).unwrap();
        assert_eq!(tally, Tally { up: 1, down: 0 });
        assert_eq!(registry.find("1").unwrap().tally(), tally);
    }

    #[test]
    fn vote_on_unknown_id_is_none() {
        let mut registry = ImageRegistry::new();
        assert!(registry.apply_vote("404", VoteDirection::Up).is_none());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut registry = ImageRegistry::new();
        for id in ["3", "1", "2"] {
            registry.insert(&image(id)).unwrap();
        }
        let ids: Vec<&str> = registry.all().iter().map(|im| im.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(registry.ids(), vec!["3", "1", "2"]);
    }

    #[test]
    fn merge_tally_overwrites_counts() {
        let mut registry = ImageRegistry::new();
        registry.insert(&image("1")).unwrap();
        registry.apply_vote("1", VoteDirection::Up);

        assert!(registry.merge_tally("1", Tally { up: 7, down: 4 }));
        assert_eq!(registry.find("1").unwrap().tally(), Tally { up: 7, down: 4 });

        assert!(!registry.merge_tally("404", Tally { up: 1, down: 1 }));
    }
}
