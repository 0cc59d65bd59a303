//! Identifier generation
//!
//! Event ids and shared-copy suffixes come from a process-wide monotonic
//! counter. Wall-clock milliseconds can repeat within one tick under rapid
//! taps; a counter cannot.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Monotonic id source for events and shared-copy ids.
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Create a generator starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator that issues ids from `start` upward.
    ///
    /// Callers seeding a store with existing numeric ids should start above
    /// the largest of them.
    pub fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }

    /// Issue the next event id.
    pub fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// Issue an id for a shared copy of `source_id`.
    ///
    /// The `{source}-shared-{n}` format is load-bearing: the re-share guard
    /// scans the store for ids with the `{source}-shared-` prefix.
    pub fn shared_copy_id(&self, source_id: &str) -> String {
        format!(
            "{}-shared-{}",
            source_id,
            self.counter.fetch_add(1, Ordering::Relaxed)
        )
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a message id.
pub fn generate_message_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let ids = IdGenerator::new();
        let issued: Vec<String> = (0..100).map(|_| ids.next_id()).collect();
        let unique: HashSet<&String> = issued.iter().collect();
        assert_eq!(unique.len(), issued.len());
        assert_eq!(issued[0], "1");
        assert_eq!(issued[99], "100");
    }

    #[test]
    fn test_shared_copy_id_format() {
        let ids = IdGenerator::starting_at(42);
        let id = ids.shared_copy_id("7");
        assert_eq!(id, "7-shared-42");
        assert!(id.starts_with("7-shared-"));
    }

    #[test]
    fn test_rapid_shared_copy_ids_never_collide() {
        let ids = IdGenerator::new();
        let a = ids.shared_copy_id("1");
        let b = ids.shared_copy_id("1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(generate_message_id(), generate_message_id());
    }
}
