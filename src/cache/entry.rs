//! Cache Entry Module
//!
//! A single in-memory cache entry with its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored snapshot
    pub value: String,
    /// Instant after which the entry is dead, None = TTL too large to represent
    expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that lives for `ttl`.
    ///
    /// A TTL that overflows the clock never expires.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its deadline, so a
    /// zero TTL is dead on arrival.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Instant::now() >= expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_live_within_ttl() {
        let entry = CacheEntry::new("snapshot".to_string(), Duration::from_secs(60));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl_is_expired() {
        let entry = CacheEntry::new("snapshot".to_string(), Duration::ZERO);
        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new("snapshot".to_string(), Duration::from_millis(20));
        sleep(Duration::from_millis(40));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_huge_ttl_never_expires() {
        let entry = CacheEntry::new("snapshot".to_string(), Duration::from_secs(u64::MAX));
        assert!(!entry.is_expired());
        assert_eq!(entry.value, "snapshot");
    }
}
