use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Session lifetime applied when the surrounding middleware never sets one:
/// one day.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Base behavior shared by every store: the session max-age.
///
/// The max-age is held in milliseconds, settable at any time, and read by the
/// store at write time — changing it affects subsequent writes, never records
/// already in the backend.
#[derive(Debug)]
pub struct StoreDefaults {
    max_age_ms: AtomicU64,
}

impl Default for StoreDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}

impl StoreDefaults {
    pub fn new(max_age: Duration) -> Self {
        Self {
            max_age_ms: AtomicU64::new(max_age.as_millis() as u64),
        }
    }

    /// The max-age applied to subsequent writes.
    pub fn max_age(&self) -> Duration {
        Duration::from_millis(self.max_age_ms.load(Ordering::Relaxed))
    }

    /// Sets the max-age applied to subsequent writes.
    pub fn set_max_age(&self, max_age: Duration) {
        self.max_age_ms
            .store(max_age.as_millis() as u64, Ordering::Relaxed);
    }

    /// The whole-second TTL handed to the backend at write time.
    ///
    /// Floors the max-age to seconds, so a max-age under one second yields a
    /// TTL of 0 — expire immediately.
    pub fn ttl_seconds(&self) -> i64 {
        (self.max_age_ms.load(Ordering::Relaxed) / 1000) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_age() {
        let defaults = StoreDefaults::default();
        assert_eq!(defaults.max_age(), DEFAULT_MAX_AGE);
        assert_eq!(defaults.ttl_seconds(), 86_400);
    }

    #[test]
    fn test_ttl_floors_to_whole_seconds() {
        let defaults = StoreDefaults::new(Duration::from_millis(5000));
        assert_eq!(defaults.ttl_seconds(), 5);

        defaults.set_max_age(Duration::from_millis(1999));
        assert_eq!(defaults.ttl_seconds(), 1);

        defaults.set_max_age(Duration::from_millis(500));
        assert_eq!(defaults.ttl_seconds(), 0);
    }

    #[test]
    fn test_set_max_age_is_read_back() {
        let defaults = StoreDefaults::default();
        defaults.set_max_age(Duration::from_secs(60));
        assert_eq!(defaults.max_age(), Duration::from_secs(60));
        assert_eq!(defaults.ttl_seconds(), 60);
    }
}
