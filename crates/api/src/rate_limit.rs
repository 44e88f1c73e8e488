//! Per-client-IP fixed-window rate limiting for the form endpoints.
//!
//! Counters live in an unbounded in-process map keyed by the client IP
//! string; the window is measured from the first request in it. Entries
//! are never evicted and the map is not shared across instances -- this is
//! a stand-in for a shared store (e.g. Redis) at the site's traffic level.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct WindowEntry {
    count: u32,
    window_start: Instant,
}

/// Fixed-window counter per client key.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    entries: Mutex<HashMap<String, WindowEntry>>,
}

impl RateLimiter {
    /// A limiter admitting `max_requests` per `window` per key.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request for `key` and report whether it is admitted.
    ///
    /// Rejected requests do not consume the window.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        match entries.get_mut(key) {
            None => {
                entries.insert(
                    key.to_string(),
                    WindowEntry {
                        count: 1,
                        window_start: now,
                    },
                );
                true
            }
            Some(entry) => {
                // A full window elapsed since its first request: start fresh.
                if now.duration_since(entry.window_start) >= self.window {
                    entry.count = 1;
                    entry.window_start = now;
                    return true;
                }
                if entry.count >= self.max_requests {
                    return false;
                }
                entry.count += 1;
                true
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn admits_up_to_the_limit_then_rejects() {
        let limiter = RateLimiter::new(3, WINDOW);
        let now = Instant::now();
        assert!(limiter.check_at("203.0.113.7", now));
        assert!(limiter.check_at("203.0.113.7", now));
        assert!(limiter.check_at("203.0.113.7", now));
        assert!(!limiter.check_at("203.0.113.7", now));
        assert!(!limiter.check_at("203.0.113.7", now + Duration::from_secs(30)));
    }

    #[test]
    fn window_resets_exactly_at_the_boundary() {
        let limiter = RateLimiter::new(3, WINDOW);
        let start = Instant::now();
        for _ in 0..3 {
            assert!(limiter.check_at("ip", start));
        }
        assert!(!limiter.check_at("ip", start + WINDOW - Duration::from_millis(1)));
        assert!(limiter.check_at("ip", start + WINDOW));
    }

    #[test]
    fn window_is_measured_from_its_first_request() {
        let limiter = RateLimiter::new(2, WINDOW);
        let start = Instant::now();
        assert!(limiter.check_at("ip", start));
        // Second request late in the window doesn't slide it.
        assert!(limiter.check_at("ip", start + Duration::from_secs(59)));
        assert!(limiter.check_at("ip", start + WINDOW + Duration::from_secs(1)));
    }

    #[test]
    fn clients_are_counted_independently() {
        let limiter = RateLimiter::new(1, WINDOW);
        let now = Instant::now();
        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now));
        assert!(limiter.check_at("b", now));
    }

    #[test]
    fn rejected_requests_do_not_extend_the_count() {
        let limiter = RateLimiter::new(1, WINDOW);
        let start = Instant::now();
        assert!(limiter.check_at("ip", start));
        for i in 1..10 {
            assert!(!limiter.check_at("ip", start + Duration::from_secs(i)));
        }
        assert!(limiter.check_at("ip", start + WINDOW));
    }
}
