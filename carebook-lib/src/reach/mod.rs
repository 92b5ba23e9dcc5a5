//! Reachability status cache
//!
//! Avoids redundant liveness checks for the same email address or
//! website within a freshness window. The cache stores one entry per
//! namespaced key, unbounded, for the lifetime of the process; stale
//! entries are overwritten in place on the next check rather than
//! evicted separately.

mod validate;

pub use validate::*;

use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use dashmap::DashMap;
use serde::Deserialize;
use serde::Serialize;

/// How long a resolved status stays fresh by default (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Reachability status of an email address or website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReachStatus {
    /// The target answered the check.
    Reachable,
    /// The target failed the check.
    Unreachable,
    /// A check is in flight; shown while awaiting a result.
    Checking,
    /// No usable result (never checked, or the check could not decide).
    Unknown,
}

/// A cached reachability result with the time it was established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachEntry {
    /// The resolved status.
    pub status: ReachStatus,
    /// When the check completed.
    pub checked_at: DateTime<Utc>,
}

impl ReachEntry {
    /// Creates an entry resolved just now.
    pub fn new(status: ReachStatus) -> Self {
        Self {
            status,
            checked_at: Utc::now(),
        }
    }

    /// Returns `true` while this entry is within its freshness window.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            // A TTL beyond chrono's representable range never expires.
            return true;
        };
        Utc::now().signed_duration_since(self.checked_at) < ttl
    }
}

/// Builds the cache key for an email address.
///
/// Keys are namespaced so an email and a website with the same literal
/// value never share an entry.
pub fn email_key(address: &str) -> String {
    format!("email:{address}")
}

/// Builds the cache key for a website URL.
pub fn website_key(url: &str) -> String {
    format!("website:{url}")
}

/// A time-windowed cache of reachability results.
///
/// Construct one at application startup and hand it to consumers by
/// reference; tests get isolated caches the same way. Backed by a
/// concurrent map, but the intended runtime model is a cooperatively
/// scheduled event loop: two callers hitting the same stale key before
/// the first check resolves will both run their check, and the last
/// write wins. There is deliberately no in-flight deduplication,
/// timeout, or cancellation; a `check_fn` needing bounded latency must
/// enforce it itself.
///
/// # Example
///
/// ```no_run
/// use carebook_lib::reach::{email_key, ReachabilityCache, ReachStatus, DEFAULT_TTL};
///
/// # async fn demo() -> Result<(), std::convert::Infallible> {
/// let cache = ReachabilityCache::new();
/// let entry = cache
///     .get_status(&email_key("ann@example.com"), DEFAULT_TTL, || async {
///         // Normally an HTTP call to the verification backend.
///         Ok::<_, std::convert::Infallible>(ReachStatus::Reachable)
///     })
///     .await?;
/// assert_eq!(entry.status, ReachStatus::Reachable);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ReachabilityCache {
    entries: DashMap<String, ReachEntry>,
}

impl ReachabilityCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the cached status for a key, running the check if needed.
    ///
    /// A fresh entry is returned as-is without invoking `check`.
    /// Otherwise `check()` is awaited and its resolved status stored
    /// with the current timestamp, replacing any stale entry. If
    /// `check` fails, the error propagates and nothing is written, so
    /// the next call retries instead of caching the failure; a check
    /// that *resolves* to [`ReachStatus::Unreachable`] or
    /// [`ReachStatus::Unknown`] is cached like any other result.
    pub async fn get_status<F, Fut, E>(
        &self,
        key: &str,
        ttl: Duration,
        check: F,
    ) -> Result<ReachEntry, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ReachStatus, E>>,
    {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_fresh(ttl) {
                return Ok(entry.clone());
            }
        }

        let status = check().await?;
        let entry = ReachEntry::new(status);
        self.entries.insert(key.to_string(), entry.clone());
        Ok(entry)
    }

    /// Returns the fresh status for a key without running any check.
    ///
    /// Missing or stale entries report [`ReachStatus::Unknown`]; cell
    /// renderers use this to paint a chip before kicking off a check.
    pub fn status(&self, key: &str, ttl: Duration) -> ReachStatus {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(ttl) => entry.status,
            _ => ReachStatus::Unknown,
        }
    }

    /// Returns the number of entries in the cache (including stale ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
