//! Time-bounded patient-detail cache.
//!
//! Avoids refetching a patient's full record while the user flips between
//! roster entries. Entries expire passively: there is no sweep task, just a
//! freshness check (and removal) at read time, which is enough for the
//! human-paced usage this tool sees.

use crate::clock::{Clock, SystemClock};
use lingap_core::{PatientDetail, PatientId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct CacheEntry {
    detail: PatientDetail,
    stored_at: Instant,
}

/// Keyed by patient id. An entry is valid strictly less than `ttl` after it
/// was stored; at or past the TTL it is indistinguishable from an absent one.
///
/// The map is mutex-guarded: mutation callbacks can race detail reads
/// triggered by user interaction, so `get`/`set`/`invalidate` are serialized.
/// The lock is never held across an await point.
pub struct DetailCache {
    entries: Mutex<HashMap<PatientId, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl DetailCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// A clone of the cached record if present and fresh, otherwise `None`.
    /// Expired entries are removed on the way out.
    pub fn get(&self, id: PatientId) -> Option<PatientDetail> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(&id) {
            Some(entry) if self.clock.now().duration_since(entry.stored_at) < self.ttl => {
                tracing::debug!(%id, "detail cache hit");
                Some(entry.detail.clone())
            }
            Some(_) => {
                tracing::debug!(%id, "detail cache entry expired");
                entries.remove(&id);
                None
            }
            None => None,
        }
    }

    /// Store with the current clock reading, overwriting any existing entry.
    pub fn set(&self, id: PatientId, detail: PatientDetail) {
        self.entries.lock().unwrap().insert(
            id,
            CacheEntry {
                detail,
                stored_at: self.clock.now(),
            },
        );
    }

    /// Unconditional removal; a subsequent `get` misses.
    pub fn invalidate(&self, id: PatientId) {
        if self.entries.lock().unwrap().remove(&id).is_some() {
            tracing::debug!(%id, "detail cache invalidated");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
