//! # tb-store
//!
//! Durable CRUD over named collections, addressed by a string key, with
//! a JSON-array-of-objects shape. A collection is always read fully,
//! mutated in memory, and written back fully; there is no incremental
//! patch format, and insertion order is the canonical order.
//!
//! Read failures degrade to an empty collection (logged, never fatal);
//! write failures come back as `Err` for the caller to surface.

pub mod defaults;
pub mod moderation;

use std::sync::Arc;
use tb_core::error::{Result, StoreError};
use tb_core::models::{RecordId, RecordMeta};
use tb_core::traits::{Clock, KeyValueBackend, Record, SystemClock};
use tracing::{debug, warn};

/// Handle over a key-value backend plus a clock. Cheap to clone; all
/// state lives behind the backend.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn KeyValueBackend>,
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>, clock: Arc<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    /// Production wiring: the wall clock.
    pub fn with_system_clock(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self::new(backend, Arc::new(SystemClock))
    }

    /// Returns the full ordered collection. An absent key, an unreadable
    /// backend, or a malformed payload all yield an empty sequence:
    /// malformed data is a recoverable condition, logged for
    /// diagnostics, never surfaced to the caller.
    pub fn list<R: Record>(&self) -> Vec<R> {
        let raw = match self.backend.get(R::COLLECTION) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(collection = R::COLLECTION, %err, "read failed, treating collection as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                let err = StoreError::MalformedCollection {
                    key: R::COLLECTION.to_string(),
                    reason: err.to_string(),
                };
                warn!(%err, "recovering with an empty collection");
                Vec::new()
            }
        }
    }

    /// Looks a single record up by id.
    pub fn get<R: Record>(&self, id: RecordId) -> Option<R> {
        self.list::<R>().into_iter().find(|record| record.id() == id)
    }

    /// Inserts or replaces a record.
    ///
    /// When the incoming id matches an existing entry, the entry is
    /// replaced in place: same position, original `created_at`, fresh
    /// `updated_at`. Otherwise a new id is assigned (time-derived, and
    /// strictly greater than every id already in the collection) and the
    /// record is appended with `created_at == updated_at == now`.
    ///
    /// Returns the record as stored.
    pub fn upsert<R: Record>(&self, mut record: R) -> Result<R> {
        let mut records = self.list::<R>();
        let now = self.clock.now();

        let existing = records
            .iter()
            .position(|r| record.id() != 0 && r.id() == record.id());

        match existing {
            Some(pos) => {
                let created_at = records[pos].meta().created_at;
                let meta = record.meta_mut();
                meta.created_at = created_at;
                meta.updated_at = now;
                records[pos] = record.clone();
            }
            None => {
                record.assign_id(next_id(now.timestamp_millis(), &records));
                *record.meta_mut() = RecordMeta::at(now);
                records.push(record.clone());
            }
        }

        self.write_collection(&records)?;
        Ok(record)
    }

    /// Filters the id out of the collection. An unknown id is a no-op:
    /// nothing is rewritten, so the persisted payload stays untouched.
    pub fn remove<R: Record>(&self, id: RecordId) -> Result<()> {
        let mut records = self.list::<R>();
        let before = records.len();
        records.retain(|record| record.id() != id);

        if records.len() == before {
            debug!(collection = R::COLLECTION, id, "remove of unknown id, nothing to do");
            return Ok(());
        }

        self.write_collection(&records)
    }

    /// Writes `defaults` verbatim when the collection is empty, so a
    /// first run always has something to show. Reports whether it
    /// seeded.
    pub fn seed_if_empty<R: Record>(&self, defaults: &[R]) -> Result<bool> {
        if !self.list::<R>().is_empty() {
            return Ok(false);
        }

        self.write_collection(defaults)?;
        debug!(
            collection = R::COLLECTION,
            count = defaults.len(),
            "seeded collection"
        );
        Ok(true)
    }

    fn write_collection<R: Record>(&self, records: &[R]) -> Result<()> {
        let payload = serde_json::to_string(records).map_err(|err| StoreError::Encode {
            key: R::COLLECTION.to_string(),
            reason: err.to_string(),
        })?;
        self.backend.set(R::COLLECTION, &payload)
    }
}

/// Fresh ids are current-time-derived, bumped past the largest id the
/// collection already holds so a burst of inserts within one
/// millisecond still comes out strictly increasing.
fn next_id<R: Record>(now_millis: i64, records: &[R]) -> RecordId {
    let max_seen = records.iter().map(Record::id).max().unwrap_or(0);
    now_millis.max(max_seen + 1)
}
