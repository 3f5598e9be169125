//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the
//! store and the session guard. All ports are synchronous: the backing
//! medium is local and treated as instantaneous, and there is only one
//! logical writer at a time.

use crate::error::Result;
use crate::models::{RecordId, RecordMeta};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Raw key-value persistence contract, the seam where a browser's
/// local storage used to sit. Values are opaque strings; shaping them
/// into collections is the store's job, not the backend's.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait KeyValueBackend: Send + Sync {
    /// Returns the raw payload under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous payload.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Time source for id generation and record timestamps. Injected so
/// tests can pin or advance the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the binaries.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Exposed for external test
/// crates via the `testing` feature.
#[cfg(feature = "testing")]
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(feature = "testing")]
impl ManualClock {
    pub fn starting_at(instant: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap() = instant;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

#[cfg(feature = "testing")]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Contract implemented by every entity that lives in a collection.
///
/// An id of `0` means "not yet assigned"; the store allocates a real id
/// on first upsert and never changes it afterwards.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The storage key the collection is persisted under.
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;
    fn assign_id(&mut self, id: RecordId);

    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;
}

/// A single field value as seen by the query and projection layers.
///
/// Field names are the wire (camelCase) names, so the same strings work
/// against a live record and against its persisted JSON form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
    Missing,
}

impl FieldValue {
    /// Presentation text for the value. `None` for missing values and
    /// for text that is empty after trimming, so callers can substitute
    /// a placeholder.
    pub fn display(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            FieldValue::Int(n) => Some(n.to_string()),
            FieldValue::Float(x) => Some(x.to_string()),
            FieldValue::Timestamp(t) => Some(t.to_rfc3339()),
            FieldValue::Missing => None,
        }
    }

    /// Case-insensitive substring match against the display text.
    /// `needle` must already be lowercased.
    pub fn contains_lower(&self, needle: &str) -> bool {
        self.display()
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    }

    /// Loose equality: text compares case-insensitively, integers and
    /// floats compare numerically, missing values equal nothing.
    pub fn eq_loose(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.eq_ignore_ascii_case(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a == b,
            (FieldValue::Missing, _) | (_, FieldValue::Missing) => false,
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    /// Ordering used by the sort engine: numbers numerically, text
    /// case-insensitively, timestamps chronologically. Mismatched or
    /// missing values compare equal, which under a stable sort leaves
    /// their insertion order untouched.
    pub fn compare(&self, other: &FieldValue) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(t)
    }
}

/// Named-field access for filtering, sorting, and projection.
pub trait Fields {
    /// Returns the value of the named field, or [`FieldValue::Missing`]
    /// for names the entity does not carry.
    fn field(&self, name: &str) -> FieldValue;
}
