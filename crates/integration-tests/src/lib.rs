//! Shared fixtures for the cross-crate scenario tests. The scenarios
//! themselves live under `tests/`.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tb_backend_memory::MemoryBackend;
use tb_core::models::{Role, User};
use tb_core::traits::ManualClock;
use tb_store::RecordStore;

pub fn instant(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

/// A store over an in-memory backend with a manual clock, plus handles
/// to both so tests can inspect raw payloads and move time.
pub struct Harness {
    pub store: RecordStore,
    pub backend: Arc<MemoryBackend>,
    pub clock: Arc<ManualClock>,
}

pub fn harness_at(start: &str) -> Harness {
    let backend = Arc::new(MemoryBackend::new());
    let clock = Arc::new(ManualClock::starting_at(instant(start)));
    let store = RecordStore::new(backend.clone(), clock.clone());
    Harness {
        store,
        backend,
        clock,
    }
}

/// Three users, one admin, names chosen so that a case-insensitive
/// search for "juan" matches exactly one of them. Ids are pre-assigned
/// because these go in through `seed_if_empty`, which keeps records
/// verbatim.
pub fn sample_users() -> Vec<User> {
    let meta = tb_core::models::RecordMeta::at(instant("2025-01-01T00:00:00Z"));
    vec![
        User {
            id: 1,
            name: "Site Administrator".into(),
            username: "admin".into(),
            email: "admin@tribuna.example".into(),
            role: Role::Admin,
            meta,
            ..Default::default()
        },
        User {
            id: 2,
            name: "Juan López".into(),
            username: "juanlopez".into(),
            email: "juan@tribuna.example".into(),
            meta,
            ..Default::default()
        },
        User {
            id: 3,
            name: "Ana Torres".into(),
            username: "anat".into(),
            email: "ana@tribuna.example".into(),
            meta,
            ..Default::default()
        },
    ]
}
