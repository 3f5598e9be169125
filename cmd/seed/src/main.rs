//! # seed
//!
//! Populates the data directory with the first-run datasets. Safe to
//! run repeatedly: collections that already hold records are left
//! alone.

use std::sync::Arc;
use tb_backend_file::FileBackend;
use tb_configs::Settings;
use tb_store::{defaults, RecordStore};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(data_dir = %settings.data_dir.display(), "seeding collections");

    let backend = Arc::new(FileBackend::open(&settings.data_dir)?);
    let store = RecordStore::with_system_clock(backend);

    report("users", store.seed_if_empty(&defaults::default_users())?);
    report("categories", store.seed_if_empty(&defaults::default_categories())?);
    report("world-cups", store.seed_if_empty(&defaults::default_world_cups())?);
    report("posts", store.seed_if_empty(&defaults::default_posts())?);

    Ok(())
}

fn report(collection: &str, seeded: bool) {
    if seeded {
        tracing::info!(collection, "seeded");
    } else {
        tracing::info!(collection, "already populated, skipped");
    }
}
