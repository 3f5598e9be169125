//! # Tribuna Binary
//!
//! The entry point that assembles the data core based on compile-time
//! features, then walks the seeded collections the way the site's pages
//! would: stats table, filtered search, per-category grouping, and an
//! admin-gate check.

use std::sync::Arc;
use tb_auth::{RedirectTargets, SessionGuard};
use tb_configs::Settings;
use tb_core::models::{Category, Post, PostStatus, Role, User, WorldCup};
use tb_core::traits::KeyValueBackend;
use tb_query::{
    count_by, filter_by, group_by, sort_by, text_matches, to_summary_row, Predicate,
    SortDirection,
};
use tb_store::{defaults, RecordStore};
use tracing_subscriber::EnvFilter;

// Feature-gated imports: the binary is compiled to order
#[cfg(feature = "backend-file")]
use tb_backend_file::FileBackend;

#[cfg(all(feature = "backend-memory", not(feature = "backend-file")))]
use tb_backend_memory::MemoryBackend;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(data_dir = %settings.data_dir.display(), "tribuna data core starting");

    // 1. Pick the storage implementation
    #[cfg(feature = "backend-file")]
    let backend: Arc<dyn KeyValueBackend> = Arc::new(FileBackend::open(&settings.data_dir)?);

    #[cfg(all(feature = "backend-memory", not(feature = "backend-file")))]
    let backend: Arc<dyn KeyValueBackend> = Arc::new(MemoryBackend::new());

    // 2. Store + first-run data
    let store = RecordStore::with_system_clock(backend.clone());
    store.seed_if_empty(&defaults::default_users())?;
    store.seed_if_empty(&defaults::default_categories())?;
    store.seed_if_empty(&defaults::default_world_cups())?;
    store.seed_if_empty(&defaults::default_posts())?;

    // 3. Guard wired to the users collection for role lookups
    let guard = {
        let users_store = store.clone();
        SessionGuard::new(
            backend,
            Box::new(move |username| {
                users_store
                    .list::<User>()
                    .into_iter()
                    .find(|user| user.username == username)
                    .map(|user| user.role)
            }),
            RedirectTargets {
                login: settings.login_target.clone(),
                fallback: settings.fallback_target.clone(),
            },
        )
    };

    // 4. The stats page: one row per tournament
    println!("World Cups");
    for cup in store.list::<WorldCup>() {
        let row = to_summary_row(
            &cup,
            &["year", "host", "champion", "runnerUp", "matches", "goals"],
        );
        println!("  {}", row.join(" | "));
    }

    // 5. The search box: published posts about Messi, most liked first
    let posts = store.list::<Post>();
    let published: Vec<Post> = posts
        .iter()
        .filter(|post| post.status == PostStatus::Published)
        .cloned()
        .collect();
    let hits = sort_by(
        &filter_by(&published, &[text_matches(&["title", "description"], "messi")]),
        "likes",
        SortDirection::Descending,
    );
    println!("\nSearch \"messi\": {} hit(s)", hits.len());
    for post in &hits {
        println!("  {} ({} likes)", post.title, post.likes);
    }

    // 6. The admin dashboard: pending badge, posts per category, the
    //    category table itself
    let is_pending: Predicate<Post> = Box::new(|post: &Post| post.status == PostStatus::Pending);
    println!("\nPending posts: {}", count_by(&posts, &is_pending));

    println!("Posts per category:");
    for (category, members) in group_by(&posts, "category") {
        println!("  {category}: {}", members.len());
    }

    println!("Categories:");
    for category in store.list::<Category>() {
        let row = to_summary_row(&category, &["icon", "name", "postCount"]);
        println!("  {}", row.join(" "));
    }

    // 7. The admin gate, before and after logging in
    println!("\nAdmin gate without a session: {:?}", guard.require_role(Role::Admin));
    guard.start_session("admin", false)?;
    println!("Admin gate as admin: {:?}", guard.require_role(Role::Admin));
    guard.end_session()?;

    Ok(())
}
