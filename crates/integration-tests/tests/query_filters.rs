//! Search and filter scenarios over stored collections: the flows the
//! site's search box, filter bar, and user-management table drive.

use chrono::Duration;
use integration_tests::{harness_at, sample_users};
use tb_core::models::{Post, PostStatus, User};
use tb_core::traits::Clock;
use tb_query::{
    field_equals, filter_by, is_active_user, is_banned_user, sort_by, text_matches,
    SortDirection,
};
use tb_store::defaults;

#[test]
fn search_finds_juan_regardless_of_case() {
    let harness = harness_at("2025-05-01T10:00:00Z");
    harness.store.seed_if_empty(&sample_users()).unwrap();

    let users = harness.store.list::<User>();
    assert_eq!(users.len(), 3);

    for query in ["juan", "JUAN", "jUaN"] {
        let hits = filter_by(&users, &[text_matches(&["name", "username"], query)]);
        assert_eq!(hits.len(), 1, "query {query:?}");
        assert_eq!(hits[0].name, "Juan López");
    }
}

#[test]
fn a_three_day_ban_expires_on_day_four() {
    let harness = harness_at("2025-05-01T10:00:00Z");
    harness.store.seed_if_empty(&sample_users()).unwrap();

    // Ban Ana for three days.
    let users = harness.store.list::<User>();
    let mut ana = users
        .iter()
        .find(|u| u.username == "anat")
        .cloned()
        .unwrap();
    ana.banned_until = Some(harness.clock.now() + Duration::days(3));
    harness.store.upsert(ana).unwrap();

    let users = harness.store.list::<User>();
    let banned = filter_by(&users, &[is_banned_user(harness.clock.now())]);
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].username, "anat");

    // Four days later the ban has run out.
    harness.clock.advance(Duration::days(4));
    let banned = filter_by(&users, &[is_banned_user(harness.clock.now())]);
    assert!(banned.is_empty());

    let active = filter_by(&users, &[is_active_user(harness.clock.now())]);
    assert_eq!(active.len(), 3);
}

#[test]
fn filter_bar_combines_category_search_and_sort() {
    let harness = harness_at("2025-05-01T10:00:00Z");
    harness.store.seed_if_empty(&defaults::default_posts()).unwrap();

    let posts = harness.store.list::<Post>();

    // Category button + search box, ANDed like the publications page.
    let history = filter_by(
        &posts,
        &[
            field_equals("category", "history"),
            text_matches(&["title", "description"], "iniesta"),
        ],
    );
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].world_cup, Some(2010));

    // "Most liked" ordering over the published subset.
    let published = filter_by(&posts, &[field_equals("status", "published")]);
    let ranked = sort_by(&published, "likes", SortDirection::Descending);
    let likes: Vec<_> = ranked.iter().map(|p| p.likes).collect();
    assert_eq!(likes, vec![2300, 1200, 860]);
}

#[test]
fn recent_means_insertion_order() {
    let harness = harness_at("2025-05-01T10:00:00Z");
    harness.store.seed_if_empty(&defaults::default_posts()).unwrap();

    let posts = harness.store.list::<Post>();
    // "recent" is not a field; the sort must leave the stored order be.
    let sorted = sort_by(&posts, "recent", SortDirection::Descending);
    assert_eq!(sorted, posts);
}

#[test]
fn status_filter_drives_the_moderation_queue() {
    let harness = harness_at("2025-05-01T10:00:00Z");
    harness.store.seed_if_empty(&defaults::default_posts()).unwrap();

    let posts = harness.store.list::<Post>();
    let pending = filter_by(&posts, &[field_equals("status", "pending")]);

    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|p| p.status == PostStatus::Pending));
}
