//! Projection scenarios: the badges, tables, and groupings the admin
//! dashboard and stats page render.

use integration_tests::harness_at;
use tb_core::models::{Post, PostStatus, WorldCup};
use tb_query::{count_by, group_by, to_summary_row, Predicate};
use tb_store::{defaults, moderation};

fn is_pending() -> Predicate<Post> {
    Box::new(|post: &Post| post.status == PostStatus::Pending)
}

#[test]
fn approving_a_post_shrinks_the_pending_badge() {
    let harness = harness_at("2025-04-01T12:00:00Z");
    harness.store.seed_if_empty(&defaults::default_posts()).unwrap();

    let before = count_by(&harness.store.list::<Post>(), &is_pending());
    assert_eq!(before, 2);

    let target = harness
        .store
        .list::<Post>()
        .into_iter()
        .find(|p| p.status == PostStatus::Pending)
        .unwrap();
    assert!(moderation::approve(&harness.store, target.id).unwrap());

    let after = count_by(&harness.store.list::<Post>(), &is_pending());
    assert_eq!(after, before - 1);

    // Approving something that does not exist moves nothing.
    assert!(!moderation::approve(&harness.store, 987_654).unwrap());
    assert_eq!(count_by(&harness.store.list::<Post>(), &is_pending()), after);
}

#[test]
fn world_cup_table_rows_stringify_in_column_order() {
    let harness = harness_at("2025-04-01T12:00:00Z");
    harness
        .store
        .seed_if_empty(&defaults::default_world_cups())
        .unwrap();

    let cups = harness.store.list::<WorldCup>();
    let row = to_summary_row(
        &cups[0],
        &["year", "host", "champion", "runnerUp", "goals", "topScorer"],
    );

    assert_eq!(row, vec!["2022", "Qatar", "Argentina", "France", "172", "-"]);
}

#[test]
fn posts_group_by_category_in_first_seen_order() {
    let harness = harness_at("2025-04-01T12:00:00Z");
    harness.store.seed_if_empty(&defaults::default_posts()).unwrap();

    let posts = harness.store.list::<Post>();
    let groups = group_by(&posts, "category");

    let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["Goals", "History", "Tactics", "Stadiums"]);

    let history = &groups[1].1;
    assert_eq!(history.len(), 2);

    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, posts.len(), "every post lands in exactly one group");
}
