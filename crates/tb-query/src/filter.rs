//! Predicate constructors and composition. Every predicate is a pure
//! function from record to bool; composing zero predicates is the
//! identity.

use chrono::{DateTime, Utc};
use tb_core::models::User;
use tb_core::traits::{FieldValue, Fields};

/// A pure filter over one record.
pub type Predicate<R> = Box<dyn Fn(&R) -> bool>;

/// Logical AND of all supplied predicates. An empty predicate list
/// returns the input unchanged.
pub fn filter_by<R: Clone>(records: &[R], predicates: &[Predicate<R>]) -> Vec<R> {
    records
        .iter()
        .filter(|record| predicates.iter().all(|predicate| predicate(record)))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against any of the named fields.
/// The query is trimmed first; an empty query matches everything.
pub fn text_matches<R: Fields>(fields: &[&str], query: &str) -> Predicate<R> {
    let needle = query.trim().to_lowercase();
    let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();

    Box::new(move |record| {
        needle.is_empty()
            || fields
                .iter()
                .any(|field| record.field(field).contains_lower(&needle))
    })
}

/// Loose equality on a single field: text compares case-insensitively,
/// numbers numerically. A missing field matches nothing.
pub fn field_equals<R: Fields>(field: &str, value: impl Into<FieldValue>) -> Predicate<R> {
    let field = field.to_string();
    let value = value.into();

    Box::new(move |record| record.field(&field).eq_loose(&value))
}

/// Inclusive timestamp range on a single field. Records without the
/// field (or with a non-timestamp value there) never match.
pub fn date_within<R: Fields>(
    field: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Predicate<R> {
    let field = field.to_string();

    Box::new(move |record| match record.field(&field) {
        FieldValue::Timestamp(t) => start <= t && t <= end,
        _ => false,
    })
}

/// Users whose ban has expired or who were never banned. The probe
/// instant is explicit so callers (and tests) control the clock.
pub fn is_active_user(now: DateTime<Utc>) -> Predicate<User> {
    Box::new(move |user| !user.is_banned_at(now))
}

/// Users with a ban that is still running at the probe instant.
pub fn is_banned_user(now: DateTime<Utc>) -> Predicate<User> {
    Box::new(move |user| user.is_banned_at(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tb_core::models::{Post, PostStatus};

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    fn user(name: &str, username: &str) -> User {
        User {
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            ..Default::default()
        }
    }

    fn sample_users() -> Vec<User> {
        vec![
            user("Juan López", "juanlopez"),
            user("Ana Torres", "anat"),
            user("Pedro Ruiz", "pedro"),
        ]
    }

    #[test]
    fn empty_predicate_list_is_identity() {
        let users = sample_users();
        let filtered = filter_by(&users, &[]);
        assert_eq!(filtered, users, "same order, same elements");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let users = sample_users();

        let hits = filter_by(&users, &[text_matches(&["name", "username"], "juan")]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Juan López");

        let hits = filter_by(&users, &[text_matches(&["name", "username"], "JUAN")]);
        assert_eq!(hits.len(), 1, "query case never matters");
    }

    #[test]
    fn blank_query_matches_everything() {
        let users = sample_users();
        let hits = filter_by(&users, &[text_matches(&["name"], "   ")]);
        assert_eq!(hits.len(), users.len());
    }

    #[test]
    fn predicates_compose_with_and() {
        let posts = vec![
            Post {
                title: "Messi lifts the cup".into(),
                category: "Goals".into(),
                status: PostStatus::Published,
                ..Default::default()
            },
            Post {
                title: "Messi in training".into(),
                category: "Players".into(),
                status: PostStatus::Published,
                ..Default::default()
            },
            Post {
                title: "Tactical breakdown".into(),
                category: "Goals".into(),
                status: PostStatus::Pending,
                ..Default::default()
            },
        ];

        let hits = filter_by(
            &posts,
            &[
                text_matches(&["title", "description"], "messi"),
                field_equals("category", "goals"),
            ],
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Messi lifts the cup");
    }

    #[test]
    fn missing_field_never_equals() {
        let posts = vec![Post::default()];
        let hits = filter_by(&posts, &[field_equals("worldCup", 2022_i64)]);
        assert!(hits.is_empty());
    }

    #[test]
    fn date_within_is_inclusive() {
        let start = instant("2025-01-01T00:00:00Z");
        let end = instant("2025-01-31T00:00:00Z");

        let mut inside = user("Juan López", "juanlopez");
        inside.meta.created_at = start;
        let mut outside = user("Ana Torres", "anat");
        outside.meta.created_at = end + Duration::seconds(1);

        let users = vec![inside.clone(), outside];
        let hits = filter_by(&users, &[date_within("createdAt", start, end)]);
        assert_eq!(hits, vec![inside]);
    }

    #[test]
    fn ban_predicates_follow_the_expiry_rule() {
        let now = instant("2025-06-10T00:00:00Z");

        let mut banned = user("Pedro Ruiz", "pedro");
        banned.banned_until = Some(now + Duration::days(3));
        let expired = {
            let mut u = user("Ana Torres", "anat");
            u.banned_until = Some(now - Duration::days(1));
            u
        };
        let clean = user("Juan López", "juanlopez");

        let users = vec![banned.clone(), expired, clean];

        let banned_now = filter_by(&users, &[is_banned_user(now)]);
        assert_eq!(banned_now.len(), 1);
        assert_eq!(banned_now[0].username, "pedro");

        assert_eq!(filter_by(&users, &[is_active_user(now)]).len(), 2);

        // Four days later the 3-day ban has run out.
        let later = now + Duration::days(4);
        assert!(filter_by(&users, &[is_banned_user(later)]).is_empty());
    }
}
