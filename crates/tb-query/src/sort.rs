//! Stable sorting over record sequences. Ties, and every comparison
//! on an unknown key, resolve to the original insertion order, which
//! makes repeated sorts idempotent.

use tb_core::traits::Fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Returns a sorted copy. Numeric fields compare numerically, text
/// case-insensitively, timestamps chronologically; an unknown key
/// leaves the order unchanged.
pub fn sort_by<R: Fields + Clone>(records: &[R], key: &str, direction: SortDirection) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.field(key).compare(&b.field(key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::models::Post;

    fn post(title: &str, likes: i64) -> Post {
        Post {
            title: title.to_string(),
            likes,
            ..Default::default()
        }
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn numeric_sort_descending() {
        let posts = vec![post("b", 10), post("a", 1200), post("c", 45)];
        let sorted = sort_by(&posts, "likes", SortDirection::Descending);
        assert_eq!(titles(&sorted), vec!["a", "c", "b"]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let posts = vec![post("zidane", 0), post("Iniesta", 0), post("ronaldo", 0)];
        let sorted = sort_by(&posts, "title", SortDirection::Ascending);
        assert_eq!(titles(&sorted), vec!["Iniesta", "ronaldo", "zidane"]);
    }

    #[test]
    fn unknown_key_keeps_insertion_order() {
        let posts = vec![post("b", 10), post("a", 1200), post("c", 45)];
        let sorted = sort_by(&posts, "recent", SortDirection::Descending);
        assert_eq!(titles(&sorted), titles(&posts));
    }

    #[test]
    fn ties_keep_insertion_order_in_both_directions() {
        let posts = vec![post("first", 7), post("second", 7), post("third", 7)];

        let ascending = sort_by(&posts, "likes", SortDirection::Ascending);
        assert_eq!(titles(&ascending), vec!["first", "second", "third"]);

        let descending = sort_by(&posts, "likes", SortDirection::Descending);
        assert_eq!(titles(&descending), vec!["first", "second", "third"]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let posts = vec![post("b", 10), post("a", 1200), post("c", 45)];
        let once = sort_by(&posts, "likes", SortDirection::Descending);
        let twice = sort_by(&once, "likes", SortDirection::Descending);
        assert_eq!(once, twice);
    }
}
