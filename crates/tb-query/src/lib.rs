//! # tb-query
//!
//! Pure, side-effect-free querying over record sequences: predicate
//! composition, stable sorting, and presentation-ready projections.
//! Nothing in this crate touches storage; callers hand in the records
//! the store gave them.

pub mod filter;
pub mod project;
pub mod sort;

pub use filter::{
    date_within, field_equals, filter_by, is_active_user, is_banned_user, text_matches, Predicate,
};
pub use project::{count_by, group_by, to_summary_row};
pub use sort::{sort_by, SortDirection};
