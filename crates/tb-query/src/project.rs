//! View projections: presentation-ready aggregates derived from a
//! record sequence. Pure functions; rendering them is the caller's
//! business.

use crate::filter::Predicate;
use tb_core::traits::Fields;

/// Placeholder cell for missing or empty fields.
const EMPTY_CELL: &str = "-";

/// How many records satisfy the predicate. Drives badges and counters
/// (pending count, banned count).
pub fn count_by<R>(records: &[R], predicate: &Predicate<R>) -> usize {
    records.iter().filter(|record| predicate(record)).count()
}

/// Ordered, stringified field values for one table row. Missing and
/// empty fields render as `-`.
pub fn to_summary_row<R: Fields>(record: &R, columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            record
                .field(column)
                .display()
                .unwrap_or_else(|| EMPTY_CELL.to_string())
        })
        .collect()
}

/// Groups records by the display value of one field, preserving the
/// insertion order of first occurrence ("posts per category" style
/// aggregation).
pub fn group_by<R: Fields + Clone>(records: &[R], field: &str) -> Vec<(String, Vec<R>)> {
    let mut groups: Vec<(String, Vec<R>)> = Vec::new();

    for record in records {
        let key = record
            .field(field)
            .display()
            .unwrap_or_else(|| EMPTY_CELL.to_string());

        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((key, vec![record.clone()])),
        }
    }

    groups
}
