// src/domain/sort.rs

use crate::domain::comment::CanonicalComment;
use crate::domain::query::{Direction, SortKey};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns a newly ordered copy of `records`.
///
/// Descending is the ascending comparison reversed, and the sort is stable, so records with
/// equal keys keep their input order in both directions.
pub fn sort_comments<'a>(
    records: &[&'a CanonicalComment],
    key: SortKey,
    direction: Direction,
) -> Vec<&'a CanonicalComment> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
    out
}

fn compare(a: &CanonicalComment, b: &CanonicalComment, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a
            .created_at
            .timestamp_millis()
            .cmp(&b.created_at.timestamp_millis()),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::Name => collate(&a.vehicle_name(), &b.vehicle_name()),
    }
}

/// Accent- and case-insensitive comparison, falling back to the lowercased text to break
/// ties between accented and plain spellings ("Citroen" < "Citroën").
pub fn collate(a: &str, b: &str) -> Ordering {
    let (la, lb) = (a.to_lowercase(), b.to_lowercase());
    fold(&la).cmp(&fold(&lb)).then_with(|| la.cmp(&lb))
}

fn fold(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
