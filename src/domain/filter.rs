// src/domain/filter.rs

use crate::domain::comment::CanonicalComment;
use crate::domain::query::QuerySpec;

/// Keeps the comments matching every active clause of `spec`, in input order.
///
/// - text: case-insensitive substring of the reviewed vehicle's brand or model. Comments
///   without a joined vehicle never match while a search term is set.
/// - date: creation time within the inclusive range, when both bounds are set.
pub fn filter_comments<'a>(
    records: &'a [CanonicalComment],
    spec: &QuerySpec,
) -> Vec<&'a CanonicalComment> {
    let term = spec.search().to_lowercase();
    let range = spec.date_range();

    records
        .iter()
        .filter(|c| term.is_empty() || matches_term(c, &term))
        .filter(|c| range.contains(c.created_at))
        .collect()
}

fn matches_term(comment: &CanonicalComment, term: &str) -> bool {
    comment.vehicle.as_ref().is_some_and(|v| {
        v.brand.to_lowercase().contains(term) || v.model.to_lowercase().contains(term)
    })
}
