//! Link similarity scoring.

use std::collections::HashSet;

use crate::model::FieldTranslation;

/// Score how many of an entity's current links survive in its updated links.
///
/// Returns `|set(updated) ∩ set(current)| / |set(current)|`, a value in
/// `[0, 1]`. The ratio is asymmetric: links introduced only on the updated
/// side do not lower the score. Duplicate links collapse.
///
/// Returns `None` when `current_links` is empty.
pub fn link_score(
    current_links: &[FieldTranslation],
    updated_links: &[FieldTranslation],
) -> Option<f64> {
    let current_link_set: HashSet<&FieldTranslation> = current_links.iter().collect();
    if current_link_set.is_empty() {
        return None;
    }
    let updated_link_set: HashSet<&FieldTranslation> = updated_links.iter().collect();
    let retained = current_link_set.intersection(&updated_link_set).count();
    Some(retained as f64 / current_link_set.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(field: &str) -> FieldTranslation {
        FieldTranslation::link(field, "guid-src", field)
    }

    #[test]
    fn test_empty_current_has_no_score() {
        assert_eq!(link_score(&[], &[link("a")]), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let current = vec![link("a"), link("a"), link("b")];
        let updated = vec![link("a")];
        assert_eq!(link_score(&current, &updated), Some(0.5));
    }

    #[test]
    fn test_empty_updated_scores_zero() {
        assert_eq!(link_score(&[link("a")], &[]), Some(0.0));
    }
}
