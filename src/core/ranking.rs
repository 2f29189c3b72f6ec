use crate::core::scoring::score_breakdown;
use crate::models::{AnswerSet, Neighborhood, Preferences, ScoredNeighborhood};

/// Number of neighborhoods surfaced when a session completes
pub const RECOMMENDATION_LIMIT: usize = 2;

/// Score every neighborhood and return the best `limit`, highest first.
///
/// The sort is stable, so equal scores keep the catalog's declaration order.
pub fn rank(
    answers: &AnswerSet,
    catalog: &'static [Neighborhood],
    limit: usize,
) -> Vec<ScoredNeighborhood> {
    let prefs = Preferences::from(answers);

    let mut scored: Vec<ScoredNeighborhood> = catalog
        .iter()
        .map(|neighborhood| {
            let (score, matched_rules) = score_breakdown(&prefs, neighborhood);
            ScoredNeighborhood {
                neighborhood,
                score,
                matched_rules,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
