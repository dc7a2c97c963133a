use crate::core::scoring::calculate_match_score;
use crate::models::{Neighborhood, ScoredNeighborhood, UserPreferences};

/// Result of ranking the catalog
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredNeighborhood>,
    pub total_candidates: usize,
}

/// Ranking orchestrator
///
/// Scores every catalog record against one questionnaire, drops records
/// below the minimum-match floor, and returns the rest sorted by score.
///
/// Sorting is stable and descending: neighborhoods with equal scores keep
/// their catalog order, so repeated runs over the same inputs produce the
/// same ordering bit for bit.
#[derive(Debug, Clone)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Rank the catalog against a questionnaire
    ///
    /// # Arguments
    /// * `preferences` - The completed questionnaire
    /// * `catalog` - The full neighborhood catalog, in catalog order
    /// * `limit` - Maximum number of matches to return
    /// * `min_score` - Optional per-request floor, overriding the default
    ///
    /// # Returns
    /// MatchResult with scored matches and the catalog size before
    /// filtering.
    pub fn rank(
        &self,
        preferences: &UserPreferences,
        catalog: &[Neighborhood],
        limit: usize,
        min_score: Option<u8>,
    ) -> MatchResult {
        let total_candidates = catalog.len();
        let floor = min_score.unwrap_or(self.min_score);

        let mut matches: Vec<ScoredNeighborhood> = catalog
            .iter()
            .map(|neighborhood| ScoredNeighborhood {
                neighborhood: neighborhood.clone(),
                match_score: calculate_match_score(neighborhood, preferences),
            })
            .filter(|scored| scored.match_score >= floor)
            .collect();

        // sort_by is stable: ties keep catalog order
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Demographics, Priority};

    fn create_neighborhood(id: u32, safety: u8, rent: f64) -> Neighborhood {
        Neighborhood {
            id,
            name: format!("Neighborhood {}", id),
            city: "Testville".to_string(),
            state: "TS".to_string(),
            safety_score: safety,
            walkability_score: 80,
            school_rating: 7,
            median_rent: rent,
            transit_score: 70,
            nightlife_score: 6,
            parks_score: 7,
            diversity_score: 7,
            job_opportunities: 7,
            amenities: vec![],
            demographics: Demographics {
                average_age: 33,
                family_friendly: 7,
                diversity: 7,
            },
            highlights: vec![],
        }
    }

    fn safety_preferences() -> UserPreferences {
        UserPreferences {
            priorities: vec![Priority::Safety],
            ..UserPreferences::default()
        }
    }

    #[test]
    fn test_rank_sorted_descending() {
        let matcher = Matcher::default();
        let catalog = vec![
            create_neighborhood(1, 4, 2000.0),
            create_neighborhood(2, 9, 2000.0),
            create_neighborhood(3, 6, 2000.0),
        ];

        let result = matcher.rank(&safety_preferences(), &catalog, 10, None);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<u32> = result.matches.iter().map(|m| m.neighborhood.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::default();
        let catalog = vec![
            create_neighborhood(1, 7, 2000.0),
            create_neighborhood(2, 7, 2000.0),
            create_neighborhood(3, 7, 2000.0),
        ];

        let result = matcher.rank(&safety_preferences(), &catalog, 10, None);

        let ids: Vec<u32> = result.matches.iter().map(|m| m.neighborhood.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_repeated_ranking_is_identical() {
        let matcher = Matcher::default();
        let catalog: Vec<Neighborhood> = (0..10)
            .map(|i| create_neighborhood(i, (i % 4) as u8 + 5, 1500.0 + f64::from(i) * 100.0))
            .collect();
        let preferences = safety_preferences();

        let first = matcher.rank(&preferences, &catalog, 10, None);
        let second = matcher.rank(&preferences, &catalog, 10, None);

        let first_ids: Vec<u32> = first.matches.iter().map(|m| m.neighborhood.id).collect();
        let second_ids: Vec<u32> = second.matches.iter().map(|m| m.neighborhood.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::default();
        let catalog: Vec<Neighborhood> =
            (1..=20).map(|i| create_neighborhood(i, 7, 2000.0)).collect();

        let result = matcher.rank(&safety_preferences(), &catalog, 5, None);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_min_score_floor_filters() {
        let matcher = Matcher::new(0);
        let catalog = vec![
            create_neighborhood(1, 2, 2000.0), // scores 20
            create_neighborhood(2, 9, 2000.0), // scores 90
        ];

        let result = matcher.rank(&safety_preferences(), &catalog, 10, Some(50));

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].neighborhood.id, 2);
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn test_configured_floor_used_without_override() {
        let matcher = Matcher::new(50);
        let catalog = vec![
            create_neighborhood(1, 2, 2000.0),
            create_neighborhood(2, 9, 2000.0),
        ];

        let result = matcher.rank(&safety_preferences(), &catalog, 10, None);

        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_empty_preferences_rank_all_zero() {
        let matcher = Matcher::default();
        let catalog = vec![
            create_neighborhood(1, 7, 2000.0),
            create_neighborhood(2, 9, 2000.0),
        ];

        let result = matcher.rank(&UserPreferences::default(), &catalog, 10, None);

        // Defined fallback: every record scores 0, catalog order preserved
        assert!(result.matches.iter().all(|m| m.match_score == 0));
        let ids: Vec<u32> = result.matches.iter().map(|m| m.neighborhood.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
