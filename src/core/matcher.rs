use crate::core::scoring::compatibility_score;
use crate::models::{MatchScore, ScoringWeights, UserProfile};
use std::collections::HashSet;

/// Default number of daily matches surfaced per scoring cycle
pub const DEFAULT_DAILY_LIMIT: usize = 10;

/// Result of a daily match generation run
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchScore>,
    pub total_candidates: usize,
}

/// Daily match generator
///
/// # Pipeline
/// 1. Drop the subject's own profile and anything already seen
/// 2. Score every remaining candidate against the subject
/// 3. Rank by total score, candidate id breaking ties
/// 4. Keep the top `limit`
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Generate up to `limit` ranked daily matches for a subject
    ///
    /// # Arguments
    /// * `subject` - The profile matches are generated for
    /// * `candidates` - Candidate pool from the profile platform
    /// * `excluded` - Ids already swiped on or otherwise ruled out
    /// * `limit` - Maximum number of matches to return; 0 yields none
    ///
    /// An empty pool after filtering yields an empty result, not an error.
    pub fn daily_matches(
        &self,
        subject: &UserProfile,
        candidates: &[UserProfile],
        excluded: &HashSet<String>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<MatchScore> = candidates
            .iter()
            .filter(|c| c.user_id != subject.user_id && !excluded.contains(&c.user_id))
            .map(|c| compatibility_score(subject, c, &self.weights))
            .collect();

        // Candidate id as the secondary key keeps repeated runs over the
        // same pool returning the same page.
        scored.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        scored.truncate(limit);

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
