use crate::core::tokens::overlap_score;
use crate::models::{MatchScore, ScoringWeights, UserProfile};

/// Compute the compatibility score (0-100) of a candidate relative to a subject
///
/// Scoring formula:
/// score = (
///     interest_score * 0.30 +      # Shared interests
///     value_score * 0.25 +         # Values token overlap
///     life_goals_score * 0.25 +    # Life-goals token overlap
///     proximity_score * 0.20       # Age gap, or location match
/// )
///
/// Each component is rounded independently for reporting; the total is
/// rounded once, from the unrounded weighted sum. Missing or empty fields
/// contribute 0 to their factor, never an error.
pub fn compatibility_score(
    subject: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
) -> MatchScore {
    let interests = interest_score(subject, candidate);
    let values = overlap_score(&subject.values, &candidate.values);
    let life_goals = overlap_score(&subject.life_goals, &candidate.life_goals);
    let proximity = proximity_score(subject, candidate);

    let total = interests * weights.interests
        + values * weights.values
        + life_goals * weights.life_goals
        + proximity * weights.proximity;

    MatchScore {
        user_id: candidate.user_id.clone(),
        total_score: total.clamp(0.0, 100.0).round() as u8,
        interest_score: interests.round() as u8,
        value_score: values.round() as u8,
        life_goals_score: life_goals.round() as u8,
        proximity_score: proximity.round() as u8,
    }
}

/// Shared-interest score (0-100)
///
/// Exact, case-sensitive matching; the denominator is the larger of the
/// two interest lists, so lopsided profiles are not rewarded for breadth.
#[inline]
fn interest_score(a: &UserProfile, b: &UserProfile) -> f64 {
    if a.interests.is_empty() || b.interests.is_empty() {
        return 0.0;
    }

    let shared = a
        .interests
        .iter()
        .filter(|interest| b.interests.contains(interest))
        .count();
    let larger = a.interests.len().max(b.interests.len());

    shared as f64 / larger as f64 * 100.0
}

/// Proximity score (0-100) from age gap or location match
///
/// When both profiles carry an age, the age rule wins and location is
/// never consulted; location only applies when at least one age is
/// missing. Each year of age gap costs 10 points, floored at 0.
#[inline]
fn proximity_score(a: &UserProfile, b: &UserProfile) -> f64 {
    if let (Some(age_a), Some(age_b)) = (a.scoring_age(), b.scoring_age()) {
        let gap = (i16::from(age_a) - i16::from(age_b)).abs() as f64;
        return (100.0 - 10.0 * gap).max(0.0);
    }

    if let (Some(loc_a), Some(loc_b)) = (a.scoring_location(), b.scoring_location()) {
        return if loc_a == loc_b { 100.0 } else { 50.0 };
    }

    0.0
}
