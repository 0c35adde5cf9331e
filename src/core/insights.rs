use crate::models::MatchScore;

/// Human-readable highlights for a match, derived from the score breakdown
///
/// Stateless mapping; the output order follows the check order below, and
/// the two total-score insights are mutually exclusive.
pub fn match_insights(score: &MatchScore) -> Vec<String> {
    let mut insights = Vec::new();

    if score.interest_score > 70 {
        insights.push("You share many of the same interests".to_string());
    }
    if score.value_score > 70 {
        insights.push("Your core values align closely".to_string());
    }
    if score.life_goals_score > 70 {
        insights.push("You want similar things out of life".to_string());
    }
    if score.proximity_score > 80 {
        insights.push("You're in the same area".to_string());
    }

    if score.total_score > 80 {
        insights.push("Great match potential".to_string());
    } else if score.total_score > 60 {
        insights.push("Good match potential".to_string());
    }

    insights
}
