use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dating profile as stored in the Luvlang `profiles` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub values: String,
    #[serde(rename = "lifeGoals", default)]
    pub life_goals: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "personalityAnswers", default)]
    pub personality_answers: Option<HashMap<String, String>>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "photoFileIds", default)]
    pub photo_file_ids: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl UserProfile {
    /// Age usable for scoring. Zero is a storage sentinel for "not set".
    pub fn scoring_age(&self) -> Option<u8> {
        self.age.filter(|&a| a > 0)
    }

    /// Location usable for scoring. Empty strings count as not set.
    pub fn scoring_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }
}

fn default_true() -> bool { true }

/// Score breakdown for one candidate relative to a subject profile
///
/// The life-goals component is serialized under its historical
/// `personalityScore` wire name, which existing clients still read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    #[serde(rename = "interestScore")]
    pub interest_score: u8,
    #[serde(rename = "valueScore")]
    pub value_score: u8,
    #[serde(rename = "personalityScore")]
    pub life_goals_score: u8,
    #[serde(rename = "proximityScore")]
    pub proximity_score: u8,
}

/// Swipe event for tracking user interactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub user_id: String,
    pub target_user_id: String,
    pub action: SwipeAction,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Liked,
    Passed,
    Superliked,
    Matched,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub interests: f64,
    pub values: f64,
    pub life_goals: f64,
    pub proximity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 0.30,
            values: 0.25,
            life_goals: 0.25,
            proximity: 0.20,
        }
    }
}
