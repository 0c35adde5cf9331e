use serde::{Deserialize, Serialize};
use crate::models::domain::MatchScore;

/// One ranked daily match: score breakdown plus the display data
/// the client needs to render a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub location: Option<String>,
    #[serde(rename = "photoFileIds")]
    pub photo_file_ids: Vec<String>,
    pub score: MatchScore,
    pub insights: Vec<String>,
}

/// Response for the daily matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMatchesResponse {
    pub matches: Vec<DailyMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record swipe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSwipeResponse {
    pub success: bool,
    #[serde(rename = "swipeId")]
    pub swipe_id: String,
}
