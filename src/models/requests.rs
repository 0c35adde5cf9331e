use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for a batch of daily matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DailyMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    #[serde(alias = "limit", rename = "limit")]
    pub limit: Option<u16>,
    #[serde(default)]
    #[serde(alias = "excludeUserIds", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
}

/// Request to record a swipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordSwipeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "targetUserId", rename = "targetUserId")]
    pub target_user_id: String,
    #[serde(alias = "action", rename = "action")]
    pub action: String,
}
