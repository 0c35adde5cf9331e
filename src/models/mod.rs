// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, MatchScore, SwipeEvent, SwipeAction, ScoringWeights};
pub use requests::{DailyMatchesRequest, RecordSwipeRequest};
pub use responses::{DailyMatchesResponse, DailyMatch, HealthResponse, ErrorResponse, RecordSwipeResponse};
