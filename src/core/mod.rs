// Core algorithm exports
pub mod insights;
pub mod matcher;
pub mod scoring;
pub mod tokens;

pub use insights::match_insights;
pub use matcher::{Matcher, MatchResult, DEFAULT_DAILY_LIMIT};
pub use scoring::compatibility_score;
pub use tokens::{tokenize, is_significant, overlap_score};
