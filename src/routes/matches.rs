use actix_web::{web, HttpResponse, Responder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use validator::Validate;

use crate::core::{match_insights, Matcher};
use crate::models::{
    DailyMatch, DailyMatchesRequest, DailyMatchesResponse, ErrorResponse, HealthResponse,
    RecordSwipeRequest, RecordSwipeResponse, SwipeAction, SwipeEvent, UserProfile,
};
use crate::services::{AppwriteClient, CacheKey, CacheManager, SwipeKind, SwipeStore};

/// Request limits taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub daily: usize,
    pub max: usize,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub appwrite: Arc<AppwriteClient>,
    pub cache: Arc<CacheManager>,
    pub swipes: Arc<SwipeStore>,
    pub matcher: Matcher,
    pub limits: MatchLimits,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/daily", web::post().to(daily_matches))
        .route("/swipes", web::post().to(record_swipe))
        .route("/swipes/seen", web::get().to(get_seen_profiles))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.swipes.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Debug endpoint to echo raw JSON for debugging
async fn debug_echo(
    body: web::Bytes,
    req: actix_web::HttpRequest,
) -> impl Responder {
    let body_str = String::from_utf8_lossy(&body);
    tracing::info!("DEBUG echo - path: {}, method: {}, body: {}", req.path(), req.method(), body_str);
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// Daily matches endpoint
///
/// POST /api/v1/matches/daily
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 10,
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn daily_matches(
    state: web::Data<AppState>,
    req: web::Json<DailyMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for daily_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.limits.daily)
        .min(state.limits.max);

    tracing::info!("Generating daily matches for user: {}, limit: {}", user_id, limit);

    // Note: match responses are not cached so swipe history is always current

    // Fetch swipe history from PostgreSQL to prevent repeats
    let seen_ids = match state.swipes.seen_profile_ids(user_id).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!("Failed to fetch swipe history for {}, proceeding without it: {}", user_id, e);
            vec![]
        }
    };

    // Merge in client-provided exclusions (if any)
    let excluded: HashSet<String> = seen_ids
        .into_iter()
        .chain(req.exclude_user_ids.iter().cloned())
        .collect();

    tracing::debug!("Excluding {} profiles for user {}", excluded.len(), user_id);

    // Fetch the subject's profile
    let subject = match state.appwrite.get_profile(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch user profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Fetch candidates, overshooting the limit so ranking has room to work
    let exclude_list: Vec<String> = excluded.iter().cloned().collect();
    let candidates = match state
        .appwrite
        .list_candidates(user_id, &exclude_list, limit * 5)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query candidates for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to query candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Found {} candidates for {}", candidates.len(), user_id);

    // Run the compatibility engine
    let result = state
        .matcher
        .daily_matches(&subject, &candidates, &excluded, limit);

    // Join scores back onto profile display data
    let by_id: HashMap<&str, &UserProfile> = candidates
        .iter()
        .map(|c| (c.user_id.as_str(), c))
        .collect();

    let matches: Vec<DailyMatch> = result
        .matches
        .into_iter()
        .filter_map(|score| {
            let profile = by_id.get(score.user_id.as_str())?;
            let insights = match_insights(&score);
            Some(DailyMatch {
                user_id: score.user_id.clone(),
                name: profile.name.clone(),
                age: profile.age,
                location: profile.location.clone(),
                photo_file_ids: profile.photo_file_ids.clone(),
                score,
                insights,
            })
        })
        .collect();

    let response = DailyMatchesResponse {
        matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Record swipe endpoint
///
/// POST /api/v1/swipes
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "targetUserId": "string",
///   "action": "liked|passed|superliked|matched"
/// }
/// ```
async fn record_swipe(
    state: web::Data<AppState>,
    req: web::Json<RecordSwipeRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Parse action
    let action = match req.action.to_lowercase().as_str() {
        "liked" => SwipeAction::Liked,
        "passed" => SwipeAction::Passed,
        "superliked" => SwipeAction::Superliked,
        "matched" => SwipeAction::Matched,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid swipe action".to_string(),
                message: "Action must be one of: liked, passed, superliked, matched".to_string(),
                status_code: 400,
            });
        }
    };

    let event = SwipeEvent {
        user_id: req.user_id.clone(),
        target_user_id: req.target_user_id.clone(),
        action,
        created_at: chrono::Utc::now(),
    };

    // Record in PostgreSQL, the source of truth for swipe history
    let store_result = state.swipes.record_swipe(
        &req.user_id,
        &req.target_user_id,
        SwipeKind::from(action),
    ).await;

    // Mirror into Appwrite (best-effort, for analytics/client sync)
    let appwrite_result = state.appwrite.record_swipe(event).await;

    match store_result {
        Ok(_) => {
            if let Err(e) = &appwrite_result {
                // Log the mirror failure but don't fail the request
                tracing::warn!("Swipe recorded in PostgreSQL but Appwrite mirror failed: {}", e);
            } else {
                tracing::debug!(
                    "Recorded swipe: {} -> {} ({})",
                    req.user_id,
                    req.target_user_id,
                    req.action
                );
            }

            // Invalidate cached entries for this user
            if let Err(e) = state.cache.delete(&CacheKey::daily_matches(&req.user_id)).await {
                tracing::warn!("Failed to invalidate cache: {}", e);
            }

            HttpResponse::Ok().json(RecordSwipeResponse {
                success: true,
                swipe_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to record swipe in PostgreSQL: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record swipe".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get seen profiles for a user
///
/// GET /api/v1/swipes/seen?userId={userId}
///
/// Returns the profile IDs the user has already swiped on, for
/// client-side synchronization and debugging purposes.
async fn get_seen_profiles(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing userId parameter".to_string(),
                message: "userId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.swipes.seen_profile_ids(user_id).await {
        Ok(seen_ids) => {
            HttpResponse::Ok().json(serde_json::json!({
                "userId": user_id,
                "seenProfiles": seen_ids,
                "count": seen_ids.len(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to fetch seen profiles for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch seen profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
