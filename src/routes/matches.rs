use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::SwipeAction;
use crate::error::EngineError;
use crate::models::SwipeRequest;
use crate::routes::{user_token, AppState};

/// Configure swipe and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/likes/swipe", web::post().to(swipe))
        .route("/matches", web::get().to(list_matches));
}

/// Record a swipe
///
/// POST /likes/swipe (requires `user-token`)
///
/// Request body:
/// ```json
/// {
///   "targetUserId": "string",
///   "action": "like|dislike"
/// }
/// ```
///
/// The body is decoded only after the token resolves, so an
/// unauthenticated caller gets 401 whatever it sent.
async fn swipe(
    state: web::Data<AppState>,
    body: web::Bytes,
    http_req: HttpRequest,
) -> Result<HttpResponse, EngineError> {
    let mut engine = state.engine.lock().await;
    let actor = engine.authenticate(user_token(&http_req))?;

    let req: SwipeRequest = serde_json::from_slice(&body)
        .map_err(|e| EngineError::Validation(format!("Invalid JSON: {}", e)))?;
    req.validate()?;
    let target_id = Uuid::parse_str(&req.target_user_id).map_err(|_| EngineError::user_not_found())?;
    let action = SwipeAction::parse(req.action.as_deref());

    tracing::info!("Swipe: {} -> {} ({:?})", actor.id, target_id, action);

    let result = engine.swipe(actor.id, target_id, action)?;
    Ok(HttpResponse::Ok().json(result))
}

/// Users the caller has a mutual like with
///
/// GET /matches (requires `user-token`)
async fn list_matches(
    state: web::Data<AppState>,
    http_req: HttpRequest,
) -> Result<HttpResponse, EngineError> {
    let engine = state.engine.lock().await;
    let user = engine.authenticate(user_token(&http_req))?;

    let matches = engine.matches_for(&user.id);
    tracing::debug!("Returning {} matches for user {}", matches.len(), user.id);
    Ok(HttpResponse::Ok().json(matches))
}
