use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::EngineError;
use crate::models::{CreateUserRequest, LoginRequest, NewUser, ProfileChanges, UpdateInterestsRequest, UpdateProfileRequest};
use crate::routes::{user_token, AppState};

/// Configure user and profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users", web::post().to(create_user))
        .route("/login", web::post().to(login))
        .route("/users/discover", web::get().to(discover))
        .route("/users/{id}/profile", web::put().to(update_profile))
        .route("/users/{id}/interests", web::put().to(update_interests));
}

/// Register a user
///
/// POST /users
///
/// Request body:
/// ```json
/// {
///   "username": "string",
///   "password": "string",
///   "name": "string",
///   "gender": "Male|Female|...",
///   "dateOfBirth": "1995-04-12",
///   "preference": "Men|Women|Both|Other",
///   "interests": ["string"]
/// }
/// ```
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, EngineError> {
    req.validate()?;
    let new_user = NewUser::try_from(req.into_inner())?;

    let user = state.engine.lock().await.register(new_user);
    Ok(HttpResponse::Created().json(user))
}

async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, EngineError> {
    let user = state.engine.lock().await.login(&req.username, &req.password)?;
    tracing::info!("User {} logged in", user.id);
    Ok(HttpResponse::Ok().json(user))
}

/// Update profile fields; missing or empty fields keep their value
///
/// PUT /users/{id}/profile
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, EngineError> {
    let id = parse_user_id(&path)?;
    let changes = ProfileChanges::try_from(req.into_inner())?;

    let user = state.engine.lock().await.update_profile(&id, changes)?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /users/{id}/interests
async fn update_interests(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateInterestsRequest>,
) -> Result<HttpResponse, EngineError> {
    let id = parse_user_id(&path)?;

    let user = state
        .engine
        .lock()
        .await
        .update_interests(&id, req.into_inner().interests)?;
    Ok(HttpResponse::Ok().json(user))
}

/// Candidate profiles for the caller
///
/// GET /users/discover (requires `user-token`)
async fn discover(
    state: web::Data<AppState>,
    http_req: HttpRequest,
) -> Result<HttpResponse, EngineError> {
    let engine = state.engine.lock().await;
    let viewer = engine.authenticate(user_token(&http_req))?;

    let candidates = engine.discover(&viewer.id)?;
    Ok(HttpResponse::Ok().json(candidates))
}

/// Ids that are not even UUIDs cannot name a user
fn parse_user_id(raw: &str) -> Result<Uuid, EngineError> {
    Uuid::parse_str(raw).map_err(|_| EngineError::user_not_found())
}
