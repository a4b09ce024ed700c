// Route exports
pub mod health;
pub mod matches;
pub mod users;

use actix_cors::Cors;
use actix_web::{http::header, web, HttpRequest};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::CorsSettings;
use crate::core::MatchEngine;
use crate::services::USER_TOKEN_HEADER;

/// Application state shared across all handlers
///
/// The single engine mutex serializes every directory and ledger access.
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: Arc<Mutex<MatchEngine>>,
}

impl AppState {
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(users::configure)
        .configure(matches::configure);
}

/// Raw `user-token` header value, if present and valid ASCII
pub(crate) fn user_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(USER_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
}

const DEV_ORIGINS: [&str; 3] = [
    "http://localhost:3003",
    "http://localhost:5173",
    "http://localhost:4173",
];

/// CORS policy: permissive until a frontend origin is configured
pub fn cors(settings: &CorsSettings) -> Cors {
    let frontend_url = settings
        .frontend_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());
    let Some(frontend_url) = frontend_url else {
        return Cors::permissive();
    };

    DEV_ORIGINS
        .iter()
        .fold(Cors::default().allowed_origin(frontend_url), |cors, origin| {
            cors.allowed_origin(origin)
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static(USER_TOKEN_HEADER),
        ])
        .supports_credentials()
}
