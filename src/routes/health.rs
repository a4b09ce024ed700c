use actix_web::{web, HttpResponse, Responder};

use crate::models::HealthResponse;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let users = state.engine.lock().await.user_count();

    HttpResponse::Ok().json(HealthResponse {
        message: "Alive".to_string(),
        users,
    })
}
