// HTTP integration tests for Matchmaker

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use matchmaker::error::handle_json_payload_error;
use matchmaker::routes::{configure_routes, AppState};
use serde_json::{json, Value};

async fn init_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(configure_routes),
    )
    .await
}

async fn create_user<S>(app: &S, username: &str, gender: &str, preference: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "username": username,
            "password": "secret",
            "gender": gender,
            "preference": preference,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    body["_id"].as_str().unwrap().to_string()
}

async fn swipe<S>(app: &S, token: &str, target: &str, action: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .insert_header(("user-token", token))
        .set_json(json!({ "targetUserId": target, "action": action }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    test::read_body_json(resp).await
}

async fn get_ids<S>(app: &S, uri: &str, token: &str) -> Vec<String>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(("user-token", token))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    body.as_array()
        .unwrap()
        .iter()
        .map(|u| u["_id"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_health_counts_users() {
    let app = init_app().await;
    create_user(&app, "ana", "Female", "Men").await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Alive");
    assert_eq!(body["users"], 1);
}

#[actix_web::test]
async fn test_register_defaults_and_hashed_password() {
    let app = init_app().await;
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "ana", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "");
    assert_eq!(body["gender"], "");
    assert_eq!(body["preference"], "");
    assert_eq!(body["interests"], json!([]));
    assert!(body["dateOfBirth"].is_null());
    assert_ne!(body["password"], "secret");
}

#[actix_web::test]
async fn test_register_rejects_malformed_body() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "ana" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login() {
    let app = init_app().await;
    let id = create_user(&app, "ana", "Female", "Men").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": "ana", "password": "secret" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["_id"], id.as_str());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": "ana", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn test_login_with_blank_credentials_is_401() {
    let app = init_app().await;
    create_user(&app, "ana", "Female", "Men").await;

    for creds in [
        json!({ "username": "", "password": "" }),
        json!({ "username": "ana", "password": "" }),
        json!({ "username": "", "password": "secret" }),
    ] {
        let req = test::TestRequest::post().uri("/login").set_json(creds).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn test_profile_and_interest_updates() {
    let app = init_app().await;
    let id = create_user(&app, "ana", "Female", "Men").await;

    let req = test::TestRequest::put()
        .uri(&format!("/users/{}/profile", id))
        .set_json(json!({ "name": "Ana", "preference": "Both", "dateOfBirth": "1996-03-14" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["gender"], "Female");
    assert_eq!(body["preference"], "Both");
    assert!(body["dateOfBirth"].as_str().unwrap().starts_with("1996-03-14"));

    let req = test::TestRequest::put()
        .uri(&format!("/users/{}/interests", id))
        .set_json(json!({ "interests": ["climbing", "jazz"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["interests"], json!(["climbing", "jazz"]));
}

#[actix_web::test]
async fn test_update_unknown_user_is_404() {
    let app = init_app().await;

    for uri in [
        "/users/00000000-0000-0000-0000-000000000000/profile",
        "/users/not-an-id/profile",
    ] {
        let req = test::TestRequest::put()
            .uri(uri)
            .set_json(json!({ "name": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    let req = test::TestRequest::put()
        .uri("/users/00000000-0000-0000-0000-000000000000/interests")
        .set_json(json!({ "interests": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_auth_failures() {
    let app = init_app().await;

    let req = test::TestRequest::get().uri("/users/discover").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No user token provided");

    let req = test::TestRequest::get()
        .uri("/matches")
        .insert_header(("user-token", "nobody"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User not found");

    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .set_json(json!({ "targetUserId": "x", "action": "like" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_swipe_unknown_target_is_404() {
    let app = init_app().await;
    let me = create_user(&app, "ana", "Female", "Men").await;

    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .insert_header(("user-token", me.as_str()))
        .set_json(json!({ "targetUserId": "00000000-0000-0000-0000-000000000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn test_swipe_checks_token_before_body() {
    let app = init_app().await;
    let me = create_user(&app, "ana", "Female", "Men").await;

    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No user token provided");

    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .insert_header(("user-token", "nobody"))
        .set_json(json!({ "action": "like" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .insert_header(("user-token", me.as_str()))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));

    let req = test::TestRequest::post()
        .uri("/likes/swipe")
        .insert_header(("user-token", me.as_str()))
        .set_json(json!({ "targetUserId": "", "action": "like" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_end_to_end_discover_swipe_match() {
    let app = init_app().await;
    let a = create_user(&app, "a", "Male", "Women").await;
    let b = create_user(&app, "b", "Female", "Men").await;
    let c = create_user(&app, "c", "Female", "Women").await;

    assert_eq!(get_ids(&app, "/users/discover", &a).await, vec![b.clone()]);
    assert_eq!(get_ids(&app, "/users/discover", &b).await, vec![a.clone()]);
    assert!(!get_ids(&app, "/users/discover", &c).await.contains(&a));

    let first = swipe(&app, &a, &b, "like").await;
    assert_eq!(first["match"], false);
    assert!(first["matchedUser"].is_null());
    assert!(get_ids(&app, "/users/discover", &a).await.is_empty());
    assert!(get_ids(&app, "/matches", &a).await.is_empty());

    // Unknown actions fall back to a like
    let second = swipe(&app, &b, &a, "superlike").await;
    assert_eq!(second["match"], true);
    assert_eq!(second["matchedUser"]["_id"], a.as_str());

    assert_eq!(get_ids(&app, "/matches", &a).await, vec![b.clone()]);
    assert_eq!(get_ids(&app, "/matches", &b).await, vec![a.clone()]);
}

#[actix_web::test]
async fn test_dislike_hides_without_matching() {
    let app = init_app().await;
    let a = create_user(&app, "a", "Male", "Women").await;
    let b = create_user(&app, "b", "Female", "Men").await;

    swipe(&app, &b, &a, "like").await;
    let result = swipe(&app, &a, &b, "dislike").await;

    assert_eq!(result["match"], false);
    assert!(result["matchedUser"].is_null());
    assert!(get_ids(&app, "/users/discover", &a).await.is_empty());
    assert!(get_ids(&app, "/matches", &b).await.is_empty());
}
