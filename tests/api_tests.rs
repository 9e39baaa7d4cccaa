/// End-to-end tests against the HTTP router
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use gallopics::{server::build_router, AppConfig, AppContext};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::for_data_directory(dir.path().join("data"));
    config.catalog.seed = Some(7);
    config.catalog.photo_count = 200;
    config
}

async fn app(dir: &TempDir) -> (Router, AppContext) {
    let ctx = AppContext::new(config(dir)).await.unwrap();
    (build_router(ctx.clone()), ctx)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_cors_preflight_allows_profile_patch() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/auth/profile")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allowed.contains("PATCH"));
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cart_flow() {
    let dir = TempDir::new().unwrap();
    let (app, ctx) = app(&dir).await;
    let photo_id = ctx.catalog.photos()[0].id.clone();

    let add = json!({ "photoId": photo_id, "quality": "high" });
    let (status, body) = send(&app, Method::POST, "/api/cart", Some(add.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["added"], true);
    assert_eq!(body["cart"]["total"], 999);

    // Same photo and tier again is a no-op
    let (_, body) = send(&app, Method::POST, "/api/cart", Some(add)).await;
    assert_eq!(body["added"], false);
    assert_eq!(body["cart"]["count"], 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "photoId": photo_id, "quality": "ultra" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRequest");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "photoId": "missing", "quality": "web" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/cart/photo/{}", photo_id);
    let (_, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(body["removed"], 1);
    assert_eq!(body["cart"]["total"], 0);
}

#[tokio::test]
async fn test_auth_session_flow() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    let (_, body) = send(&app, Method::GET, "/api/auth/session", None).await;
    assert_eq!(body["isAuthenticated"], false);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/auth/profile",
        Some(json!({ "city": "Malmö" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "AuthenticationRequired");

    let (_, body) = send(&app, Method::POST, "/api/auth/login", None).await;
    assert_eq!(body["isAuthenticated"], true);
    assert_eq!(body["user"]["displayName"], "Klara Fors");
    assert_eq!(body["user"]["hasCompletedOnboarding"], false);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/auth/profile",
        Some(json!({ "city": "Malmö" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Malmö");

    let (_, body) = send(&app, Method::POST, "/api/auth/logout", None).await;
    assert_eq!(body["isAuthenticated"], false);
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn test_login_rejects_malformed_profile() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    // snake_case keys leave the required displayName missing
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "display_name": "Ida Berg", "city": "Malmö" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRequest");

    let (_, body) = send(&app, Method::GET, "/api/auth/session", None).await;
    assert_eq!(body["isAuthenticated"], false);
    assert!(body["user"].is_null());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "displayName": "Ida Berg", "city": "Malmö" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAuthenticated"], true);
    assert_eq!(body["user"]["displayName"], "Ida Berg");
    assert_eq!(body["user"]["city"], "Malmö");
}

#[tokio::test]
async fn test_register_reports_field_errors() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "firstName": "Ida",
            "lastName": "",
            "email": "ida@example.com",
            "password": "short",
            "confirmPassword": "short"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidFields");
    assert_eq!(body["fields"]["last_name"], "Last name is required");
    assert_eq!(body["fields"]["password"], "Password must be at least 8 characters");
}

#[tokio::test]
async fn test_checkout_and_pay() {
    let dir = TempDir::new().unwrap();
    let (app, ctx) = app(&dir).await;
    let photo_id = ctx.catalog.photos()[1].id.clone();

    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "photoId": photo_id, "quality": "web" })),
    )
    .await;

    let (status, _) = send(&app, Method::POST, "/api/checkout/pay", Some(json!({ "method": "swish" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout/code",
        Some(json!({ "email": "buyer@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "verify");

    let (_, body) = send(&app, Method::POST, "/api/checkout/verify", Some(json!({ "code": "123456" }))).await;
    assert_eq!(body["step"], "verified");

    let (status, _) = send(&app, Method::POST, "/api/checkout/pay", Some(json!({ "method": "cash" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::POST, "/api/checkout/pay", Some(json!({ "method": "klarna" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 499);
    assert_eq!(body["paymentMethod"], "klarna");
    assert_eq!(body["email"], "buyer@example.com");

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_photo_listing_pairs_rider_and_horse() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    let (status, body) = send(&app, Method::GET, "/api/photos?rider=Ebba%20Lindstr%C3%B6m", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filters"]["horse"], "Björkdal Brave");
    assert_eq!(body["isDefault"], false);

    let photos = body["photos"].as_array().unwrap();
    assert!(!photos.is_empty());
    assert!(photos.iter().all(|p| p["horse"] == "Björkdal Brave"));

    let horses = body["options"]["horses"].as_array().unwrap();
    assert_eq!(horses.len(), 1);

    let (_, body) = send(&app, Method::GET, "/api/photos?discipline=Polo", None).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_photo_view_is_recorded() {
    let dir = TempDir::new().unwrap();
    let (app, ctx) = app(&dir).await;
    let first = ctx.catalog.photos()[0].id.clone();
    let third = ctx.catalog.photos()[2].id.clone();

    let (_, body) = send(&app, Method::GET, &format!("/api/photos/{}", third), None).await;
    assert_eq!(body["photo"]["id"], third.as_str());
    assert_eq!(body["offers"].as_array().unwrap().len(), 3);

    // Unknown ids resolve to the first photo
    let (status, body) = send(&app, Method::GET, "/api/photos/unknown", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["photo"]["id"], first.as_str());

    let (_, body) = send(&app, Method::GET, "/api/recent", None).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), third.as_str()]);
}

#[tokio::test]
async fn test_workspace_errors() {
    let dir = TempDir::new().unwrap();
    let (app, _ctx) = app(&dir).await;

    let (status, _) = send(&app, Method::POST, "/api/pg/events/c99/register", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/pg/upload/files",
        Some(json!({ "files": [{ "fileName": "a.jpg", "size": 10 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let ids: Vec<String> = (0..11).map(|i| format!("p{}", i)).collect();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/pg/highlights",
        Some(json!({ "photoIds": ids })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/pg/events", None).await;
    assert_eq!(body["myEvents"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let (app, ctx) = app(&dir).await;
        let photo_id = ctx.catalog.photos()[0].id.clone();
        send(
            &app,
            Method::POST,
            "/api/cart",
            Some(json!({ "photoId": photo_id, "quality": "original" })),
        )
        .await;
        send(&app, Method::POST, "/api/auth/login", None).await;
        send(&app, Method::POST, "/api/preferences/intro", None).await;
    }

    let (app, _ctx) = app(&dir).await;
    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["total"], 1499);

    let (_, body) = send(&app, Method::GET, "/api/auth/session", None).await;
    assert_eq!(body["isAuthenticated"], true);

    // Session scope does not survive
    let (_, body) = send(&app, Method::GET, "/api/preferences/intro", None).await;
    assert_eq!(body["collapsed"], false);
}
