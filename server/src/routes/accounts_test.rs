use axum::body::to_bytes;

use super::*;
use crate::config::ServerConfig;

fn instant_state() -> AppState {
    AppState::new(ServerConfig {
        register_latency: std::time::Duration::ZERO,
        sign_in_latency: std::time::Duration::ZERO,
        ..ServerConfig::default()
    })
}

fn jo_vega() -> RegisterPayload {
    RegisterPayload {
        first_name: "Jo".to_owned(),
        last_name: "Vega".to_owned(),
        email: "jo@x.com".to_owned(),
        password: "12345678".to_owned(),
    }
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_echoes_payload_with_checklist() {
    let Ok(Json(response)) = register(State(instant_state()), Json(jo_vega())).await else {
        panic!("valid registration should succeed");
    };
    assert_eq!(response.payload, jo_vega());
    assert_eq!(
        response.onboarding_checklist,
        vec!["Connect Knot TransactionLink", "Review reimbursements", "Explore insights"]
    );
    assert_eq!(response.account_id.len(), 36);
}

#[tokio::test]
async fn register_generates_fresh_ids() {
    let Ok(Json(first)) = register(State(instant_state()), Json(jo_vega())).await else {
        panic!("first registration failed");
    };
    let Ok(Json(second)) = register(State(instant_state()), Json(jo_vega())).await else {
        panic!("second registration failed");
    };
    assert_ne!(first.account_id, second.account_id);
}

#[tokio::test]
async fn register_rejects_short_name() {
    let payload = RegisterPayload { first_name: "J".to_owned(), ..jo_vega() };
    let result = register(State(instant_state()), Json(payload)).await;
    assert_eq!(result.err(), Some(ApiError::InvalidRegistration));
}

// =============================================================================
// sign_in
// =============================================================================

#[tokio::test]
async fn sign_in_returns_canned_result() {
    let payload = SignInPayload { email: "a@b.com".to_owned(), password: "12345678".to_owned() };
    let Ok(Json(response)) = sign_in(State(instant_state()), Json(payload)).await else {
        panic!("valid sign-in should succeed");
    };
    assert_eq!(
        response,
        SignInResponse { next_step: "dashboard".to_owned(), email: "a@b.com".to_owned(), reimbursements_ready: 3 }
    );
}

#[tokio::test]
async fn sign_in_rejects_email_without_at() {
    let payload = SignInPayload { email: "nodomain".to_owned(), password: "12345678".to_owned() };
    let result = sign_in(State(instant_state()), Json(payload)).await;
    assert_eq!(result.err(), Some(ApiError::InvalidSignIn));
}

#[tokio::test]
async fn sign_in_waits_configured_latency() {
    let state = AppState::new(ServerConfig {
        sign_in_latency: std::time::Duration::from_millis(30),
        ..ServerConfig::default()
    });
    let payload = SignInPayload { email: "a@b.com".to_owned(), password: "12345678".to_owned() };
    let started = std::time::Instant::now();
    assert!(sign_in(State(state), Json(payload)).await.is_ok());
    assert!(started.elapsed() >= std::time::Duration::from_millis(30));
}

// =============================================================================
// ApiError
// =============================================================================

#[tokio::test]
async fn api_error_renders_422_json() {
    let response = ApiError::InvalidSignIn.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "email needs an @, password needs at least 8 characters");
}
