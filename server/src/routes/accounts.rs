//! Account routes: reference implementations of the register and sign-in
//! contract.
//!
//! These return exactly what the in-browser mock returns, after the
//! configured latency, and share its validation rules. A real backend
//! replaces them without changing the wire shape.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::mock;
use client::net::types::{RegisterPayload, RegisterResponse, SignInPayload, SignInResponse};

use crate::state::AppState;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("first and last name need at least 2 characters, email needs an @, password needs at least 8 characters")]
    InvalidRegistration,
    #[error("email needs an @, password needs at least 8 characters")]
    InvalidSignIn,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRegistration | Self::InvalidSignIn => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/register`: fabricate an account for a valid registration.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<RegisterResponse>, ApiError> {
    if !payload.is_valid() {
        tracing::warn!("rejected invalid registration");
        return Err(ApiError::InvalidRegistration);
    }

    tokio::time::sleep(state.config.register_latency).await;
    let response = mock::registration_result(payload, mock::new_account_id());
    tracing::info!(account_id = %response.account_id, "account registered");
    Ok(Json(response))
}

/// `POST /api/sign-in`: accept any well-formed credentials.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInPayload>,
) -> Result<Json<SignInResponse>, ApiError> {
    if !payload.is_valid() {
        tracing::warn!("rejected invalid sign-in");
        return Err(ApiError::InvalidSignIn);
    }

    tokio::time::sleep(state.config.sign_in_latency).await;
    let response = mock::sign_in_result(payload);
    tracing::info!(next_step = %response.next_step, "sign-in accepted");
    Ok(Json(response))
}
