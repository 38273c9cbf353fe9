//! In-browser stand-ins for the account endpoints.
//!
//! Each operation waits a fixed latency and then fabricates a response.
//! Neither ever fails. The response builders are public so the server's
//! reference endpoints return exactly what the browser mock returns.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::time::Duration;

use super::types::{RegisterPayload, RegisterResponse, SignInPayload, SignInResponse};
use crate::util::timer;

/// Simulated round trip for `create_account`.
pub const REGISTER_LATENCY: Duration = Duration::from_millis(1100);

/// Simulated round trip for `authenticate`.
pub const SIGN_IN_LATENCY: Duration = Duration::from_millis(900);

pub const ONBOARDING_CHECKLIST: [&str; 3] =
    ["Connect Knot TransactionLink", "Review reimbursements", "Explore insights"];

pub const NEXT_STEP: &str = "dashboard";

pub const REIMBURSEMENTS_READY: u32 = 3;

/// Fresh random account id (hyphenated v4 UUID).
pub fn new_account_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn registration_result(payload: RegisterPayload, account_id: String) -> RegisterResponse {
    RegisterResponse {
        account_id,
        onboarding_checklist: ONBOARDING_CHECKLIST.iter().map(|s| (*s).to_owned()).collect(),
        payload,
    }
}

pub fn sign_in_result(payload: SignInPayload) -> SignInResponse {
    SignInResponse {
        next_step: NEXT_STEP.to_owned(),
        email: payload.email,
        reimbursements_ready: REIMBURSEMENTS_READY,
    }
}

/// Mocked `POST /register`.
pub async fn create_account(payload: RegisterPayload) -> RegisterResponse {
    timer::sleep(REGISTER_LATENCY).await;
    registration_result(payload, new_account_id())
}

/// Mocked `POST /sign-in`.
///
/// # Errors
///
/// Never in this build. The signature carries the failure a real backend
/// would report so the sign-in view keeps its error branch.
#[allow(clippy::unnecessary_wraps)]
pub async fn authenticate(payload: SignInPayload) -> Result<SignInResponse, String> {
    timer::sleep(SIGN_IN_LATENCY).await;
    Ok(sign_in_result(payload))
}
