//! Request and response DTOs for the account endpoints.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the JSON matches the
//! `POST /register` and `POST /sign-in` contract byte for byte. The payload
//! types double as the view-local form records: each form edits a payload in
//! place and submits a clone of it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::validate;

// =============================================================================
// REGISTRATION
// =============================================================================

/// Body of `POST /register`. Missing fields decode as empty strings, the
/// same state a fresh form starts in, and then fail validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterPayload {
    /// Both names longer than one character, an `@` in the email, and a
    /// password of at least eight characters.
    pub fn is_valid(&self) -> bool {
        validate::is_name(&self.first_name)
            && validate::is_name(&self.last_name)
            && validate::is_email(&self.email)
            && validate::is_password(&self.password)
    }
}

/// Response of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Generated at submission time; never looked up or verified.
    pub account_id: String,
    pub onboarding_checklist: Vec<String>,
    /// Echo of the submitted form.
    pub payload: RegisterPayload,
}

// =============================================================================
// SIGN-IN
// =============================================================================

/// Body of `POST /sign-in`. Missing fields decode as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

impl SignInPayload {
    pub fn is_valid(&self) -> bool {
        validate::is_email(&self.email) && validate::is_password(&self.password)
    }
}

/// Response of `POST /sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub next_step: String,
    pub email: String,
    pub reimbursements_ready: u32,
}
