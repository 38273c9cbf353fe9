#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use super::submission::Submission;
use crate::net::types::{SignInPayload, SignInResponse};

/// Shown when authentication fails.
pub const SIGN_IN_FAILED_MESSAGE: &str = "Something went wrong. Please try again in a few moments.";

/// Sign-in page state: the form being edited and its submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInState {
    pub form: SignInPayload,
    pub submission: Submission<SignInResponse>,
}

impl SignInState {
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    pub fn can_submit(&self) -> bool {
        self.submission.can_submit(self.is_valid())
    }

    /// Start a submission and hand back the payload to send, or `None` when
    /// the submit should be ignored.
    pub fn begin_submit(&mut self) -> Option<SignInPayload> {
        let valid = self.is_valid();
        self.submission.begin(valid).then(|| self.form.clone())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_pending() { "Authenticating..." } else { "Access dashboard" }
    }
}

/// Success line shown under the form.
pub fn signed_in_summary(response: &SignInResponse) -> String {
    format!(
        "Logged in as {}. {} reimbursements are ready for review.",
        response.email, response.reimbursements_ready
    )
}
