#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::submission::Submission;
use crate::net::types::{RegisterPayload, RegisterResponse};

/// Registration page state: the form being edited and its submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterState {
    pub form: RegisterPayload,
    pub submission: Submission<RegisterResponse>,
}

impl RegisterState {
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    pub fn can_submit(&self) -> bool {
        self.submission.can_submit(self.is_valid())
    }

    /// Start a submission and hand back the payload to send, or `None` when
    /// the submit should be ignored.
    pub fn begin_submit(&mut self) -> Option<RegisterPayload> {
        let valid = self.is_valid();
        self.submission.begin(valid).then(|| self.form.clone())
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_pending() { "Creating account..." } else { "Create account" }
    }
}
