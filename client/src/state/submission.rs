#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// Whether a submission is currently in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
}

/// Status, last result, and last error of a single form's submissions.
///
/// At most one submission is in flight. Repeated submits while pending are
/// dropped rather than queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission<R> {
    status: SubmitStatus,
    result: Option<R>,
    error: Option<String>,
}

impl<R> Default for Submission<R> {
    fn default() -> Self {
        Self { status: SubmitStatus::Idle, result: None, error: None }
    }
}

impl<R> Submission<R> {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit is enabled only for a valid form with nothing in flight.
    pub fn can_submit(&self, valid: bool) -> bool {
        valid && !self.is_pending()
    }

    /// Try to start a submission. Returns `false`, leaving state untouched,
    /// when the form is invalid or another submission is pending. Starting
    /// clears the previous result and error.
    pub fn begin(&mut self, valid: bool) -> bool {
        if !self.can_submit(valid) {
            return false;
        }
        self.status = SubmitStatus::Pending;
        self.result = None;
        self.error = None;
        true
    }

    pub fn succeed(&mut self, result: R) {
        self.status = SubmitStatus::Idle;
        self.result = Some(result);
        self.error = None;
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = SubmitStatus::Idle;
        self.result = None;
        self.error = Some(error.into());
    }

    /// Settle with the outcome of an async operation.
    pub fn settle(&mut self, outcome: Result<R, String>) {
        match outcome {
            Ok(result) => self.succeed(result),
            Err(error) => self.fail(error),
        }
    }
}
