use super::*;

#[test]
fn default_is_idle_and_empty() {
    let submission = Submission::<u32>::default();
    assert_eq!(submission.status(), SubmitStatus::Idle);
    assert!(submission.result().is_none());
    assert!(submission.error().is_none());
}

#[test]
fn begin_rejects_invalid_form() {
    let mut submission = Submission::<u32>::default();
    assert!(!submission.begin(false));
    assert_eq!(submission, Submission::default());
}

#[test]
fn begin_marks_pending() {
    let mut submission = Submission::<u32>::default();
    assert!(submission.begin(true));
    assert!(submission.is_pending());
    assert!(!submission.can_submit(true));
}

#[test]
fn begin_while_pending_is_dropped() {
    let mut submission = Submission::<u32>::default();
    assert!(submission.begin(true));
    let snapshot = submission.clone();
    assert!(!submission.begin(true));
    assert_eq!(submission, snapshot);
}

#[test]
fn succeed_returns_to_idle_with_result() {
    let mut submission = Submission::default();
    submission.begin(true);
    submission.succeed(7);
    assert_eq!(submission.status(), SubmitStatus::Idle);
    assert_eq!(submission.result(), Some(&7));
}

#[test]
fn begin_clears_previous_result() {
    let mut submission = Submission::default();
    submission.begin(true);
    submission.succeed(7);
    assert!(submission.begin(true));
    assert!(submission.result().is_none());
}

#[test]
fn settle_err_records_message() {
    let mut submission = Submission::<u32>::default();
    submission.begin(true);
    submission.settle(Err("offline".to_owned()));
    assert!(!submission.is_pending());
    assert_eq!(submission.error(), Some("offline"));
    assert!(submission.result().is_none());
}

#[test]
fn settle_ok_clears_error() {
    let mut submission = Submission::default();
    submission.begin(true);
    submission.fail("offline");
    submission.begin(true);
    submission.settle(Ok(1));
    assert!(submission.error().is_none());
    assert_eq!(submission.result(), Some(&1));
}
