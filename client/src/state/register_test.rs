use super::*;
use crate::net::mock;
use crate::state::submission::SubmitStatus;

fn filled() -> RegisterState {
    RegisterState {
        form: RegisterPayload {
            first_name: "Jo".to_owned(),
            last_name: "Vega".to_owned(),
            email: "jo@x.com".to_owned(),
            password: "12345678".to_owned(),
        },
        ..RegisterState::default()
    }
}

#[test]
fn empty_form_cannot_submit() {
    let state = RegisterState::default();
    assert!(!state.is_valid());
    assert!(!state.can_submit());
}

#[test]
fn invalid_submit_is_noop() {
    let mut state = RegisterState::default();
    state.form.email = "jo@x.com".to_owned();
    let before = state.clone();
    assert!(state.begin_submit().is_none());
    assert_eq!(state, before);
    assert_eq!(state.submission.status(), SubmitStatus::Idle);
}

#[test]
fn valid_submit_returns_payload_and_goes_pending() {
    let mut state = filled();
    let payload = state.begin_submit();
    assert_eq!(payload.as_ref(), Some(&state.form));
    assert!(state.submission.is_pending());
    assert_eq!(state.submit_label(), "Creating account...");
}

#[test]
fn second_submit_while_pending_is_dropped() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert!(!state.can_submit());
}

#[tokio::test]
async fn full_round_trip_echoes_input() {
    let mut state = filled();
    let Some(payload) = state.begin_submit() else {
        panic!("valid form should submit");
    };
    let response = mock::create_account(payload).await;
    state.submission.succeed(response);

    let result = state.submission.result().unwrap();
    assert_eq!(result.payload, filled().form);
    assert_eq!(
        result.onboarding_checklist,
        vec!["Connect Knot TransactionLink", "Review reimbursements", "Explore insights"]
    );
    assert_eq!(state.submit_label(), "Create account");
    assert!(state.can_submit());
}
