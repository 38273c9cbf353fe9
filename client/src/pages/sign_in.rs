//! Sign-in page: email + password form backed by the mocked `authenticate`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::form_field::FormField;
use crate::components::icon::{Glyph, Icon};
use crate::state::sign_in::{SIGN_IN_FAILED_MESSAGE, SignInState, signed_in_summary};
use crate::util::submit::begin_if_ready;

#[component]
pub fn SignInPage() -> impl IntoView {
    let state = RwSignal::new(SignInState::default());
    let can_submit = Memo::new(move |_| state.with(SignInState::can_submit));

    let email = Signal::derive(move || state.with(|s| s.form.email.clone()));
    let on_email = Callback::new(move |v: String| state.update(|s| s.form.email = v));
    let password = move || state.with(|s| s.form.password.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = begin_if_ready(state, can_submit.get_untracked(), SignInState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::mock::authenticate(payload).await;
            if let Err(e) = &outcome {
                log::warn!("sign-in failed: {e}");
            }
            state.update(|s| s.submission.settle(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    view! {
        <Title text="Sign in · PulseSpend"/>
        <div class="page page--centered">
            <div class="card">
                <a class="link link--muted" href="/">"← Back to overview"</a>
                <div class="card__intro">
                    <div class="card__badge">
                        <Icon glyph=Glyph::ShieldCheck/>
                    </div>
                    <h1>"Welcome back to PulseSpend"</h1>
                    <p class="muted">
                        "Pick up where you left off — our platform ingests data via Knot, but insights stay uniquely ours."
                    </p>
                </div>

                <form class="form" on:submit=on_submit>
                    <FormField
                        label="Work email"
                        input_type="email"
                        placeholder="you@benefits.co"
                        value=email
                        on_input=on_email
                    />
                    <label class="form-field">
                        <span class="form-field__label form-field__label--split">
                            "Password"
                            <button class="link link--small" type="button">"Forgot?"</button>
                        </span>
                        <input
                            class="form-field__input"
                            type="password"
                            placeholder="••••••••"
                            minlength="8"
                            required=true
                            prop:value=password
                            on:input=move |ev| state.update(|s| s.form.password = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--lg btn--block" type="submit" disabled=move || !can_submit.get()>
                        {move || state.with(SignInState::submit_label)}
                    </button>
                </form>

                <div class="callout">
                    <p class="callout__title">"What happens next?"</p>
                    <p class="muted">
                        "We’ll refresh the latest records from Knot’s TransactionLink API and calculate pending \
                         reimbursements, trends, and procedure recommendations tied to your book of members."
                    </p>
                </div>

                <Show when=move || state.with(|s| s.submission.error().is_some())>
                    <p class="error-text">{SIGN_IN_FAILED_MESSAGE}</p>
                </Show>
                {move || {
                    state
                        .with(|s| s.submission.result().map(signed_in_summary))
                        .map(|summary| view! { <div class="result">{summary}</div> })
                }}

                <p class="card__footer muted">
                    "Need an account? "
                    <a class="link" href="/register">"Create one in minutes"</a>
                </p>
            </div>
        </div>
    }
}
