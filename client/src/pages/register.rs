//! Registration page: four-field form backed by the mocked `create_account`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::form_field::FormField;
use crate::components::icon::{Glyph, Icon};
use crate::net::types::RegisterPayload;
use crate::state::register::RegisterState;
use crate::util::submit::begin_if_ready;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = RwSignal::new(RegisterState::default());
    let can_submit = Memo::new(move |_| state.with(RegisterState::can_submit));

    let (first_name, on_first_name) = bind_field(state, |f| &f.first_name, |f, v| f.first_name = v);
    let (last_name, on_last_name) = bind_field(state, |f| &f.last_name, |f, v| f.last_name = v);
    let (email, on_email) = bind_field(state, |f| &f.email, |f, v| f.email = v);
    let (password, on_password) = bind_field(state, |f| &f.password, |f, v| f.password = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = begin_if_ready(state, can_submit.get_untracked(), RegisterState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = crate::net::mock::create_account(payload).await;
            log::info!("registered account {}", response.account_id);
            state.update(|s| s.submission.succeed(response));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    view! {
        <Title text="Register · PulseSpend"/>
        <div class="page page--centered">
            <div class="card card--wide">
                <div class="card__intro">
                    <p class="eyebrow">"Create your account"</p>
                    <h1>"Register in under two minutes"</h1>
                    <p class="muted">
                        "We integrate with Knot’s TransactionLink API, but operate as a standalone intelligence layer."
                    </p>
                </div>

                <form class="form form--grid" on:submit=on_submit>
                    <FormField label="First name" input_type="text" placeholder="Jordan" value=first_name on_input=on_first_name/>
                    <FormField label="Last name" input_type="text" placeholder="Vega" value=last_name on_input=on_last_name/>
                    <FormField
                        label="Work email"
                        input_type="email"
                        placeholder="you@carrier.com"
                        value=email
                        on_input=on_email
                        wide=true
                    />
                    <FormField
                        label="Create password"
                        input_type="password"
                        placeholder="••••••••"
                        value=password
                        on_input=on_password
                        min_length=8
                    />
                    <button class="btn btn--primary btn--lg form__submit" type="submit" disabled=move || !can_submit.get()>
                        {move || state.with(RegisterState::submit_label)}
                    </button>
                </form>

                {move || {
                    state
                        .with(|s| s.submission.result().cloned())
                        .map(|result| {
                            view! {
                                <div class="result result--split">
                                    <div class="result__section">
                                        <p class="result__heading">
                                            <Icon glyph=Glyph::Building class="result__icon"/>
                                            "Account ready"
                                        </p>
                                        <p class="muted">"ID: " <span class="mono">{result.account_id}</span></p>
                                        <p class="muted">
                                            {format!("Owner: {} {}", result.payload.first_name, result.payload.last_name)}
                                        </p>
                                    </div>
                                    <div class="result__section">
                                        <p class="result__heading">
                                            <Icon glyph=Glyph::ListChecks class="result__icon"/>
                                            "Next steps"
                                        </p>
                                        <ul class="result__list">
                                            {result
                                                .onboarding_checklist
                                                .into_iter()
                                                .map(|item| view! { <li>{item}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                }}

                <p class="card__footer muted">
                    "Already have an account? "
                    <a class="link" href="/sign-in">"Sign in instead"</a>
                </p>
            </div>
        </div>
    }
}

/// Reactive value and input handler for one field of the registration form.
fn bind_field(
    state: RwSignal<RegisterState>,
    get: fn(&RegisterPayload) -> &String,
    set: fn(&mut RegisterPayload, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || state.with(|s| get(&s.form).clone()));
    let on_input = Callback::new(move |v: String| state.update(|s| set(&mut s.form, v)));
    (value, on_input)
}
