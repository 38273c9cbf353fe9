use leptos::prelude::*;
use leptos_meta::Title;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found · PulseSpend"/>
        <div class="page page--centered">
            <div class="card">
                <p>"Page not found."</p>
                <a class="link" href="/">"← Back to overview"</a>
            </div>
        </div>
    }
}
