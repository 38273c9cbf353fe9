//! Brand header with the top-level navigation links.

use leptos::prelude::*;

/// `(label, href)` pairs rendered in the header nav.
pub const NAV_LINKS: [(&str, &str); 3] = [("Overview", "/"), ("Sign in", "/sign-in"), ("Register", "/register")];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div>
                <p class="eyebrow">"PulseSpend"</p>
                <h1 class="site-header__title">"Independent health spend copilot"</h1>
            </div>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| view! { <a class="site-header__link" href=href>{label}</a> })
                    .collect_view()}
            </nav>
        </header>
    }
}
