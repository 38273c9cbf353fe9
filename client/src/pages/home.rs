//! Landing page: static product copy and links into the account flows.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icon::{Glyph, Icon};
use crate::components::site_header::SiteHeader;

/// A titled blurb with an icon.
#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

/// One step of the "From swipe to insight" walkthrough.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub const STATS: [(&str, &str); 3] = [
    ("Eligible spend analyzed", "$12.4M"),
    ("Avg. reimbursements surfaced", "$460 / member"),
    ("Procedure markets indexed", "260+"),
];

pub const FEATURE_HIGHLIGHTS: [Card; 3] = [
    Card {
        title: "Automatic HSA / FSA detection",
        description: "Connect to Knot’s TransactionLink API to flag reimbursable purchases instantly.",
        glyph: Glyph::ShieldCheck,
    },
    Card {
        title: "Behavioral insights",
        description: "Spot recurring spend, category spikes, and seasonal changes with built‑in trend logic.",
        glyph: Glyph::TrendingUp,
    },
    Card {
        title: "Procedure price lookup",
        description: "Surface local procedure pricing (à la MDsave) so members can plan care confidently.",
        glyph: Glyph::Target,
    },
];

pub const PILLARS: [&str; 5] = [
    "Real-time reimbursement calculations (Part 1).",
    "Trend detection for members and providers (Part 2).",
    "Market-aware procedure pricing (Part 3).",
    "Business insights dashboard (Part 4).",
    "GoodRx / CostPlus drug lookups (Part 5).",
];

pub const INSIGHT_CARDS: [Card; 3] = [
    Card {
        title: "Recurring spend radar",
        description: "Flag monthly auto-refills or recurring OTC orders and show if they remain eligible.",
        glyph: Glyph::Sparkles,
    },
    Card {
        title: "Regional medication activity",
        description: "Highlight cities with upticks in prescriptions so care managers can respond early.",
        glyph: Glyph::Pill,
    },
    Card {
        title: "Benefit utilization",
        description: "Aggregate contribution vs. reimbursement so carriers know what’s working.",
        glyph: Glyph::BarChart,
    },
];

pub const WORKFLOW: [Step; 4] = [
    Step {
        title: "Connect accounts",
        body: "Users link their cards via Knot. We hydrate purchase details within seconds.",
    },
    Step {
        title: "Classify transactions",
        body: "We match merchant + SKU data against our HSA/FSA rule engine to mark eligibility.",
    },
    Step {
        title: "Surface insights",
        body: "Members see reimbursements owed, while businesses see anonymized spend signals.",
    },
    Step {
        title: "Optimize costs",
        body: "Recommend cheaper procedures and prescriptions before members spend unnecessarily.",
    },
];

/// Workflow steps paired with their 1-based display number.
pub fn numbered_workflow() -> impl Iterator<Item = (usize, Step)> {
    WORKFLOW.into_iter().enumerate().map(|(idx, step)| (idx + 1, step))
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="PulseSpend"/>
        <div class="page page--home">
            <div class="page__inner">
                <SiteHeader/>
                <main class="home">
                    <Hero/>

                    <section class="home__grid">
                        {FEATURE_HIGHLIGHTS
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <article class="feature-card">
                                        <Icon glyph=card.glyph class="feature-card__icon"/>
                                        <h3>{card.title}</h3>
                                        <p class="muted">{card.description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </section>

                    <section class="pillars">
                        <p class="eyebrow">"Product pillars"</p>
                        <div class="pillars__grid">
                            {PILLARS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="pillars__item">
                                            <Icon glyph=Glyph::Target class="pillars__icon"/>
                                            <p>{item}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class="home__grid">
                        {INSIGHT_CARDS
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <article class="insight-card">
                                        <Icon glyph=card.glyph class="insight-card__icon"/>
                                        <h3>{card.title}</h3>
                                        <p class="muted">{card.description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </section>

                    <section class="workflow">
                        <div class="workflow__intro">
                            <p class="eyebrow">"Workflow"</p>
                            <h3>"From swipe to insight"</h3>
                            <p class="muted">
                                "Every step is API-first, so you can wire this flow directly into your \
                                 hackathon demo or future production stack."
                            </p>
                        </div>
                        <ol class="workflow__steps">
                            {numbered_workflow()
                                .map(|(number, step)| {
                                    view! {
                                        <li class="workflow__step">
                                            <div class="workflow__heading">
                                                <span class="workflow__number">{number}</span>
                                                <p>{step.title}</p>
                                            </div>
                                            <p class="muted">{step.body}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </section>
                </main>
            </div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__badge">
                <Icon glyph=Glyph::Sparkles class="hero__badge-icon"/>
                "Powered by Knot TransactionLink"
            </div>
            <h2 class="hero__headline">"Build proactive HSA/FSA experiences on top of our own platform."</h2>
            <p class="hero__lede">
                "We’re a standalone insights layer that taps Knot’s TransactionLink API to ingest raw \
                 card data, classify eligibility, and surface reimbursements, local procedure pricing, \
                 and Rx options before members even ask."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary btn--lg" href="/register">
                    "Start for free"
                    <Icon glyph=Glyph::CreditCard/>
                </a>
                <a class="btn btn--outline btn--lg" href="/sign-in">
                    "Sign in to my account"
                    <Icon glyph=Glyph::TrendingUp/>
                </a>
            </div>
            <dl class="hero__stats">
                {STATS
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat">
                                <dt class="muted">{label}</dt>
                                <dd class="stat__value">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
