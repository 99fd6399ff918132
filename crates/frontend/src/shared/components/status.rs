//! Loading and error projections shared by every dashboard page.
//!
//! Failures are deliberately uniform: one generic message per domain, no
//! cause classification and no retry affordance.

use contracts::metrics::MetricsDomain;
use leptos::prelude::*;

#[component]
pub fn LoadingView(domain: MetricsDomain) -> impl IntoView {
    view! {
        <div class="page__status">{format!("Loading {}…", domain.noun())}</div>
    }
}

#[component]
pub fn ErrorView(domain: MetricsDomain) -> impl IntoView {
    view! {
        <div class="page__status page__status--error">
            {format!("Failed to load {}.", domain.noun())}
        </div>
    }
}
