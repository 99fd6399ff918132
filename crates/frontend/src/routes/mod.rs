//! Route surface: `/portfolio` plus the per-company tabs.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::dashboards::{
    CompanyAcquisitionDashboard, CompanyBillingDashboard, CompanyCohortsDashboard,
    CompanyOverviewDashboard, CompanyRevenueDashboard, PortfolioDashboard,
};
use crate::data::DEFAULT_COMPANY_ID;
use crate::layout::Shell;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/portfolio" /> } />
                    <Route path=path!("/portfolio") view=PortfolioDashboard />
                    <Route path=path!("/companies/:company_id") view=CompanyRootRedirect />
                    <Route
                        path=path!("/companies/:company_id/overview")
                        view=CompanyOverviewDashboard
                    />
                    <Route
                        path=path!("/companies/:company_id/revenue")
                        view=CompanyRevenueDashboard
                    />
                    <Route
                        path=path!("/companies/:company_id/cohorts")
                        view=CompanyCohortsDashboard
                    />
                    <Route
                        path=path!("/companies/:company_id/acquisition")
                        view=CompanyAcquisitionDashboard
                    />
                    <Route
                        path=path!("/companies/:company_id/billing")
                        view=CompanyBillingDashboard
                    />
                </Routes>
            </Shell>
        </Router>
    }
}

/// `/companies/{id}` lands on the overview tab.
#[component]
fn CompanyRootRedirect() -> impl IntoView {
    let params = use_params_map();
    let company_id = params
        .with_untracked(|p| p.get("company_id").filter(|id| !id.is_empty()))
        .unwrap_or_else(|| DEFAULT_COMPANY_ID.to_string());

    view! { <Redirect path=format!("/companies/{}/overview", company_id) /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__subtitle">
                <a href="/portfolio">"Back to the portfolio"</a>
            </p>
        </div>
    }
}
