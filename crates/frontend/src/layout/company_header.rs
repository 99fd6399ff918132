//! Per-company page header: breadcrumb, title, controls slot and tab strip.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyTab {
    Overview,
    Revenue,
    Cohorts,
    Acquisition,
    Billing,
}

impl CompanyTab {
    pub const ALL: [CompanyTab; 5] = [
        CompanyTab::Overview,
        CompanyTab::Revenue,
        CompanyTab::Cohorts,
        CompanyTab::Acquisition,
        CompanyTab::Billing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyTab::Overview => "Overview",
            CompanyTab::Revenue => "Revenue",
            CompanyTab::Cohorts => "Cohorts",
            CompanyTab::Acquisition => "Acquisition",
            CompanyTab::Billing => "Billing",
        }
    }

    /// URL segment under `/companies/{id}/`.
    pub fn segment(&self) -> &'static str {
        match self {
            CompanyTab::Overview => "overview",
            CompanyTab::Revenue => "revenue",
            CompanyTab::Cohorts => "cohorts",
            CompanyTab::Acquisition => "acquisition",
            CompanyTab::Billing => "billing",
        }
    }
}

#[component]
pub fn CompanyHeader(
    #[prop(into)] company_id: Signal<String>,
    /// Company display name once the page payload arrived.
    #[prop(into)]
    company_name: Signal<Option<String>>,
    active: CompanyTab,
    title: &'static str,
    #[prop(into)] subtitle: Signal<String>,
    /// Right-side controls (filter selectors etc.).
    children: Children,
) -> impl IntoView {
    view! {
        <header class="company-header">
            <div class="company-header__breadcrumb">
                <a href="/portfolio">"Portfolio"</a>
                <span class="company-header__breadcrumb-separator">"›"</span>
                <span class="company-header__breadcrumb-current">
                    {move || company_name.get().unwrap_or_else(|| "Company".to_string())}
                </span>
            </div>

            <div class="company-header__title-row">
                <div>
                    <h1 class="company-header__title">{title}</h1>
                    <p class="company-header__subtitle">{move || subtitle.get()}</p>
                </div>
                <div class="company-header__controls">{children()}</div>
            </div>

            <nav class="company-header__tabs">
                {CompanyTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        let class = if tab == active {
                            "tab-chip tab-chip--active"
                        } else {
                            "tab-chip"
                        };
                        view! {
                            <a
                                class=class
                                href=move || format!("/companies/{}/{}", company_id.get(), tab.segment())
                            >
                                {tab.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
