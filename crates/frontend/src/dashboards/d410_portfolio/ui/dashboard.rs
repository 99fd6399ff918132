//! Portfolio dashboard: cross-portfolio summary table.

use leptos::prelude::*;

use contracts::metrics::{MetricsDomain, MetricsFilter, PortfolioCompanyRow, PortfolioMetrics, TimeRange};

use crate::data::query::{use_metrics_query, QueryKey, QueryState};
use crate::data::DEFAULT_CURRENCY;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::grid::cmp_f64;
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::format::format_int;

fn portfolio_columns() -> Vec<Column<PortfolioCompanyRow>> {
    vec![
        Column::view("company", "Company", |row: &PortfolioCompanyRow| {
            let href = format!("/companies/{}/overview", row.company_id);
            view! {
                <a class="data-table__link" href=href>{row.company_name.clone()}</a>
            }
            .into_any()
        })
        .sortable(|a, b| a.company_name.to_lowercase().cmp(&b.company_name.to_lowercase())),
        Column::text("arr", "ARR", |row: &PortfolioCompanyRow| {
            format!("$ {}", format_int(row.arr))
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.arr, b.arr)),
        Column::text("growth", "Growth", |row: &PortfolioCompanyRow| {
            format!("{:.1}%", row.growth_rate_percent)
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.growth_rate_percent, b.growth_rate_percent)),
        Column::text("nrr", "NRR", |row: &PortfolioCompanyRow| {
            format!("{:.1}%", row.nrr_percent)
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.nrr_percent, b.nrr_percent)),
        Column::text("churn", "Churn", |row: &PortfolioCompanyRow| {
            format!("{:.1}%", row.churn_rate_percent)
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.churn_rate_percent, b.churn_rate_percent)),
        // Rankings read best-first, so the first click sorts descending.
        Column::view("health", "Health", |row: &PortfolioCompanyRow| {
            view! { <span class="health-badge">{row.health_score}</span> }.into_any()
        })
        .align_right()
        .sortable_desc_first(|a, b| a.health_score.cmp(&b.health_score)),
    ]
}

#[component]
pub fn PortfolioDashboard() -> impl IntoView {
    let filter = RwSignal::new(MetricsFilter::new(TimeRange::Last12Months, DEFAULT_CURRENCY));

    let state = use_metrics_query(
        move || QueryKey::portfolio(filter.get()),
        |provider, key| async move { provider.portfolio(&key.filter).await },
    );

    view! {
        <div class="page page--dashboard">
            {move || match state.get() {
                QueryState::Loading => view! { <LoadingView domain=MetricsDomain::Portfolio /> }.into_any(),
                QueryState::Error(_) => view! { <ErrorView domain=MetricsDomain::Portfolio /> }.into_any(),
                QueryState::Ready(data) => view! { <PortfolioContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PortfolioContent(data: PortfolioMetrics) -> impl IntoView {
    let summary = format!(
        "{} companies · Total ARR $ {} · Average NRR {:.1}%",
        data.company_count,
        format_int(data.total_arr),
        data.avg_nrr_percent
    );
    let rows = data.companies;

    view! {
        <div class="page__header">
            <h1 class="page__title">"Portfolio"</h1>
            <p class="page__subtitle">{summary}</p>
        </div>
        <DataTable rows=Signal::derive(move || rows.clone()) columns=portfolio_columns() />
    }
}
