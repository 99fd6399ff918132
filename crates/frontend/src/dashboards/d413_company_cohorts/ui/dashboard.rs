//! Retention & cohorts: snapshot KPIs, the retention heatmap and pre-churn
//! behaviour notes.

use leptos::prelude::*;

use contracts::display::{Tone, ValueFormat};
use contracts::metrics::{CompanyCohortMetrics, MetricsDomain, MetricsFilter, TimeRange};

use crate::dashboards::use_company_id;
use crate::data::query::{use_metrics_query, QueryKey, QueryState};
use crate::data::DEFAULT_CURRENCY;
use crate::layout::company_header::{CompanyHeader, CompanyTab};
use crate::shared::components::cohort_heatmap::CohortHeatmap;
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::components::time_range_select::TimeRangeSelect;
use crate::shared::format::format_value;

#[component]
pub fn CompanyCohortsDashboard() -> impl IntoView {
    let company_id = use_company_id();
    let filter = RwSignal::new(MetricsFilter::new(TimeRange::Last12Months, DEFAULT_CURRENCY));

    let state = use_metrics_query(
        move || QueryKey::company(MetricsDomain::Cohorts, company_id.get(), filter.get()),
        |provider, key| async move {
            let company_id = key.company_id.clone().unwrap_or_default();
            provider.cohorts(&company_id, &key.filter).await
        },
    );

    let company_name = Signal::derive(move || match state.get() {
        QueryState::Ready(data) => Some(data.company_name.clone()),
        _ => None,
    });

    view! {
        <div class="page page--dashboard">
            <CompanyHeader
                company_id=company_id
                company_name=company_name
                active=CompanyTab::Cohorts
                title="Retention & cohorts"
                subtitle=Signal::derive(move || {
                    format!("Cohorts by signup month · {}", filter.get().time_range.label())
                })
            >
                <TimeRangeSelect
                    value=Signal::derive(move || filter.get().time_range)
                    on_change=Callback::new(move |range| filter.update(|f| f.time_range = range))
                />
            </CompanyHeader>

            {move || match state.get() {
                QueryState::Loading => view! { <LoadingView domain=MetricsDomain::Cohorts /> }.into_any(),
                QueryState::Error(_) => view! { <ErrorView domain=MetricsDomain::Cohorts /> }.into_any(),
                QueryState::Ready(data) => view! { <CohortsContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CohortsContent(data: CompanyCohortMetrics) -> impl IntoView {
    let percent = ValueFormat::Percent { decimals: 1 };

    let six_tone = if data.six_month_retention_percent >= 70.0 {
        Tone::Positive
    } else {
        Tone::Neutral
    };
    let twelve_tone = if data.twelve_month_retention_percent >= 60.0 {
        Tone::Positive
    } else {
        Tone::Neutral
    };
    let median_tone = if data.median_months_to_churn >= 9.0 {
        Tone::Positive
    } else {
        Tone::Neutral
    };

    let insights = data.pre_churn_insights.clone();

    view! {
        <section class="kpi-grid kpi-grid--three">
            <KpiCard
                label="6-month retention"
                value=format_value(data.six_month_retention_percent, &percent)
                helper="Share of MRR remaining at month 6".to_string()
                tone=six_tone
            />
            <KpiCard
                label="12-month retention"
                value=format_value(data.twelve_month_retention_percent, &percent)
                helper="Share of MRR remaining at month 12".to_string()
                tone=twelve_tone
            />
            <KpiCard
                label="Median time to churn"
                value=format!("{:.1} months", data.median_months_to_churn)
                helper="Median subscription lifetime".to_string()
                tone=median_tone
            />
        </section>

        <section class="page__split">
            <div class="page__split-main">
                <h2 class="page__section-title">"Cohort retention"</h2>
                <CohortHeatmap cells=data.cohort_cells.clone() />
            </div>
            <div class="page__split-side">
                <h2 class="page__section-title">"Pre-churn behavior"</h2>
                <ul class="insight-list">
                    {insights
                        .into_iter()
                        .map(|line| view! { <li class="insight-list__item">{line}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
