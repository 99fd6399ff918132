//! Revenue & subscriptions: MRR breakdown KPIs, movement chart and the
//! per-plan performance table.

use leptos::prelude::*;

use contracts::display::{Tone, ValueFormat};
use contracts::metrics::{CompanyRevenueMetrics, MetricsDomain, MetricsFilter, PlanRow, TimeRange};

use crate::dashboards::use_company_id;
use crate::data::query::{use_metrics_query, QueryKey, QueryState};
use crate::data::DEFAULT_CURRENCY;
use crate::layout::company_header::{CompanyHeader, CompanyTab};
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::grid::cmp_f64;
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::components::mrr_area_chart::MrrAreaChart;
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::components::time_range_select::TimeRangeSelect;
use crate::shared::format::{format_int, format_value};

fn plan_columns(currency: &str) -> Vec<Column<PlanRow>> {
    let mrr_currency = currency.to_string();

    vec![
        Column::text("plan", "Plan", |row: &PlanRow| row.plan_name.clone())
            .sortable(|a, b| a.plan_name.to_lowercase().cmp(&b.plan_name.to_lowercase())),
        Column::text("mrr", "MRR", move |row: &PlanRow| {
            format!("{} {}", mrr_currency, format_int(row.mrr))
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.mrr, b.mrr)),
        Column::text("subscribers", "Subscribers", |row: &PlanRow| {
            format_int(row.subscribers as f64)
        })
        .align_right()
        .sortable(|a, b| a.subscribers.cmp(&b.subscribers)),
        Column::text("churn", "Churn", |row: &PlanRow| {
            format!("{:.1}%", row.churn_rate_percent)
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.churn_rate_percent, b.churn_rate_percent)),
        Column::text("growth", "Growth", |row: &PlanRow| {
            format!("{:.1}%", row.growth_rate_percent)
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.growth_rate_percent, b.growth_rate_percent)),
    ]
}

#[component]
pub fn CompanyRevenueDashboard() -> impl IntoView {
    let company_id = use_company_id();
    let filter = RwSignal::new(MetricsFilter::new(TimeRange::Last90Days, DEFAULT_CURRENCY));

    let state = use_metrics_query(
        move || QueryKey::company(MetricsDomain::Revenue, company_id.get(), filter.get()),
        |provider, key| async move {
            let company_id = key.company_id.clone().unwrap_or_default();
            provider.revenue(&company_id, &key.filter).await
        },
    );

    view! {
        <div class="page page--dashboard">
            <CompanyHeader
                company_id=company_id
                // The revenue payload carries no display name.
                company_name=Signal::derive(|| None::<String>)
                active=CompanyTab::Revenue
                title="Revenue & subscriptions"
                subtitle=Signal::derive(move || {
                    format!("Subscriptions & MRR · {}", filter.get().time_range.label())
                })
            >
                <TimeRangeSelect
                    value=Signal::derive(move || filter.get().time_range)
                    on_change=Callback::new(move |range| filter.update(|f| f.time_range = range))
                />
            </CompanyHeader>

            {move || match state.get() {
                QueryState::Loading => view! { <LoadingView domain=MetricsDomain::Revenue /> }.into_any(),
                QueryState::Error(_) => view! { <ErrorView domain=MetricsDomain::Revenue /> }.into_any(),
                QueryState::Ready(data) => view! { <RevenueContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RevenueContent(data: CompanyRevenueMetrics) -> impl IntoView {
    let money = ValueFormat::Money {
        currency: data.currency.clone(),
    };

    let new_tone = if data.new_mrr > 0.0 { Tone::Positive } else { Tone::Neutral };
    let expansion_tone = if data.expansion_mrr > 0.0 { Tone::Positive } else { Tone::Neutral };
    let churned_tone = if data.churned_mrr > 0.0 { Tone::Negative } else { Tone::Neutral };

    let plans = data.plan_breakdown.clone();
    let columns = plan_columns(&data.currency);

    view! {
        <section class="kpi-grid kpi-grid--four">
            <KpiCard
                label="Current MRR"
                value=format_value(data.current_mrr, &money)
                helper="End of current period".to_string()
            />
            <KpiCard
                label="New MRR"
                value=format_value(data.new_mrr, &money)
                helper="From brand new customers".to_string()
                tone=new_tone
            />
            <KpiCard
                label="Expansion MRR"
                value=format_value(data.expansion_mrr, &money)
                helper="Upgrades & add-ons".to_string()
                tone=expansion_tone
            />
            <KpiCard
                label="Churned MRR"
                value=format_value(data.churned_mrr, &money)
                helper="Lost from cancellations/downgrades".to_string()
                tone=churned_tone
            />
        </section>

        <section class="page__split">
            <div class="page__split-main">
                <MrrAreaChart series=data.mrr_series.clone() />
            </div>
            <div class="page__split-side">
                <h2 class="page__section-title">"Plan performance"</h2>
                <DataTable rows=Signal::derive(move || plans.clone()) columns=columns />
            </div>
        </section>
    }
}
