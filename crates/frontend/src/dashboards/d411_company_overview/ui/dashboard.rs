//! Company overview: headline KPIs plus the MRR movements chart.

use leptos::prelude::*;

use contracts::display::{Tone, ValueFormat};
use contracts::metrics::{CompanyOverviewMetrics, MetricsDomain, MetricsFilter, TimeRange};

use crate::dashboards::use_company_id;
use crate::data::query::{use_metrics_query, QueryKey, QueryState};
use crate::data::DEFAULT_CURRENCY;
use crate::layout::company_header::{CompanyHeader, CompanyTab};
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::components::mrr_area_chart::MrrAreaChart;
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::components::time_range_select::TimeRangeSelect;
use crate::shared::format::{format_change_percent, format_value};

fn change_tone(percent: f64) -> Tone {
    if percent > 0.0 {
        Tone::Positive
    } else if percent < 0.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

#[component]
pub fn CompanyOverviewDashboard() -> impl IntoView {
    let company_id = use_company_id();
    let filter = RwSignal::new(MetricsFilter::new(TimeRange::Last90Days, DEFAULT_CURRENCY));

    let state = use_metrics_query(
        move || QueryKey::company(MetricsDomain::Overview, company_id.get(), filter.get()),
        |provider, key| async move {
            let company_id = key.company_id.clone().unwrap_or_default();
            provider.overview(&company_id, &key.filter).await
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
                active=CompanyTab::Overview
                title="Overview"
                subtitle=Signal::derive(move || {
                    format!("MRR, retention & customers · {}", filter.get().time_range.label())
                })
            >
                <TimeRangeSelect
                    value=Signal::derive(move || filter.get().time_range)
                    on_change=Callback::new(move |range| filter.update(|f| f.time_range = range))
                />
            </CompanyHeader>

            {move || match state.get() {
                QueryState::Loading => view! { <LoadingView domain=MetricsDomain::Overview /> }.into_any(),
                QueryState::Error(_) => view! { <ErrorView domain=MetricsDomain::Overview /> }.into_any(),
                QueryState::Ready(data) => view! { <OverviewContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewContent(data: CompanyOverviewMetrics) -> impl IntoView {
    let money = ValueFormat::Money {
        currency: data.currency.clone(),
    };

    let nrr_helper = if data.nrr_percent >= 120.0 {
        "Excellent retention"
    } else {
        "Room to improve"
    };
    let nrr_tone = if data.nrr_percent >= 120.0 {
        Tone::Positive
    } else {
        Tone::Neutral
    };

    let churn_helper = if data.churn_rate_percent <= 5.0 {
        "Within healthy range"
    } else {
        "Above healthy range"
    };
    let churn_tone = if data.churn_rate_percent <= 5.0 {
        Tone::Positive
    } else {
        Tone::Negative
    };

    view! {
        <section class="kpi-grid kpi-grid--five">
            <KpiCard
                label="MRR"
                value=format_value(data.mrr, &money)
                helper=format_change_percent(data.mrr_change_percent)
                tone=change_tone(data.mrr_change_percent)
            />
            <KpiCard
                label="ARR"
                value=format_value(data.arr, &money)
                helper=format_change_percent(data.arr_change_percent)
                tone=change_tone(data.arr_change_percent)
            />
            <KpiCard
                label="NRR"
                value=format_value(data.nrr_percent, &ValueFormat::Percent { decimals: 1 })
                helper=nrr_helper.to_string()
                tone=nrr_tone
            />
            <KpiCard
                label="Active customers"
                value=format_value(data.active_customers as f64, &ValueFormat::Integer)
            />
            <KpiCard
                label="Churn rate"
                value=format_value(data.churn_rate_percent, &ValueFormat::Percent { decimals: 1 })
                helper=churn_helper.to_string()
                tone=churn_tone
            />
        </section>

        <MrrAreaChart series=data.mrr_series.clone() />
    }
}
