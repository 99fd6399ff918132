//! Acquisition & funnel: traffic KPIs, the conversion funnel and channel
//! performance.

use leptos::prelude::*;

use contracts::display::{Tone, ValueFormat};
use contracts::metrics::{
    ChannelRow, CompanyAcquisitionMetrics, MetricsDomain, MetricsFilter, TimeRange,
};

use crate::dashboards::use_company_id;
use crate::data::query::{use_metrics_query, QueryKey, QueryState};
use crate::data::DEFAULT_CURRENCY;
use crate::layout::company_header::{CompanyHeader, CompanyTab};
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::funnel_steps::FunnelSteps;
use crate::shared::components::grid::cmp_f64;
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::components::time_range_select::TimeRangeSelect;
use crate::shared::format::{format_int, format_value};

/// Visit→signup conversion policy: ≥5% is good, ≥3% acceptable.
fn conversion_tone(rate_percent: f64) -> Tone {
    if rate_percent >= 5.0 {
        Tone::Positive
    } else if rate_percent >= 3.0 {
        Tone::Neutral
    } else {
        Tone::Negative
    }
}

fn channel_columns(currency: &str) -> Vec<Column<ChannelRow>> {
    let mrr_currency = currency.to_string();

    vec![
        Column::text("channel", "Channel", |row: &ChannelRow| row.channel.clone())
            .sortable(|a, b| a.channel.to_lowercase().cmp(&b.channel.to_lowercase())),
        Column::text("sessions", "Sessions", |row: &ChannelRow| {
            format_int(row.sessions as f64)
        })
        .align_right()
        .sortable(|a, b| a.sessions.cmp(&b.sessions)),
        Column::text("signups", "Signups", |row: &ChannelRow| {
            format_int(row.signups as f64)
        })
        .align_right()
        .sortable(|a, b| a.signups.cmp(&b.signups)),
        Column::text("new_customers", "New customers", |row: &ChannelRow| {
            format_int(row.new_customers as f64)
        })
        .align_right()
        .sortable(|a, b| a.new_customers.cmp(&b.new_customers)),
        Column::text("new_mrr", "New MRR", move |row: &ChannelRow| {
            format!("{} {}", mrr_currency, format_int(row.new_mrr))
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.new_mrr, b.new_mrr)),
    ]
}

#[component]
pub fn CompanyAcquisitionDashboard() -> impl IntoView {
    let company_id = use_company_id();
    let filter = RwSignal::new(MetricsFilter::new(TimeRange::Last30Days, DEFAULT_CURRENCY));

    let state = use_metrics_query(
        move || QueryKey::company(MetricsDomain::Acquisition, company_id.get(), filter.get()),
        |provider, key| async move {
            let company_id = key.company_id.clone().unwrap_or_default();
            provider.acquisition(&company_id, &key.filter).await
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
                active=CompanyTab::Acquisition
                title="Acquisition & funnel"
                subtitle=Signal::derive(move || {
                    format!("Sessions, signups & conversions · {}", filter.get().time_range.label())
                })
            >
                <TimeRangeSelect
                    value=Signal::derive(move || filter.get().time_range)
                    on_change=Callback::new(move |range| filter.update(|f| f.time_range = range))
                />
            </CompanyHeader>

            {move || match state.get() {
                QueryState::Loading => view! { <LoadingView domain=MetricsDomain::Acquisition /> }.into_any(),
                QueryState::Error(_) => view! { <ErrorView domain=MetricsDomain::Acquisition /> }.into_any(),
                QueryState::Ready(data) => view! { <AcquisitionContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AcquisitionContent(data: CompanyAcquisitionMetrics) -> impl IntoView {
    let signup_tone = if data.signups > 0 { Tone::Positive } else { Tone::Neutral };
    let paying_tone = if data.new_paying_customers > 0 { Tone::Positive } else { Tone::Neutral };

    let steps = data.steps.clone();
    let channels = data.channels.clone();
    let columns = channel_columns(&data.currency);

    view! {
        <section class="kpi-grid kpi-grid--four">
            <KpiCard
                label="Sessions"
                value=format_value(data.sessions as f64, &ValueFormat::Integer)
                helper="Site sessions for this period".to_string()
            />
            <KpiCard
                label="Signups"
                value=format_value(data.signups as f64, &ValueFormat::Integer)
                helper="Users who completed signup".to_string()
                tone=signup_tone
            />
            <KpiCard
                label="New paying customers"
                value=format_value(data.new_paying_customers as f64, &ValueFormat::Integer)
                helper="Converted to paid in this period".to_string()
                tone=paying_tone
            />
            <KpiCard
                label="Visit → signup conversion"
                value=format_value(data.visit_to_signup_rate, &ValueFormat::Percent { decimals: 1 })
                helper="Signups / sessions".to_string()
                tone=conversion_tone(data.visit_to_signup_rate)
            />
        </section>

        <section class="page__split page__split--funnel-first">
            <div class="page__split-side">
                <FunnelSteps steps=steps />
            </div>
            <div class="page__split-main">
                <h2 class="page__section-title">"Channel performance"</h2>
                <DataTable rows=Signal::derive(move || channels.clone()) columns=columns />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_tone_thresholds() {
        assert_eq!(conversion_tone(5.0), Tone::Positive);
        assert_eq!(conversion_tone(4.2), Tone::Neutral);
        assert_eq!(conversion_tone(2.9), Tone::Negative);
    }
}
