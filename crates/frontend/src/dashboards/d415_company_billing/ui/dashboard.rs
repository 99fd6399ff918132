//! Billing & payment health: outcome KPIs, the payment chart and past-due
//! invoices.

use leptos::prelude::*;

use contracts::display::{Tone, ValueFormat};
use contracts::metrics::{CompanyBillingMetrics, MetricsDomain, MetricsFilter, PastDueRow, TimeRange};

use crate::dashboards::use_company_id;
use crate::data::query::{use_metrics_query, QueryKey, QueryState};
use crate::data::DEFAULT_CURRENCY;
use crate::layout::company_header::{CompanyHeader, CompanyTab};
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::grid::cmp_f64;
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::components::payment_health_chart::PaymentHealthChart;
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::components::time_range_select::TimeRangeSelect;
use crate::shared::format::{format_int, format_value};

fn past_due_columns(currency: &str) -> Vec<Column<PastDueRow>> {
    let amount_currency = currency.to_string();

    vec![
        Column::view("invoice", "Invoice", |row: &PastDueRow| {
            view! { <span class="data-table__mono">{row.id.clone()}</span> }.into_any()
        })
        .sortable(|a, b| a.id.cmp(&b.id)),
        Column::text("customer", "Customer", |row: &PastDueRow| row.customer.clone())
            .sortable(|a, b| a.customer.to_lowercase().cmp(&b.customer.to_lowercase())),
        Column::text("amount", "Amount", move |row: &PastDueRow| {
            format!("{} {}", amount_currency, format_int(row.amount))
        })
        .align_right()
        .sortable(|a, b| cmp_f64(a.amount, b.amount)),
        // The most overdue invoices matter first.
        Column::text("days_late", "Days late", |row: &PastDueRow| {
            row.days_late.to_string()
        })
        .align_right()
        .sortable_desc_first(|a, b| a.days_late.cmp(&b.days_late)),
    ]
}

#[component]
pub fn CompanyBillingDashboard() -> impl IntoView {
    let company_id = use_company_id();
    let filter = RwSignal::new(MetricsFilter::new(TimeRange::Last30Days, DEFAULT_CURRENCY));

    let state = use_metrics_query(
        move || QueryKey::company(MetricsDomain::Billing, company_id.get(), filter.get()),
        |provider, key| async move {
            let company_id = key.company_id.clone().unwrap_or_default();
            provider.billing(&company_id, &key.filter).await
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
                active=CompanyTab::Billing
                title="Billing & payment health"
                subtitle=Signal::derive(move || {
                    format!("Charges, failures & dunning · {}", filter.get().time_range.label())
                })
            >
                <TimeRangeSelect
                    value=Signal::derive(move || filter.get().time_range)
                    on_change=Callback::new(move |range| filter.update(|f| f.time_range = range))
                />
            </CompanyHeader>

            {move || match state.get() {
                QueryState::Loading => view! { <LoadingView domain=MetricsDomain::Billing /> }.into_any(),
                QueryState::Error(_) => view! { <ErrorView domain=MetricsDomain::Billing /> }.into_any(),
                QueryState::Ready(data) => view! { <BillingContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BillingContent(data: CompanyBillingMetrics) -> impl IntoView {
    let money = ValueFormat::Money {
        currency: data.currency.clone(),
    };

    let success_tone = if data.success_rate >= 95.0 { Tone::Positive } else { Tone::Negative };
    let failed_tone = if data.failed_payments == 0 { Tone::Positive } else { Tone::Negative };
    let at_risk_tone = if data.at_risk_mrr == 0.0 { Tone::Positive } else { Tone::Negative };
    let refund_tone = if data.refund_rate <= 5.0 { Tone::Neutral } else { Tone::Negative };

    let series = data.series.clone();
    let invoices = data.past_due_invoices.clone();
    let columns = past_due_columns(&data.currency);

    view! {
        <section class="kpi-grid kpi-grid--four">
            <KpiCard
                label="Payment success rate"
                value=format_value(data.success_rate, &ValueFormat::Percent { decimals: 1 })
                helper="Share of successful payment attempts".to_string()
                tone=success_tone
            />
            <KpiCard
                label="Failed payments"
                value=format_int(data.failed_payments as f64)
                helper="In the selected period".to_string()
                tone=failed_tone
            />
            <KpiCard
                label="MRR at risk"
                value=format_value(data.at_risk_mrr, &money)
                helper="Past-due invoices linked to subscriptions".to_string()
                tone=at_risk_tone
            />
            <KpiCard
                label="Refund rate"
                value=format_value(data.refund_rate, &ValueFormat::Percent { decimals: 1 })
                helper="Refunded / total revenue".to_string()
                tone=refund_tone
            />
        </section>

        <section class="page__split">
            <div class="page__split-main">
                <PaymentHealthChart series=series />
            </div>
            <div class="page__split-side">
                <h2 class="page__section-title">"Past-due invoices"</h2>
                <DataTable rows=Signal::derive(move || invoices.clone()) columns=columns />
            </div>
        </section>
    }
}
