//! Mock metrics provider.
//!
//! Fixed in-memory data set behind an artificial delay, standing in for the
//! analytics/billing backends until they exist. Payloads are built fresh per
//! fetch; portfolio aggregates are derived from the row set so the
//! aggregation invariants hold by construction.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use once_cell::sync::Lazy;

use contracts::metrics::{
    ChannelRow, CohortCell, CompanyAcquisitionMetrics, CompanyBillingMetrics,
    CompanyCohortMetrics, CompanyOverviewMetrics, CompanyRevenueMetrics, FunnelStep,
    MetricsFilter, MrrSeriesPoint, PastDueRow, PaymentHealthPoint, PlanRow,
    PortfolioCompanyRow, PortfolioMetrics,
};

use super::provider::{MetricsProvider, ProviderError};

const DEFAULT_DELAY_MS: u32 = 300;

/// Portfolio company directory: (id, name, arr, growth %, nrr %, churn %, health).
static COMPANY_DIRECTORY: Lazy<Vec<PortfolioCompanyRow>> = Lazy::new(|| {
    vec![
        PortfolioCompanyRow {
            company_id: "comp_1".to_string(),
            company_name: "Acme SaaS".to_string(),
            arr: 2_000_000.0,
            growth_rate_percent: 85.0,
            nrr_percent: 125.0,
            churn_rate_percent: 3.5,
            health_score: 92,
        },
        PortfolioCompanyRow {
            company_id: "comp_2".to_string(),
            company_name: "GreenTech Cloud".to_string(),
            arr: 800_000.0,
            growth_rate_percent: 60.0,
            nrr_percent: 118.0,
            churn_rate_percent: 4.1,
            health_score: 86,
        },
        PortfolioCompanyRow {
            company_id: "comp_3".to_string(),
            company_name: "WorkflowX".to_string(),
            arr: 2_200_000.0,
            growth_rate_percent: 45.0,
            nrr_percent: 110.0,
            churn_rate_percent: 6.0,
            health_score: 78,
        },
    ]
});

fn company_name(company_id: &str) -> String {
    COMPANY_DIRECTORY
        .iter()
        .find(|c| c.company_id == company_id)
        .map(|c| c.company_name.clone())
        .unwrap_or_else(|| "Acme SaaS".to_string())
}

fn point(date: &str, total: f64, new: f64, expansion: f64, contraction: f64, churn: f64) -> MrrSeriesPoint {
    MrrSeriesPoint {
        date: date.to_string(),
        total,
        new,
        expansion,
        contraction,
        churn,
    }
}

/// Monthly MRR movements. Movements accumulate exactly to the running total
/// (7 000 baseline before the first point).
fn mrr_series() -> Vec<MrrSeriesPoint> {
    vec![
        point("2025-01-01", 10_000.0, 3_000.0, 1_000.0, -500.0, -500.0),
        point("2025-02-01", 12_000.0, 2_500.0, 1_500.0, -700.0, -1_300.0),
        point("2025-03-01", 15_000.0, 3_500.0, 2_000.0, -800.0, -1_700.0),
        point("2025-04-01", 17_000.0, 2_800.0, 1_800.0, -600.0, -2_000.0),
    ]
}

pub fn overview_metrics(company_id: &str, filter: &MetricsFilter) -> CompanyOverviewMetrics {
    CompanyOverviewMetrics {
        company_id: company_id.to_string(),
        company_name: company_name(company_id),
        currency: filter.currency.clone(),
        mrr: 17_000.0,
        arr: 17_000.0 * 12.0,
        nrr_percent: 118.0,
        churn_rate_percent: 4.2,
        active_customers: 340,
        mrr_change_percent: 13.3,
        arr_change_percent: 13.3,
        mrr_series: mrr_series(),
    }
}

pub fn revenue_metrics(company_id: &str, filter: &MetricsFilter) -> CompanyRevenueMetrics {
    CompanyRevenueMetrics {
        company_id: company_id.to_string(),
        currency: filter.currency.clone(),
        current_mrr: 17_000.0,
        new_mrr: 2_800.0,
        expansion_mrr: 1_800.0,
        churned_mrr: 2_000.0,
        mrr_series: mrr_series(),
        plan_breakdown: vec![
            PlanRow {
                plan_id: "price_starter".to_string(),
                plan_name: "Starter".to_string(),
                mrr: 4_000.0,
                subscribers: 120,
                churn_rate_percent: 6.5,
                growth_rate_percent: 12.3,
            },
            PlanRow {
                plan_id: "price_growth".to_string(),
                plan_name: "Growth".to_string(),
                mrr: 9_000.0,
                subscribers: 160,
                churn_rate_percent: 3.2,
                growth_rate_percent: 18.7,
            },
            PlanRow {
                plan_id: "price_enterprise".to_string(),
                plan_name: "Enterprise".to_string(),
                mrr: 4_000.0,
                subscribers: 60,
                churn_rate_percent: 1.4,
                growth_rate_percent: 22.1,
            },
        ],
    }
}

fn cohort_cell(label: &str, offset: u32, retention: f64) -> CohortCell {
    CohortCell {
        cohort_label: label.to_string(),
        month_offset: offset,
        retention_percent: retention,
    }
}

pub fn cohort_metrics(company_id: &str, _filter: &MetricsFilter) -> CompanyCohortMetrics {
    // Four signup cohorts with 0–5 months of retention; younger cohorts have
    // fewer observed offsets, so the matrix stays sparse on the right edge.
    let cohort_cells = vec![
        cohort_cell("2024-11", 0, 100.0),
        cohort_cell("2024-11", 1, 92.0),
        cohort_cell("2024-11", 2, 86.0),
        cohort_cell("2024-11", 3, 80.0),
        cohort_cell("2024-11", 4, 74.0),
        cohort_cell("2024-11", 5, 70.0),
        cohort_cell("2024-12", 0, 100.0),
        cohort_cell("2024-12", 1, 90.0),
        cohort_cell("2024-12", 2, 84.0),
        cohort_cell("2024-12", 3, 77.0),
        cohort_cell("2024-12", 4, 71.0),
        cohort_cell("2025-01", 0, 100.0),
        cohort_cell("2025-01", 1, 93.0),
        cohort_cell("2025-01", 2, 88.0),
        cohort_cell("2025-01", 3, 83.0),
        cohort_cell("2025-02", 0, 100.0),
        cohort_cell("2025-02", 1, 95.0),
        cohort_cell("2025-02", 2, 91.0),
    ];

    CompanyCohortMetrics {
        company_id: company_id.to_string(),
        company_name: company_name(company_id),
        six_month_retention_percent: 74.5,
        twelve_month_retention_percent: 63.2,
        median_months_to_churn: 10.2,
        cohort_cells,
        pre_churn_insights: vec![
            "Users who churned often visited /pricing and /account/cancel in the 7 days before cancel.".to_string(),
            "Churned customers had 40–60% fewer sessions in the last month compared to retained ones.".to_string(),
            "A large share of churn is concentrated in the Starter plan during months 2–3.".to_string(),
        ],
    }
}

pub fn acquisition_metrics(company_id: &str, filter: &MetricsFilter) -> CompanyAcquisitionMetrics {
    let sessions = 18_500;
    let signups = 780;
    let new_paying_customers = 190;

    CompanyAcquisitionMetrics {
        company_id: company_id.to_string(),
        company_name: company_name(company_id),
        currency: filter.currency.clone(),
        sessions,
        signups,
        new_paying_customers,
        visit_to_signup_rate: signups as f64 / sessions as f64 * 100.0,
        steps: vec![
            FunnelStep { label: "Visits".to_string(), count: sessions },
            FunnelStep { label: "Signups".to_string(), count: signups },
            FunnelStep { label: "Started checkout".to_string(), count: 420 },
            FunnelStep { label: "Paid".to_string(), count: new_paying_customers },
        ],
        channels: vec![
            ChannelRow {
                channel: "Organic Search".to_string(),
                sessions: 8_000,
                signups: 360,
                new_customers: 90,
                new_mrr: 7_000.0,
            },
            ChannelRow {
                channel: "Paid Search".to_string(),
                sessions: 4_500,
                signups: 210,
                new_customers: 55,
                new_mrr: 5_200.0,
            },
            ChannelRow {
                channel: "Referral".to_string(),
                sessions: 2_600,
                signups: 130,
                new_customers: 30,
                new_mrr: 3_100.0,
            },
            ChannelRow {
                channel: "Direct".to_string(),
                sessions: 3_400,
                signups: 80,
                new_customers: 15,
                new_mrr: 1_600.0,
            },
        ],
    }
}

pub fn billing_metrics(company_id: &str, filter: &MetricsFilter) -> CompanyBillingMetrics {
    CompanyBillingMetrics {
        company_id: company_id.to_string(),
        company_name: company_name(company_id),
        currency: filter.currency.clone(),
        success_rate: 96.7,
        failed_payments: 22,
        at_risk_mrr: 2_300.0,
        refund_rate: 2.1,
        series: vec![
            PaymentHealthPoint { date: "2025-01-01".to_string(), success: 190, failed: 6 },
            PaymentHealthPoint { date: "2025-01-08".to_string(), success: 210, failed: 7 },
            PaymentHealthPoint { date: "2025-01-15".to_string(), success: 205, failed: 4 },
            PaymentHealthPoint { date: "2025-01-22".to_string(), success: 220, failed: 5 },
        ],
        past_due_invoices: vec![
            PastDueRow {
                id: "inv_001".to_string(),
                customer: "alice@example.com".to_string(),
                amount: 300.0,
                days_late: 7,
            },
            PastDueRow {
                id: "inv_002".to_string(),
                customer: "billing@acme-inc.com".to_string(),
                amount: 900.0,
                days_late: 15,
            },
            PastDueRow {
                id: "inv_003".to_string(),
                customer: "ops@workflowx.io".to_string(),
                amount: 1_100.0,
                days_late: 30,
            },
        ],
    }
}

pub fn portfolio_metrics(_filter: &MetricsFilter) -> PortfolioMetrics {
    PortfolioMetrics::from_companies(COMPANY_DIRECTORY.clone())
}

/// Provider backed by the fixed data set above, with a simulated latency.
pub struct MockMetricsProvider {
    delay_ms: u32,
}

impl MockMetricsProvider {
    pub fn new() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    /// Zero-delay variant for tests and instant local demos.
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    async fn simulate_latency(&self) {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
    }
}

impl Default for MockMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl MetricsProvider for MockMetricsProvider {
    async fn overview(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyOverviewMetrics, ProviderError> {
        self.simulate_latency().await;
        Ok(overview_metrics(company_id, filter))
    }

    async fn revenue(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyRevenueMetrics, ProviderError> {
        self.simulate_latency().await;
        Ok(revenue_metrics(company_id, filter))
    }

    async fn cohorts(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyCohortMetrics, ProviderError> {
        self.simulate_latency().await;
        Ok(cohort_metrics(company_id, filter))
    }

    async fn acquisition(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyAcquisitionMetrics, ProviderError> {
        self.simulate_latency().await;
        Ok(acquisition_metrics(company_id, filter))
    }

    async fn billing(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyBillingMetrics, ProviderError> {
        self.simulate_latency().await;
        Ok(billing_metrics(company_id, filter))
    }

    async fn portfolio(&self, filter: &MetricsFilter) -> Result<PortfolioMetrics, ProviderError> {
        self.simulate_latency().await;
        Ok(portfolio_metrics(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::metrics::validate::{
        validate_acquisition, validate_cohorts, validate_overview, validate_portfolio,
        validate_revenue,
    };
    use contracts::metrics::TimeRange;

    fn filter() -> MetricsFilter {
        MetricsFilter::new(TimeRange::Last90Days, "USD")
    }

    #[test]
    fn test_portfolio_aggregates_are_derived() {
        let metrics = portfolio_metrics(&filter());
        assert_eq!(metrics.total_arr, 5_000_000.0);
        assert_eq!(metrics.company_count, 3);
        assert_eq!(validate_portfolio(&metrics), Ok(()));
    }

    #[test]
    fn test_company_payloads_satisfy_invariants() {
        let filter = filter();
        assert_eq!(validate_overview(&overview_metrics("comp_1", &filter)), Ok(()));
        assert_eq!(validate_revenue(&revenue_metrics("comp_1", &filter)), Ok(()));
        assert_eq!(validate_cohorts(&cohort_metrics("comp_1", &filter)), Ok(()));
        assert_eq!(
            validate_acquisition(&acquisition_metrics("comp_1", &filter)),
            Ok(())
        );
    }

    #[test]
    fn test_requested_company_id_flows_through() {
        let filter = filter();
        let metrics = overview_metrics("comp_2", &filter);
        assert_eq!(metrics.company_id, "comp_2");
        assert_eq!(metrics.company_name, "GreenTech Cloud");
        // Unknown ids still resolve (template payload), matching the data set
        // behaviour until a real backend can 404.
        assert_eq!(overview_metrics("comp_x", &filter).company_name, "Acme SaaS");
    }

    #[test]
    fn test_channel_sessions_reconcile_with_total() {
        let metrics = acquisition_metrics("comp_1", &filter());
        let channel_sum: u64 = metrics.channels.iter().map(|c| c.sessions).sum();
        assert_eq!(channel_sum, metrics.sessions);
    }
}
