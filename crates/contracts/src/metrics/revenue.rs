use serde::{Deserialize, Serialize};

use super::overview::MrrSeriesPoint;

/// Per-pricing-plan breakdown row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow {
    pub plan_id: String,
    pub plan_name: String,
    pub mrr: f64,
    pub subscribers: u64,
    pub churn_rate_percent: f64,
    pub growth_rate_percent: f64,
}

/// Revenue tab payload: headline MRR KPIs, the movement series and the plan
/// breakdown. Per-plan MRR reconciles with `current_mrr` within tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRevenueMetrics {
    pub company_id: String,
    pub currency: String,

    pub current_mrr: f64,
    pub new_mrr: f64,
    pub expansion_mrr: f64,
    /// Positive magnitude of MRR lost to cancellations/downgrades.
    pub churned_mrr: f64,

    pub mrr_series: Vec<MrrSeriesPoint>,
    pub plan_breakdown: Vec<PlanRow>,
}
