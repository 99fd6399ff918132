use serde::{Deserialize, Serialize};

/// One point of the MRR movement series.
///
/// `contraction` and `churn` are signed negative; the running accumulation of
/// all four components since series start reconciles with `total` (checked in
/// [`validate`](super::validate)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrrSeriesPoint {
    /// ISO date string, non-decreasing along the series.
    pub date: String,
    pub total: f64,
    pub new: f64,
    pub expansion: f64,
    pub contraction: f64,
    pub churn: f64,
}

impl MrrSeriesPoint {
    /// Net MRR movement contributed by this point.
    pub fn net_movement(&self) -> f64 {
        self.new + self.expansion + self.contraction + self.churn
    }
}

/// Per-company snapshot shown on the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOverviewMetrics {
    pub company_id: String,
    pub company_name: String,
    pub currency: String,

    pub mrr: f64,
    pub arr: f64,
    pub nrr_percent: f64,
    pub churn_rate_percent: f64,
    pub active_customers: u64,

    /// Period-over-period deltas, 0–100-scale percentages (signed).
    pub mrr_change_percent: f64,
    pub arr_change_percent: f64,

    pub mrr_series: Vec<MrrSeriesPoint>,
}
