use serde::{Deserialize, Serialize};

/// One cell of the sparse retention matrix, keyed by
/// `(cohort_label, month_offset)`. At most one cell per key.
///
/// A missing key means "no data" and must never be rendered as 0%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortCell {
    /// Signup month, `YYYY-MM`.
    pub cohort_label: String,
    /// Months since signup, 0-based.
    pub month_offset: u32,
    /// 0–100.
    pub retention_percent: f64,
}

/// Cohorts tab payload: snapshot retention KPIs plus the sparse cell set.
///
/// Retention is expected non-increasing per cohort as the offset grows, but
/// that is a domain expectation, not an enforced invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCohortMetrics {
    pub company_id: String,
    pub company_name: String,

    pub six_month_retention_percent: f64,
    pub twelve_month_retention_percent: f64,
    pub median_months_to_churn: f64,

    pub cohort_cells: Vec<CohortCell>,
    pub pre_churn_insights: Vec<String>,
}
