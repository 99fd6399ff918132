use serde::{Deserialize, Serialize};

/// Ordered funnel step. Counts are expected non-increasing along the
/// sequence (visits ≥ signups ≥ ... ≥ paid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStep {
    pub label: String,
    pub count: u64,
}

/// Per-acquisition-channel breakdown row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRow {
    pub channel: String,
    pub sessions: u64,
    pub signups: u64,
    pub new_customers: u64,
    pub new_mrr: f64,
}

/// Acquisition tab payload: traffic KPIs, funnel steps and channel rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAcquisitionMetrics {
    pub company_id: String,
    pub company_name: String,
    pub currency: String,

    pub sessions: u64,
    pub signups: u64,
    pub new_paying_customers: u64,
    /// Signups / sessions, 0–100.
    pub visit_to_signup_rate: f64,

    pub steps: Vec<FunnelStep>,
    pub channels: Vec<ChannelRow>,
}
