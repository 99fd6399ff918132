use serde::{Deserialize, Serialize};

/// Payment outcome counts for one date bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHealthPoint {
    /// ISO date string.
    pub date: String,
    pub success: u64,
    pub failed: u64,
}

/// One past-due invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastDueRow {
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub days_late: u32,
}

/// Billing tab payload: payment health KPIs, outcome series and the
/// past-due invoice set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBillingMetrics {
    pub company_id: String,
    pub company_name: String,
    pub currency: String,

    /// Share of successful payment attempts, 0–100.
    pub success_rate: f64,
    pub failed_payments: u64,
    /// MRR tied to past-due invoices.
    pub at_risk_mrr: f64,
    /// Refunded / total revenue, 0–100.
    pub refund_rate: f64,

    pub series: Vec<PaymentHealthPoint>,
    pub past_due_invoices: Vec<PastDueRow>,
}
