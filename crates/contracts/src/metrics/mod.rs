//! Metric payload contracts shared between the dashboard and its providers.
//!
//! Every payload is an immutable value type produced by a provider for a
//! `(company, filter)` pair. The presentation layer never mutates them.
//! Wire format is camelCase JSON; percentages are 0–100 floats, money is in
//! currency major units next to a currency code, dates are ISO date strings.

pub mod acquisition;
pub mod billing;
pub mod cohorts;
pub mod filter;
pub mod overview;
pub mod portfolio;
pub mod revenue;
pub mod validate;

pub use acquisition::{ChannelRow, CompanyAcquisitionMetrics, FunnelStep};
pub use billing::{CompanyBillingMetrics, PastDueRow, PaymentHealthPoint};
pub use cohorts::{CohortCell, CompanyCohortMetrics};
pub use filter::{MetricsFilter, TimeRange};
pub use overview::{CompanyOverviewMetrics, MrrSeriesPoint};
pub use portfolio::{PortfolioCompanyRow, PortfolioMetrics};
pub use revenue::{CompanyRevenueMetrics, PlanRow};
pub use validate::{ValidationError, MONEY_TOLERANCE};

use serde::{Deserialize, Serialize};

/// The metric domains a provider can be asked for. One fetch = one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsDomain {
    Overview,
    Revenue,
    Cohorts,
    Acquisition,
    Billing,
    Portfolio,
}

impl MetricsDomain {
    /// Display noun used in loading / "Failed to load ..." messages.
    pub fn noun(&self) -> &'static str {
        match self {
            MetricsDomain::Overview => "overview",
            MetricsDomain::Revenue => "revenue",
            MetricsDomain::Cohorts => "cohort data",
            MetricsDomain::Acquisition => "acquisition data",
            MetricsDomain::Billing => "billing health",
            MetricsDomain::Portfolio => "portfolio",
        }
    }
}
