//! The metrics provider capability: one async operation per metric domain.
//!
//! Implementations may suspend and may fail; they must never block the
//! render path and have no side effects. Views treat every failure the same
//! way (a generic "failed to load" state), so the error variants exist for
//! logging only.

use async_trait::async_trait;
use thiserror::Error;

use contracts::metrics::{
    CompanyAcquisitionMetrics, CompanyBillingMetrics, CompanyCohortMetrics,
    CompanyOverviewMetrics, CompanyRevenueMetrics, MetricsDomain, MetricsFilter, PortfolioMetrics,
};

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error("no {} payload available", .0.noun())]
    Missing(MetricsDomain),
}

/// Async source of metric payloads for a `(company, filter)` pair.
///
/// `?Send` because browser futures are local to the main thread.
#[async_trait(?Send)]
pub trait MetricsProvider {
    async fn overview(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyOverviewMetrics, ProviderError>;

    async fn revenue(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyRevenueMetrics, ProviderError>;

    async fn cohorts(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyCohortMetrics, ProviderError>;

    async fn acquisition(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyAcquisitionMetrics, ProviderError>;

    async fn billing(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyBillingMetrics, ProviderError>;

    /// Portfolio-wide aggregate; not scoped to a company.
    async fn portfolio(&self, filter: &MetricsFilter) -> Result<PortfolioMetrics, ProviderError>;
}
