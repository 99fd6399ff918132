//! HTTP metrics provider.
//!
//! The shape a real backend integration plugs into: one GET per domain under
//! `/api/metrics`, filter encoded as a query string, JSON decoded into the
//! shared contracts. Substitutable for the mock via `QueryClient`.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use contracts::metrics::{
    CompanyAcquisitionMetrics, CompanyBillingMetrics, CompanyCohortMetrics,
    CompanyOverviewMetrics, CompanyRevenueMetrics, MetricsDomain, MetricsFilter, PortfolioMetrics,
};

use super::provider::{MetricsProvider, ProviderError};

/// Base URL for API requests, derived from the current window location
/// (backend listens on port 3000).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub struct HttpMetricsProvider {
    base: String,
}

impl HttpMetricsProvider {
    pub fn new() -> Self {
        Self { base: api_base() }
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str, filter: &MetricsFilter) -> Result<String, ProviderError> {
        let query = serde_qs::to_string(filter)
            .map_err(|e| ProviderError::Decode(format!("failed to encode filter: {}", e)))?;
        Ok(format!("{}{}?{}", self.base, path, query))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        domain: MetricsDomain,
    ) -> Result<T, ProviderError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ProviderError::Missing(domain));
        }
        if !response.ok() {
            return Err(ProviderError::Network(format!("HTTP {}", response.status())));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn fetch_company<T: DeserializeOwned>(
        &self,
        domain: MetricsDomain,
        segment: &str,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<T, ProviderError> {
        let url = self.url(
            &format!("/api/metrics/companies/{}/{}", company_id, segment),
            filter,
        )?;
        self.get_json(&url, domain).await
    }
}

impl Default for HttpMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl MetricsProvider for HttpMetricsProvider {
    async fn overview(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyOverviewMetrics, ProviderError> {
        self.fetch_company(MetricsDomain::Overview, "overview", company_id, filter)
            .await
    }

    async fn revenue(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyRevenueMetrics, ProviderError> {
        self.fetch_company(MetricsDomain::Revenue, "revenue", company_id, filter)
            .await
    }

    async fn cohorts(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyCohortMetrics, ProviderError> {
        self.fetch_company(MetricsDomain::Cohorts, "cohorts", company_id, filter)
            .await
    }

    async fn acquisition(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyAcquisitionMetrics, ProviderError> {
        self.fetch_company(MetricsDomain::Acquisition, "acquisition", company_id, filter)
            .await
    }

    async fn billing(
        &self,
        company_id: &str,
        filter: &MetricsFilter,
    ) -> Result<CompanyBillingMetrics, ProviderError> {
        self.fetch_company(MetricsDomain::Billing, "billing", company_id, filter)
            .await
    }

    async fn portfolio(&self, filter: &MetricsFilter) -> Result<PortfolioMetrics, ProviderError> {
        let url = self.url("/api/metrics/portfolio", filter)?;
        self.get_json(&url, MetricsDomain::Portfolio).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::metrics::TimeRange;

    #[test]
    fn test_filter_encodes_into_query_string() {
        let provider = HttpMetricsProvider::with_base("http://localhost:3000");
        let filter = MetricsFilter::new(TimeRange::Last90Days, "USD");
        let url = provider
            .url("/api/metrics/companies/comp_1/overview", &filter)
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:3000/api/metrics/companies/comp_1/overview?timeRange=last_90_days&currency=USD"
        );
    }
}
