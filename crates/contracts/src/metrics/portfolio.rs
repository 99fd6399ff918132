use serde::{Deserialize, Serialize};

/// One portfolio company in the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCompanyRow {
    pub company_id: String,
    pub company_name: String,
    pub arr: f64,
    pub growth_rate_percent: f64,
    pub nrr_percent: f64,
    pub churn_rate_percent: f64,
    /// 0–100 composite score.
    pub health_score: u32,
}

/// Cross-portfolio aggregate. `company_count` equals the row-set size and
/// `total_arr` equals the sum of per-company ARR (checked in
/// [`validate`](super::validate)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_arr: f64,
    pub avg_nrr_percent: f64,
    pub company_count: u64,
    pub companies: Vec<PortfolioCompanyRow>,
}

impl PortfolioMetrics {
    /// Build the aggregate from its rows so the consistency invariants hold
    /// by construction.
    pub fn from_companies(companies: Vec<PortfolioCompanyRow>) -> Self {
        let total_arr = companies.iter().map(|c| c.arr).sum();
        let avg_nrr_percent = if companies.is_empty() {
            0.0
        } else {
            companies.iter().map(|c| c.nrr_percent).sum::<f64>() / companies.len() as f64
        };
        Self {
            total_arr,
            avg_nrr_percent,
            company_count: companies.len() as u64,
            companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, arr: f64, nrr: f64) -> PortfolioCompanyRow {
        PortfolioCompanyRow {
            company_id: id.to_string(),
            company_name: id.to_uppercase(),
            arr,
            growth_rate_percent: 10.0,
            nrr_percent: nrr,
            churn_rate_percent: 4.0,
            health_score: 80,
        }
    }

    #[test]
    fn test_aggregates_derived_from_rows() {
        let metrics = PortfolioMetrics::from_companies(vec![
            row("comp_1", 2_000_000.0, 125.0),
            row("comp_2", 800_000.0, 118.0),
            row("comp_3", 2_200_000.0, 110.0),
        ]);
        assert_eq!(metrics.total_arr, 5_000_000.0);
        assert_eq!(metrics.company_count, 3);
        assert!((metrics.avg_nrr_percent - 117.666).abs() < 0.001);
    }

    #[test]
    fn test_empty_portfolio() {
        let metrics = PortfolioMetrics::from_companies(Vec::new());
        assert_eq!(metrics.total_arr, 0.0);
        assert_eq!(metrics.avg_nrr_percent, 0.0);
        assert_eq!(metrics.company_count, 0);
    }
}
