//! Defensive checks for the aggregation invariants the contracts document.
//!
//! Providers are expected to deliver payloads that already satisfy these;
//! the dashboard runs them in tests against the mock data set and callers
//! may run them against foreign providers before trusting a payload.

use chrono::NaiveDate;
use thiserror::Error;

use super::acquisition::CompanyAcquisitionMetrics;
use super::cohorts::CompanyCohortMetrics;
use super::overview::{CompanyOverviewMetrics, MrrSeriesPoint};
use super::portfolio::PortfolioMetrics;
use super::revenue::CompanyRevenueMetrics;

/// Money comparisons tolerate per-row rounding accumulated across a series,
/// in currency major units.
pub const MONEY_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("MRR series dates decrease at index {index} ({prev} -> {next})")]
    SeriesOutOfOrder {
        index: usize,
        prev: String,
        next: String,
    },
    #[error(
        "MRR series total {total} at index {index} diverges from accumulated movements {accumulated}"
    )]
    SeriesUnreconciled {
        index: usize,
        total: f64,
        accumulated: f64,
    },
    #[error("per-plan MRR {plan_sum} does not reconcile with current MRR {current_mrr}")]
    PlanMrrUnreconciled { plan_sum: f64, current_mrr: f64 },
    #[error("duplicate cohort cell for ({cohort_label}, {month_offset})")]
    DuplicateCohortCell {
        cohort_label: String,
        month_offset: u32,
    },
    #[error("retention {retention_percent} out of 0–100 range for ({cohort_label}, {month_offset})")]
    RetentionOutOfRange {
        cohort_label: String,
        month_offset: u32,
        retention_percent: f64,
    },
    #[error("funnel count increases at step '{label}' ({prev} -> {next})")]
    FunnelNotMonotonic { label: String, prev: u64, next: u64 },
    #[error("company count {declared} does not match {actual} rows")]
    CompanyCountMismatch { declared: u64, actual: usize },
    #[error("total ARR {declared} does not match per-company sum {actual}")]
    TotalArrMismatch { declared: f64, actual: f64 },
}

/// ISO dates compare as dates where they parse; otherwise lexicographically,
/// which is equivalent for well-formed `YYYY-MM-DD` strings.
fn dates_decrease(prev: &str, next: &str) -> bool {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(prev), parse(next)) {
        (Some(p), Some(n)) => n < p,
        _ => next < prev,
    }
}

/// Dates non-decreasing; running accumulation of movements reconciles with
/// `total` at every point, taking the first point's total as the baseline.
pub fn validate_mrr_series(series: &[MrrSeriesPoint]) -> Result<(), ValidationError> {
    let Some(first) = series.first() else {
        return Ok(());
    };

    let baseline = first.total - first.net_movement();
    let mut accumulated = baseline;
    let mut prev_date: Option<&str> = None;

    for (index, point) in series.iter().enumerate() {
        if let Some(prev) = prev_date {
            if dates_decrease(prev, &point.date) {
                return Err(ValidationError::SeriesOutOfOrder {
                    index,
                    prev: prev.to_string(),
                    next: point.date.clone(),
                });
            }
        }
        prev_date = Some(point.date.as_str());

        accumulated += point.net_movement();
        if (point.total - accumulated).abs() > MONEY_TOLERANCE {
            return Err(ValidationError::SeriesUnreconciled {
                index,
                total: point.total,
                accumulated,
            });
        }
    }
    Ok(())
}

pub fn validate_overview(metrics: &CompanyOverviewMetrics) -> Result<(), ValidationError> {
    validate_mrr_series(&metrics.mrr_series)
}

pub fn validate_revenue(metrics: &CompanyRevenueMetrics) -> Result<(), ValidationError> {
    validate_mrr_series(&metrics.mrr_series)?;

    let plan_sum: f64 = metrics.plan_breakdown.iter().map(|p| p.mrr).sum();
    if !metrics.plan_breakdown.is_empty()
        && (plan_sum - metrics.current_mrr).abs() > MONEY_TOLERANCE
    {
        return Err(ValidationError::PlanMrrUnreconciled {
            plan_sum,
            current_mrr: metrics.current_mrr,
        });
    }
    Ok(())
}

pub fn validate_cohorts(metrics: &CompanyCohortMetrics) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for cell in &metrics.cohort_cells {
        if !(0.0..=100.0).contains(&cell.retention_percent) {
            return Err(ValidationError::RetentionOutOfRange {
                cohort_label: cell.cohort_label.clone(),
                month_offset: cell.month_offset,
                retention_percent: cell.retention_percent,
            });
        }
        if !seen.insert((cell.cohort_label.clone(), cell.month_offset)) {
            return Err(ValidationError::DuplicateCohortCell {
                cohort_label: cell.cohort_label.clone(),
                month_offset: cell.month_offset,
            });
        }
    }
    Ok(())
}

pub fn validate_acquisition(metrics: &CompanyAcquisitionMetrics) -> Result<(), ValidationError> {
    for pair in metrics.steps.windows(2) {
        if pair[1].count > pair[0].count {
            return Err(ValidationError::FunnelNotMonotonic {
                label: pair[1].label.clone(),
                prev: pair[0].count,
                next: pair[1].count,
            });
        }
    }
    Ok(())
}

pub fn validate_portfolio(metrics: &PortfolioMetrics) -> Result<(), ValidationError> {
    if metrics.company_count != metrics.companies.len() as u64 {
        return Err(ValidationError::CompanyCountMismatch {
            declared: metrics.company_count,
            actual: metrics.companies.len(),
        });
    }
    let arr_sum: f64 = metrics.companies.iter().map(|c| c.arr).sum();
    if (arr_sum - metrics.total_arr).abs() > MONEY_TOLERANCE {
        return Err(ValidationError::TotalArrMismatch {
            declared: metrics.total_arr,
            actual: arr_sum,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::acquisition::FunnelStep;
    use crate::metrics::cohorts::CohortCell;
    use crate::metrics::portfolio::{PortfolioCompanyRow, PortfolioMetrics};
    use crate::metrics::revenue::PlanRow;

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

    // Movements accumulate from a 7 000 baseline: +3 000, then +3 000, +2 000.
    fn good_series() -> Vec<MrrSeriesPoint> {
        vec![
            point("2025-01-01", 10_000.0, 3_000.0, 1_000.0, -500.0, -500.0),
            point("2025-02-01", 13_000.0, 2_500.0, 1_500.0, -700.0, -300.0),
            point("2025-03-01", 15_000.0, 3_500.0, 2_000.0, -800.0, -2_700.0),
        ]
    }

    #[test]
    fn test_series_accumulation_holds() {
        assert_eq!(validate_mrr_series(&good_series()), Ok(()));
    }

    #[test]
    fn test_series_unreconciled_total_rejected() {
        let mut series = good_series();
        series[1].total += 100.0;
        assert!(matches!(
            validate_mrr_series(&series),
            Err(ValidationError::SeriesUnreconciled { index: 1, .. })
        ));
    }

    #[test]
    fn test_series_date_order_enforced() {
        let mut series = good_series();
        series[2].date = "2025-01-15".to_string();
        assert!(matches!(
            validate_mrr_series(&series),
            Err(ValidationError::SeriesOutOfOrder { index: 2, .. })
        ));
    }

    #[test]
    fn test_empty_series_is_valid() {
        assert_eq!(validate_mrr_series(&[]), Ok(()));
    }

    fn plan(name: &str, mrr: f64) -> PlanRow {
        PlanRow {
            plan_id: format!("price_{}", name.to_lowercase()),
            plan_name: name.to_string(),
            mrr,
            subscribers: 10,
            churn_rate_percent: 3.0,
            growth_rate_percent: 5.0,
        }
    }

    #[test]
    fn test_plan_breakdown_reconciles() {
        let metrics = CompanyRevenueMetrics {
            company_id: "comp_1".to_string(),
            currency: "USD".to_string(),
            current_mrr: 17_000.0,
            new_mrr: 2_800.0,
            expansion_mrr: 1_800.0,
            churned_mrr: 1_000.0,
            mrr_series: Vec::new(),
            plan_breakdown: vec![plan("Starter", 4_000.0), plan("Growth", 9_000.0), plan("Enterprise", 4_000.0)],
        };
        assert_eq!(validate_revenue(&metrics), Ok(()));

        let mut broken = metrics;
        broken.plan_breakdown[0].mrr = 5_000.0;
        assert!(matches!(
            validate_revenue(&broken),
            Err(ValidationError::PlanMrrUnreconciled { .. })
        ));
    }

    fn cohort_metrics(cells: Vec<CohortCell>) -> CompanyCohortMetrics {
        CompanyCohortMetrics {
            company_id: "comp_1".to_string(),
            company_name: "Acme SaaS".to_string(),
            six_month_retention_percent: 74.5,
            twelve_month_retention_percent: 63.2,
            median_months_to_churn: 10.2,
            cohort_cells: cells,
            pre_churn_insights: Vec::new(),
        }
    }

    fn cell(label: &str, offset: u32, retention: f64) -> CohortCell {
        CohortCell {
            cohort_label: label.to_string(),
            month_offset: offset,
            retention_percent: retention,
        }
    }

    #[test]
    fn test_duplicate_cohort_cell_rejected() {
        let metrics = cohort_metrics(vec![cell("2025-01", 0, 100.0), cell("2025-01", 0, 92.0)]);
        assert!(matches!(
            validate_cohorts(&metrics),
            Err(ValidationError::DuplicateCohortCell { .. })
        ));
    }

    #[test]
    fn test_retention_range_enforced() {
        let metrics = cohort_metrics(vec![cell("2025-01", 0, 104.0)]);
        assert!(matches!(
            validate_cohorts(&metrics),
            Err(ValidationError::RetentionOutOfRange { .. })
        ));
        let metrics = cohort_metrics(vec![cell("2025-01", 0, 100.0), cell("2025-01", 1, 92.0)]);
        assert_eq!(validate_cohorts(&metrics), Ok(()));
    }

    #[test]
    fn test_funnel_monotonicity() {
        let metrics = CompanyAcquisitionMetrics {
            company_id: "comp_1".to_string(),
            company_name: "Acme SaaS".to_string(),
            currency: "USD".to_string(),
            sessions: 1_000,
            signups: 400,
            new_paying_customers: 100,
            visit_to_signup_rate: 40.0,
            steps: vec![
                FunnelStep { label: "Visits".to_string(), count: 1_000 },
                FunnelStep { label: "Signups".to_string(), count: 400 },
                FunnelStep { label: "Paid".to_string(), count: 100 },
            ],
            channels: Vec::new(),
        };
        assert_eq!(validate_acquisition(&metrics), Ok(()));

        let mut broken = metrics;
        broken.steps[2].count = 500;
        assert!(matches!(
            validate_acquisition(&broken),
            Err(ValidationError::FunnelNotMonotonic { .. })
        ));
    }

    fn portfolio_row(id: &str, arr: f64) -> PortfolioCompanyRow {
        PortfolioCompanyRow {
            company_id: id.to_string(),
            company_name: id.to_uppercase(),
            arr,
            growth_rate_percent: 20.0,
            nrr_percent: 115.0,
            churn_rate_percent: 4.0,
            health_score: 85,
        }
    }

    #[test]
    fn test_portfolio_consistency() {
        let metrics = PortfolioMetrics::from_companies(vec![
            portfolio_row("comp_1", 2_000_000.0),
            portfolio_row("comp_2", 800_000.0),
            portfolio_row("comp_3", 2_200_000.0),
        ]);
        assert_eq!(validate_portfolio(&metrics), Ok(()));
        assert_eq!(metrics.total_arr, 5_000_000.0);
    }

    #[test]
    fn test_hardcoded_portfolio_aggregates_rejected() {
        let mut metrics = PortfolioMetrics::from_companies(vec![
            portfolio_row("comp_1", 2_000_000.0),
            portfolio_row("comp_2", 800_000.0),
        ]);
        metrics.company_count = 12;
        assert!(matches!(
            validate_portfolio(&metrics),
            Err(ValidationError::CompanyCountMismatch { declared: 12, actual: 2 })
        ));

        let mut metrics = PortfolioMetrics::from_companies(vec![portfolio_row("comp_1", 2_000_000.0)]);
        metrics.total_arr = 5_000_000.0;
        assert!(matches!(
            validate_portfolio(&metrics),
            Err(ValidationError::TotalArrMismatch { .. })
        ));
    }
}
