//! Payment outcomes over time: success/failed counts as grouped bars.

use contracts::metrics::PaymentHealthPoint;
use leptos::prelude::*;

use crate::shared::format::{format_int, format_month_day};

/// Scaling divisor across both outcome kinds; 1 for an empty/zero series.
pub(crate) fn max_outcome(series: &[PaymentHealthPoint]) -> u64 {
    series
        .iter()
        .map(|p| p.success.max(p.failed))
        .max()
        .unwrap_or(0)
        .max(1)
}

pub(crate) fn bar_height_percent(count: u64, max: u64) -> f64 {
    count as f64 / max as f64 * 100.0
}

#[component]
pub fn PaymentHealthChart(series: Vec<PaymentHealthPoint>) -> impl IntoView {
    if series.is_empty() {
        return view! {
            <div class="payment-chart payment-chart--empty">"No payment data available."</div>
        }
        .into_any();
    }

    let max = max_outcome(&series);

    view! {
        <div class="payment-chart">
            <h3 class="payment-chart__title">"Payment outcomes over time"</h3>
            <div class="payment-chart__groups">
                {series
                    .into_iter()
                    .map(|point| {
                        let success_style =
                            format!("height: {:.1}%;", bar_height_percent(point.success, max));
                        let failed_style =
                            format!("height: {:.1}%;", bar_height_percent(point.failed, max));
                        let caption = format!(
                            "{} ok / {} failed",
                            format_int(point.success as f64),
                            format_int(point.failed as f64)
                        );
                        view! {
                            <div class="payment-chart__group" title=caption>
                                <div class="payment-chart__track">
                                    <div class="payment-chart__bar payment-chart__bar--success" style=success_style></div>
                                    <div class="payment-chart__bar payment-chart__bar--failed" style=failed_style></div>
                                </div>
                                <div class="payment-chart__date">{format_month_day(&point.date)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="payment-chart__legend">
                <span class="payment-chart__legend-item">
                    <span class="payment-chart__swatch payment-chart__swatch--success"></span>
                    "Success"
                </span>
                <span class="payment-chart__legend-item">
                    <span class="payment-chart__swatch payment-chart__swatch--failed"></span>
                    "Failed"
                </span>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, success: u64, failed: u64) -> PaymentHealthPoint {
        PaymentHealthPoint {
            date: date.to_string(),
            success,
            failed,
        }
    }

    #[test]
    fn test_bars_scale_against_max_outcome() {
        let series = vec![point("2025-01-01", 200, 5), point("2025-01-08", 100, 10)];
        let max = max_outcome(&series);
        assert_eq!(max, 200);
        assert_eq!(bar_height_percent(200, max), 100.0);
        assert_eq!(bar_height_percent(100, max), 50.0);
        assert_eq!(bar_height_percent(5, max), 2.5);
    }

    #[test]
    fn test_zero_series_guard() {
        assert_eq!(max_outcome(&[]), 1);
        assert_eq!(max_outcome(&[point("2025-01-01", 0, 0)]), 1);
    }
}
