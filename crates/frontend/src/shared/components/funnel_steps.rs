//! Acquisition funnel: named counts as proportional horizontal bars.

use contracts::metrics::FunnelStep;
use leptos::prelude::*;

use crate::shared::format::format_int;

/// Scaling divisor; substitutes 1 for an all-zero funnel so widths stay
/// defined.
pub(crate) fn max_count(steps: &[FunnelStep]) -> u64 {
    steps.iter().map(|s| s.count).max().unwrap_or(0).max(1)
}

pub(crate) fn width_percent(count: u64, max: u64) -> f64 {
    count as f64 / max as f64 * 100.0
}

#[component]
pub fn FunnelSteps(steps: Vec<FunnelStep>) -> impl IntoView {
    if steps.is_empty() {
        return view! {
            <div class="funnel funnel--empty">"No funnel data available."</div>
        }
        .into_any();
    }

    let max = max_count(&steps);

    view! {
        <div class="funnel">
            <h3 class="funnel__title">"Acquisition funnel"</h3>
            {steps
                .into_iter()
                .map(|step| {
                    let width = format!("width: {:.1}%;", width_percent(step.count, max));
                    view! {
                        <div class="funnel__step">
                            <div class="funnel__step-caption">
                                <span>{step.label}</span>
                                <span class="funnel__step-count">{format_int(step.count as f64)}</span>
                            </div>
                            <div class="funnel__track">
                                <div class="funnel__bar" style=width></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(label: &str, count: u64) -> FunnelStep {
        FunnelStep {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn test_widths_proportional_to_max() {
        let steps = vec![step("Visits", 1000), step("Signups", 400), step("Paid", 100)];
        let max = max_count(&steps);
        assert_eq!(width_percent(steps[0].count, max), 100.0);
        assert_eq!(width_percent(steps[1].count, max), 40.0);
        assert_eq!(width_percent(steps[2].count, max), 10.0);
    }

    #[test]
    fn test_zero_max_guard() {
        let steps = vec![step("Visits", 0), step("Signups", 0)];
        assert_eq!(max_count(&steps), 1);
        assert_eq!(width_percent(0, max_count(&steps)), 0.0);
    }

    #[test]
    fn test_empty_sequence_max() {
        assert_eq!(max_count(&[]), 1);
    }
}
