//! KPI tile: one labelled metric value with an optional helper annotation.
//!
//! The helper colour follows the supplied `Tone`. The tile computes no
//! thresholds itself; what counts as "good" is decided by the page.

use contracts::display::Tone;
use leptos::prelude::*;

fn helper_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "kpi-card__helper kpi-card__helper--positive",
        Tone::Negative => "kpi-card__helper kpi-card__helper--negative",
        Tone::Neutral => "kpi-card__helper kpi-card__helper--neutral",
    }
}

#[component]
pub fn KpiCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Pre-formatted value text
    #[prop(into)]
    value: String,
    /// Optional helper annotation below the value
    #[prop(optional, into)]
    helper: Option<String>,
    /// Qualitative classification of the helper, supplied by the caller
    #[prop(optional, into)]
    tone: Option<Tone>,
) -> impl IntoView {
    let tone = tone.unwrap_or(Tone::Neutral);
    let class = helper_class(tone);

    view! {
        <div class="kpi-card">
            <div class="kpi-card__label">{label}</div>
            <div class="kpi-card__value">{value}</div>
            {helper.map(|text| view! { <div class=class>{text}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones_render_distinct_helper_classes() {
        assert_ne!(helper_class(Tone::Positive), helper_class(Tone::Negative));
        assert_ne!(helper_class(Tone::Positive), helper_class(Tone::Neutral));
    }
}
