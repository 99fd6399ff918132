//! Aggregation window selector.

use contracts::metrics::TimeRange;
use leptos::prelude::*;

#[component]
pub fn TimeRangeSelect(
    /// Currently selected range
    #[prop(into)]
    value: Signal<TimeRange>,
    /// Callback when the user picks another range
    on_change: Callback<TimeRange>,
) -> impl IntoView {
    view! {
        <select
            class="time-range-select"
            on:change=move |ev| {
                if let Some(range) = TimeRange::from_key(&event_target_value(&ev)) {
                    on_change.run(range);
                }
            }
            prop:value=move || value.get().key().to_string()
        >
            {TimeRange::ALL
                .iter()
                .map(|range| {
                    let range = *range;
                    view! {
                        <option value=range.key() selected=move || value.get() == range>
                            {range.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
