//! Cohort retention heatmap.
//!
//! Projects the sparse cell set into a dense grid: rows are distinct cohort
//! labels sorted ascending, columns are distinct month offsets sorted
//! ascending. Present cells get a background intensity monotonic in
//! retention; missing cells render an explicit "no data" marker, never 0%.

use std::collections::HashMap;

use contracts::metrics::CohortCell;
use leptos::prelude::*;

use crate::shared::format::format_cohort_label;

pub(crate) struct HeatmapGrid {
    pub cohorts: Vec<String>,
    pub offsets: Vec<u32>,
    cells: HashMap<(String, u32), f64>,
}

impl HeatmapGrid {
    pub fn build(cells: &[CohortCell]) -> Self {
        let mut cohorts: Vec<String> = cells.iter().map(|c| c.cohort_label.clone()).collect();
        cohorts.sort();
        cohorts.dedup();

        let mut offsets: Vec<u32> = cells.iter().map(|c| c.month_offset).collect();
        offsets.sort_unstable();
        offsets.dedup();

        let cells = cells
            .iter()
            .map(|c| ((c.cohort_label.clone(), c.month_offset), c.retention_percent))
            .collect();

        Self {
            cohorts,
            offsets,
            cells,
        }
    }

    /// `None` means "no data" for this pair, which is distinct from `Some(0.0)`.
    pub fn retention(&self, cohort: &str, offset: u32) -> Option<f64> {
        self.cells.get(&(cohort.to_string(), offset)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Retention 0–100 (clamped) maps to opacity 0.15–0.65.
pub(crate) fn cell_opacity(retention_percent: f64) -> f64 {
    let clamped = retention_percent.clamp(0.0, 100.0);
    0.15 + clamped / 100.0 * 0.5
}

#[component]
pub fn CohortHeatmap(cells: Vec<CohortCell>) -> impl IntoView {
    let grid = HeatmapGrid::build(&cells);

    if grid.is_empty() {
        return view! {
            <div class="cohort-heatmap cohort-heatmap--empty">
                "No cohort data available for this period."
            </div>
        }
        .into_any();
    }

    let offsets = grid.offsets.clone();

    let header = view! {
        <tr>
            <th class="cohort-heatmap__corner">"Cohort"</th>
            {offsets
                .iter()
                .map(|offset| view! { <th class="cohort-heatmap__offset">{format!("M{}", offset)}</th> })
                .collect_view()}
        </tr>
    };

    let body = grid
        .cohorts
        .iter()
        .map(|cohort| {
            let cells = grid
                .offsets
                .iter()
                .map(|offset| match grid.retention(cohort, *offset) {
                    Some(retention) => {
                        let style = format!(
                            "background-color: rgba(16, 185, 129, {:.3});",
                            cell_opacity(retention)
                        );
                        view! {
                            <td class="cohort-heatmap__cell">
                                <div class="cohort-heatmap__value" style=style>
                                    {format!("{:.0}%", retention)}
                                </div>
                            </td>
                        }
                        .into_any()
                    }
                    None => view! { <td class="cohort-heatmap__cell cohort-heatmap__cell--missing">"–"</td> }
                        .into_any(),
                })
                .collect_view();

            view! {
                <tr>
                    <td class="cohort-heatmap__label">{format_cohort_label(cohort)}</td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="cohort-heatmap">
            <div class="cohort-heatmap__legend">
                <span>"Cohorts by signup month · retention by month since signup"</span>
                <span class="cohort-heatmap__legend-scale">
                    <span class="cohort-heatmap__legend-swatch cohort-heatmap__legend-swatch--high"></span>
                    " High "
                    <span class="cohort-heatmap__legend-swatch cohort-heatmap__legend-swatch--low"></span>
                    " Low"
                </span>
            </div>
            <table class="cohort-heatmap__table">
                <thead>{header}</thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(label: &str, offset: u32, retention: f64) -> CohortCell {
        CohortCell {
            cohort_label: label.to_string(),
            month_offset: offset,
            retention_percent: retention,
        }
    }

    #[test]
    fn test_grid_shape_from_sparse_cells() {
        let grid = HeatmapGrid::build(&[cell("2025-01", 0, 100.0), cell("2025-01", 1, 92.0)]);
        assert_eq!(grid.cohorts, vec!["2025-01".to_string()]);
        assert_eq!(grid.offsets, vec![0, 1]);
        assert_eq!(grid.retention("2025-01", 0), Some(100.0));
        assert_eq!(grid.retention("2025-01", 1), Some(92.0));
    }

    #[test]
    fn test_missing_cell_is_no_data_not_zero() {
        let grid = HeatmapGrid::build(&[cell("2025-01", 0, 100.0), cell("2025-01", 2, 0.0)]);
        assert_eq!(grid.retention("2025-01", 1), None);
        assert_eq!(grid.retention("2025-01", 2), Some(0.0));
    }

    #[test]
    fn test_cohorts_and_offsets_sorted_ascending() {
        let grid = HeatmapGrid::build(&[
            cell("2025-02", 3, 80.0),
            cell("2024-11", 0, 100.0),
            cell("2025-02", 1, 95.0),
        ]);
        assert_eq!(grid.cohorts, vec!["2024-11".to_string(), "2025-02".to_string()]);
        assert_eq!(grid.offsets, vec![0, 1, 3]);
    }

    #[test]
    fn test_opacity_monotonic_and_clamped() {
        assert_eq!(cell_opacity(0.0), 0.15);
        assert_eq!(cell_opacity(100.0), 0.65);
        assert!(cell_opacity(50.0) > cell_opacity(25.0));
        assert_eq!(cell_opacity(-10.0), 0.15);
        assert_eq!(cell_opacity(140.0), 0.65);
    }

    #[test]
    fn test_empty_input() {
        assert!(HeatmapGrid::build(&[]).is_empty());
    }
}
