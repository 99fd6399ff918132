//! MRR movements chart: the four movement components stacked as SVG bands.
//!
//! Positive movements (new, expansion) stack upwards from the zero line,
//! negative ones (contraction, churn) stack downwards.

use contracts::metrics::MrrSeriesPoint;
use leptos::prelude::*;

use crate::shared::format::{format_int, format_month_day};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 220.0;
const AXIS_HEIGHT: f64 = 18.0;

pub(crate) struct Band {
    pub kind: &'static str,
    pub label: &'static str,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

pub(crate) fn stacked_bands(series: &[MrrSeriesPoint]) -> Vec<Band> {
    let zeros = vec![0.0; series.len()];
    let new: Vec<f64> = series.iter().map(|p| p.new).collect();
    let pos_top: Vec<f64> = series.iter().map(|p| p.new + p.expansion).collect();
    let contraction: Vec<f64> = series.iter().map(|p| p.contraction).collect();
    let neg_bottom: Vec<f64> = series.iter().map(|p| p.contraction + p.churn).collect();

    vec![
        Band {
            kind: "new",
            label: "New",
            lower: zeros.clone(),
            upper: new.clone(),
        },
        Band {
            kind: "expansion",
            label: "Expansion",
            lower: new,
            upper: pos_top,
        },
        Band {
            kind: "contraction",
            label: "Contraction",
            lower: contraction.clone(),
            upper: zeros,
        },
        Band {
            kind: "churn",
            label: "Churn",
            lower: neg_bottom,
            upper: contraction,
        },
    ]
}

/// Value domain across every band, always spanning zero.
pub(crate) fn value_bounds(bands: &[Band]) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = 0.0f64;
    for band in bands {
        for v in band.lower.iter().chain(band.upper.iter()) {
            min = min.min(*v);
            max = max.max(*v);
        }
    }
    if max - min < f64::EPSILON {
        max = min + 1.0;
    }
    (min, max)
}

/// Evenly spaced sample positions; a single point sits in the middle.
pub(crate) fn x_positions(n: usize, width: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![width / 2.0],
        _ => (0..n)
            .map(|i| i as f64 / (n - 1) as f64 * width)
            .collect(),
    }
}

pub(crate) fn y_position(value: f64, min: f64, max: f64, height: f64) -> f64 {
    (max - value) / (max - min) * height
}

/// Closed path along the upper edge and back along the lower edge.
pub(crate) fn band_path(xs: &[f64], lower: &[f64], upper: &[f64], min: f64, max: f64, height: f64) -> String {
    let mut d = String::new();
    for (i, (x, v)) in xs.iter().zip(upper.iter()).enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.1},{:.1} ", cmd, x, y_position(*v, min, max, height)));
    }
    for (x, v) in xs.iter().zip(lower.iter()).rev() {
        d.push_str(&format!("L{:.1},{:.1} ", x, y_position(*v, min, max, height)));
    }
    d.push('Z');
    d
}

#[component]
pub fn MrrAreaChart(series: Vec<MrrSeriesPoint>) -> impl IntoView {
    if series.is_empty() {
        return view! {
            <div class="mrr-chart mrr-chart--empty">"No MRR data available."</div>
        }
        .into_any();
    }

    let bands = stacked_bands(&series);
    let (min, max) = value_bounds(&bands);
    let xs = x_positions(series.len(), CHART_WIDTH);

    let paths = bands
        .iter()
        .map(|band| {
            let class = format!("mrr-chart__band mrr-chart__band--{}", band.kind);
            let d = band_path(&xs, &band.lower, &band.upper, min, max, CHART_HEIGHT);
            view! { <path class=class d=d></path> }
        })
        .collect_view();

    let zero_y = format!("{:.1}", y_position(0.0, min, max, CHART_HEIGHT));
    let axis_labels = xs
        .iter()
        .zip(series.iter())
        .map(|(x, point)| {
            view! {
                <text
                    class="mrr-chart__axis-label"
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", CHART_HEIGHT + AXIS_HEIGHT - 4.0)
                    text-anchor="middle"
                >
                    {format_month_day(&point.date)}
                </text>
            }
        })
        .collect_view();

    let legend = bands
        .iter()
        .map(|band| {
            let swatch = format!("mrr-chart__swatch mrr-chart__swatch--{}", band.kind);
            view! {
                <span class="mrr-chart__legend-item">
                    <span class=swatch></span>
                    {band.label}
                </span>
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT + AXIS_HEIGHT);

    view! {
        <div class="mrr-chart">
            <h3 class="mrr-chart__title">"MRR Movements"</h3>
            <svg class="mrr-chart__svg" viewBox=view_box preserveAspectRatio="none">
                {paths}
                <line
                    class="mrr-chart__zero-line"
                    x1="0"
                    y1=zero_y.clone()
                    x2=format!("{}", CHART_WIDTH)
                    y2=zero_y
                ></line>
                <text class="mrr-chart__axis-label" x="4" y="12">{format_int(max)}</text>
                <text
                    class="mrr-chart__axis-label"
                    x="4"
                    y=format!("{:.1}", CHART_HEIGHT - 4.0)
                >
                    {format_int(min)}
                </text>
                {axis_labels}
            </svg>
            <div class="mrr-chart__legend">{legend}</div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(new: f64, expansion: f64, contraction: f64, churn: f64) -> MrrSeriesPoint {
        MrrSeriesPoint {
            date: "2025-01-01".to_string(),
            total: 0.0,
            new,
            expansion,
            contraction,
            churn,
        }
    }

    #[test]
    fn test_bands_stack_from_zero_line() {
        let bands = stacked_bands(&[point(3000.0, 1000.0, -500.0, -500.0)]);
        assert_eq!(bands.len(), 4);
        // Positive side: 0..3000 then 3000..4000.
        assert_eq!((bands[0].lower[0], bands[0].upper[0]), (0.0, 3000.0));
        assert_eq!((bands[1].lower[0], bands[1].upper[0]), (3000.0, 4000.0));
        // Negative side: -500..0 then -1000..-500.
        assert_eq!((bands[2].lower[0], bands[2].upper[0]), (-500.0, 0.0));
        assert_eq!((bands[3].lower[0], bands[3].upper[0]), (-1000.0, -500.0));
    }

    #[test]
    fn test_value_bounds_span_zero() {
        let bands = stacked_bands(&[point(3000.0, 1000.0, -500.0, -500.0)]);
        assert_eq!(value_bounds(&bands), (-1000.0, 4000.0));
    }

    #[test]
    fn test_y_position_maps_extremes_to_edges() {
        assert_eq!(y_position(4000.0, -1000.0, 4000.0, 200.0), 0.0);
        assert_eq!(y_position(-1000.0, -1000.0, 4000.0, 200.0), 200.0);
        assert_eq!(y_position(0.0, -100.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn test_x_positions_spacing() {
        assert_eq!(x_positions(0, 600.0), Vec::<f64>::new());
        assert_eq!(x_positions(1, 600.0), vec![300.0]);
        assert_eq!(x_positions(3, 600.0), vec![0.0, 300.0, 600.0]);
    }

    #[test]
    fn test_band_path_is_closed() {
        let xs = vec![0.0, 100.0];
        let d = band_path(&xs, &[0.0, 0.0], &[10.0, 20.0], 0.0, 20.0, 100.0);
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        // Upper edge (2 points) + lower edge back (2 points).
        assert_eq!(d.matches('L').count(), 3);
    }
}
