use std::ops::Range;

use crate::chart::ChartSpec;
use crate::error::ChartError;
use crate::model::stats::GroupStats;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    pub label: String,
    pub position: f64,
    pub half_width: f64,
    pub cap_half_width: f64,
    pub group: GroupStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub boxes: Vec<BoxGeometry>,
    pub y_ticks: Vec<f64>,
}

/// Boxes sit at x = 1..=n; the y-range pads the plotted extent on both sides.
pub fn build_layout(
    spec: &ChartSpec,
    groups: &[GroupStats],
    labels: &[&str],
) -> Result<ChartLayout, ChartError> {
    if labels.len() != groups.len() {
        return Err(ChartError::LabelMismatch {
            labels: labels.len(),
            groups: groups.len(),
        });
    }

    let half_width = spec.box_width / 2.0;
    let boxes = groups
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (group, label))| BoxGeometry {
            label: (*label).to_string(),
            position: (i + 1) as f64,
            half_width,
            cap_half_width: half_width * spec.cap_ratio,
            group: group.clone(),
        })
        .collect::<Vec<_>>();

    let x_range = 0.5..(groups.len() as f64 + 0.5);
    let y_range = padded_range(groups, spec.y_margin);
    let y_ticks = tick_values(&y_range, spec.max_y_ticks);

    Ok(ChartLayout {
        x_range,
        y_range,
        boxes,
        y_ticks,
    })
}

fn padded_range(groups: &[GroupStats], margin: f64) -> Range<f64> {
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for g in groups {
        let (lo, hi) = g.stats.plotted_extent();
        low = low.min(lo);
        high = high.max(hi);
    }
    if !low.is_finite() || !high.is_finite() {
        return 0.0..1.0;
    }
    let span = high - low;
    let pad = if span > 0.0 { span * margin } else { 0.5 };
    (low - pad)..(high + pad)
}

/// Step from the 1-2-5 series keeping at most `max_ticks` ticks inside `range`.
pub fn nice_step(range: &Range<f64>, max_ticks: usize) -> f64 {
    let span = range.end - range.start;
    if span <= 0.0 || max_ticks == 0 {
        return 1.0;
    }
    let raw = span / max_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    for factor in [1.0, 2.0, 5.0, 10.0] {
        let step = factor * magnitude;
        if span / step <= max_ticks as f64 {
            return step;
        }
    }
    10.0 * magnitude
}

pub fn tick_values(range: &Range<f64>, max_ticks: usize) -> Vec<f64> {
    let step = nice_step(range, max_ticks);
    let first = (range.start / step).ceil() as i64;
    let last = (range.end / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/layout.rs"]
mod tests;
