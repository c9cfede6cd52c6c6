pub mod font;
pub mod layout;
pub mod render;

use std::path::{Path, PathBuf};

use crate::error::ChartError;
use crate::model::dataset::ScoreDataset;
use crate::model::stats::{GroupStats, compute_group_stats};

pub const DEFAULT_OUTPUT: &str = "boxplot.png";

#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub y_label: String,
    /// Figure size in inches.
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub box_width: f64,
    pub cap_ratio: f64,
    pub y_margin: f64,
    pub max_y_ticks: usize,
    pub grid_alpha: f64,
    pub title_px: u32,
    pub label_px: u32,
    pub tick_px: u32,
}

impl ChartSpec {
    pub fn review_scores() -> Self {
        Self {
            title: "Evaluation Scores Across 34 Reviews".to_string(),
            y_label: "Score".to_string(),
            width_in: 10.0,
            height_in: 6.0,
            dpi: 100,
            box_width: 0.5,
            cap_ratio: 0.5,
            y_margin: 0.05,
            max_y_ticks: 10,
            grid_alpha: 0.7,
            title_px: 20,
            label_px: 16,
            tick_px: 13,
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * f64::from(self.dpi)).round() as u32,
            (self.height_in * f64::from(self.dpi)).round() as u32,
        )
    }
}

#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub path: PathBuf,
    pub bytes: u64,
    pub size_px: (u32, u32),
    pub groups: Vec<GroupStats>,
}

/// Computes per-group statistics and writes the box-plot PNG to `out_path`,
/// replacing any existing file. A label count that differs from the group
/// count is rejected before anything is drawn.
pub fn render_review_chart(
    dataset: &ScoreDataset,
    labels: &[&str],
    spec: &ChartSpec,
    out_path: &Path,
) -> Result<RenderOutcome, ChartError> {
    let groups = compute_group_stats(&dataset.groups)?;
    let layout = layout::build_layout(spec, &groups, labels)?;
    render::draw_boxplot(out_path, spec, &layout)?;

    let bytes = std::fs::metadata(out_path)?.len();
    tracing::info!(
        path = %out_path.display(),
        bytes,
        boxes = layout.boxes.len(),
        "box-plot written"
    );

    Ok(RenderOutcome {
        path: out_path.to_path_buf(),
        bytes,
        size_px: spec.pixel_size(),
        groups,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/mod.rs"]
mod tests;
