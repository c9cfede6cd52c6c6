pub mod json;
pub mod text;

use serde::Serialize;

use crate::chart::{ChartSpec, RenderOutcome};
use crate::model::dataset::LengthReport;
use crate::model::stats::GroupStats;

#[derive(Debug, Clone, Serialize)]
pub struct FigureInfo {
    pub title: String,
    pub y_label: String,
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub width_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LengthInfo {
    pub expected: usize,
    pub uniform: bool,
    pub deviating: Vec<DeviatingGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviatingGroup {
    pub key: &'static str,
    pub len: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: &'static str,
    pub version: &'static str,
    pub output: String,
    pub output_bytes: u64,
    pub figure: FigureInfo,
    pub lengths: LengthInfo,
    pub groups: Vec<GroupStats>,
}

pub fn build_summary(
    outcome: &RenderOutcome,
    spec: &ChartSpec,
    lengths: &LengthReport,
) -> SummaryData {
    let (width_px, height_px) = outcome.size_px;
    SummaryData {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        output: outcome.path.display().to_string(),
        output_bytes: outcome.bytes,
        figure: FigureInfo {
            title: spec.title.clone(),
            y_label: spec.y_label.clone(),
            width_in: spec.width_in,
            height_in: spec.height_in,
            dpi: spec.dpi,
            width_px,
            height_px,
        },
        lengths: LengthInfo {
            expected: lengths.expected,
            uniform: lengths.is_uniform(),
            deviating: lengths
                .deviating
                .iter()
                .map(|&(key, len)| DeviatingGroup { key, len })
                .collect(),
        },
        groups: outcome.groups.clone(),
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
