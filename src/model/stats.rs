use serde::Serialize;

use crate::error::ChartError;
use crate::model::dataset::ScoreGroup;

pub const WHISKER_IQR_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_scores(scores: &[u8]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = scores.iter().map(|&v| f64::from(v)).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = percentile_sorted(&sorted, 0.25);
        let median = percentile_sorted(&sorted, 0.50);
        let q3 = percentile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        // With a non-empty slice both searches always hit: q1 and q3 lie
        // inside [min, max], so some value sits within each fence.
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let fliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;

        Some(Self {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            q1,
            median,
            q3,
            iqr,
            whisker_low,
            whisker_high,
            fliers,
        })
    }

    /// Smallest and largest value the box draws, fliers included.
    pub fn plotted_extent(&self) -> (f64, f64) {
        let low = self.fliers.first().copied().unwrap_or(self.whisker_low);
        let high = self.fliers.last().copied().unwrap_or(self.whisker_high);
        (low.min(self.whisker_low), high.max(self.whisker_high))
    }
}

/// Linear interpolation between closest ranks, `rank = p * (n - 1)`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: &'static str,
    pub label: &'static str,
    pub stats: BoxStats,
}

pub fn compute_group_stats(groups: &[ScoreGroup]) -> Result<Vec<GroupStats>, ChartError> {
    let mut out = Vec::with_capacity(groups.len());
    for group in groups {
        let key = group.category.key();
        let stats = BoxStats::from_scores(group.scores).ok_or(ChartError::EmptyGroup(key))?;
        tracing::debug!(
            group = key,
            count = stats.count,
            q1 = stats.q1,
            median = stats.median,
            q3 = stats.q3,
            fliers = stats.fliers.len(),
            "box statistics"
        );
        out.push(GroupStats {
            key,
            label: group.category.label(),
            stats,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/stats.rs"]
mod tests;
