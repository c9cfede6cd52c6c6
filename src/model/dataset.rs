use std::collections::BTreeMap;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreCategory {
    MigrationSafety,
    DataIntegrity,
    PerformanceImpact,
    ProjectRules,
    SecurityScalability,
}

impl ScoreCategory {
    pub fn key(self) -> &'static str {
        match self {
            ScoreCategory::MigrationSafety => "migration_safety",
            ScoreCategory::DataIntegrity => "data_integrity",
            ScoreCategory::PerformanceImpact => "performance_impact",
            ScoreCategory::ProjectRules => "project_rules",
            ScoreCategory::SecurityScalability => "security_scalability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::MigrationSafety => "Migration Safety",
            ScoreCategory::DataIntegrity => "Data Integrity",
            ScoreCategory::PerformanceImpact => "Performance Impact",
            ScoreCategory::ProjectRules => "Project Rules Consistency",
            ScoreCategory::SecurityScalability => "Security/Scalability",
        }
    }
}

const MIGRATION_SAFETY: &[u8] = &[
    9, 9, 9, 4, 4, 10, 8, 9, 10, 5, 10, 8, 10, 6, 8, 8, 10, 10, 9, 10, 5, 10, 9, 10, 8, 8, 2, 10,
    8, 8, 10, 4, 2, 10,
];
const DATA_INTEGRITY: &[u8] = &[
    10, 9, 9, 6, 8, 10, 9, 10, 10, 7, 10, 9, 10, 8, 9, 9, 10, 10, 10, 10, 6, 10, 9, 10, 9, 9, 4,
    10, 9, 9, 10, 7, 3, 10,
];
// Two reviews short of the other categories.
const PERFORMANCE_IMPACT: &[u8] = &[
    8, 7, 8, 5, 6, 9, 8, 8, 9, 6, 9, 7, 9, 7, 8, 7, 9, 9, 8, 9, 5, 9, 8, 9, 7, 8, 3, 9, 7, 8, 6, 4,
];
const PROJECT_RULES: &[u8] = &[
    9, 8, 9, 7, 7, 10, 9, 9, 10, 6, 10, 8, 10, 7, 9, 8, 10, 10, 9, 10, 6, 10, 9, 10, 8, 8, 5, 10,
    9, 8, 10, 6, 4, 10,
];
const SECURITY_SCALABILITY: &[u8] = &[
    8, 8, 9, 5, 6, 9, 8, 8, 9, 5, 9, 7, 9, 6, 8, 7, 9, 9, 8, 9, 5, 9, 8, 9, 7, 7, 3, 9, 7, 7, 9, 5,
    2, 9,
];

const BUILTIN_GROUPS: &[ScoreGroup] = &[
    ScoreGroup {
        category: ScoreCategory::MigrationSafety,
        scores: MIGRATION_SAFETY,
    },
    ScoreGroup {
        category: ScoreCategory::DataIntegrity,
        scores: DATA_INTEGRITY,
    },
    ScoreGroup {
        category: ScoreCategory::PerformanceImpact,
        scores: PERFORMANCE_IMPACT,
    },
    ScoreGroup {
        category: ScoreCategory::ProjectRules,
        scores: PROJECT_RULES,
    },
    ScoreGroup {
        category: ScoreCategory::SecurityScalability,
        scores: SECURITY_SCALABILITY,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreGroup {
    pub category: ScoreCategory,
    pub scores: &'static [u8],
}

impl ScoreGroup {
    pub fn len(&self) -> usize {
        self.scores.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Each group keeps its own length; a mismatch is only reported.
    Independent,
    /// All groups must share one length.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthReport {
    pub expected: usize,
    pub deviating: Vec<(&'static str, usize)>,
}

impl LengthReport {
    pub fn is_uniform(&self) -> bool {
        self.deviating.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ScoreDataset {
    pub groups: Vec<ScoreGroup>,
}

impl ScoreDataset {
    pub fn builtin() -> Self {
        Self {
            groups: BUILTIN_GROUPS.to_vec(),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.groups.iter().map(|g| g.category.label()).collect()
    }

    /// Most common group length, ties broken towards the longer length, plus
    /// every group that differs from it.
    pub fn length_report(&self) -> LengthReport {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for group in &self.groups {
            *counts.entry(group.len()).or_insert(0) += 1;
        }
        let expected = counts
            .iter()
            .max_by_key(|(len, count)| (**count, **len))
            .map(|(len, _)| *len)
            .unwrap_or(0);
        let deviating = self
            .groups
            .iter()
            .filter(|g| g.len() != expected)
            .map(|g| (g.category.key(), g.len()))
            .collect();
        LengthReport {
            expected,
            deviating,
        }
    }

    pub fn check_lengths(&self, policy: LengthPolicy) -> Result<LengthReport, ChartError> {
        let report = self.length_report();
        if report.is_uniform() {
            return Ok(report);
        }
        match policy {
            LengthPolicy::Independent => {
                for (key, len) in &report.deviating {
                    tracing::warn!(
                        group = key,
                        len,
                        expected = report.expected,
                        "group length differs from the others; plotting it independently"
                    );
                }
                Ok(report)
            }
            LengthPolicy::Strict => Err(ChartError::LengthMismatch {
                expected: report.expected,
                found: report.deviating,
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/dataset.rs"]
mod tests;
