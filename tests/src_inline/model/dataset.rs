use super::*;

fn group(dataset: &ScoreDataset, category: ScoreCategory) -> ScoreGroup {
    *dataset.groups.iter().find(|g| g.category == category).unwrap()
}

#[test]
fn test_builtin_group_order_and_labels() {
    let dataset = ScoreDataset::builtin();
    let keys = dataset
        .groups
        .iter()
        .map(|g| g.category.key())
        .collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec![
            "migration_safety",
            "data_integrity",
            "performance_impact",
            "project_rules",
            "security_scalability",
        ]
    );
    assert_eq!(
        dataset.labels(),
        vec![
            "Migration Safety",
            "Data Integrity",
            "Performance Impact",
            "Project Rules Consistency",
            "Security/Scalability",
        ]
    );
}

#[test]
fn test_builtin_group_lengths() {
    let dataset = ScoreDataset::builtin();
    let lengths = dataset.groups.iter().map(|g| g.len()).collect::<Vec<_>>();
    assert_eq!(lengths, vec![34, 34, 32, 34, 34]);
}

#[test]
fn test_builtin_scores_within_observed_range() {
    let dataset = ScoreDataset::builtin();
    for group in &dataset.groups {
        assert!(!group.scores.is_empty());
        for &v in group.scores {
            assert!((2..=10).contains(&v), "{} has {}", group.category.key(), v);
        }
    }
}

#[test]
fn test_migration_safety_literal() {
    let dataset = ScoreDataset::builtin();
    let group = group(&dataset, ScoreCategory::MigrationSafety);
    assert_eq!(
        group.scores,
        &[
            9, 9, 9, 4, 4, 10, 8, 9, 10, 5, 10, 8, 10, 6, 8, 8, 10, 10, 9, 10, 5, 10, 9, 10, 8, 8,
            2, 10, 8, 8, 10, 4, 2, 10
        ]
    );
}

#[test]
fn test_length_report_flags_performance_impact() {
    let report = ScoreDataset::builtin().length_report();
    assert_eq!(report.expected, 34);
    assert_eq!(report.deviating, vec![("performance_impact", 32)]);
    assert!(!report.is_uniform());
}

#[test]
fn test_length_report_uniform() {
    let dataset = ScoreDataset {
        groups: vec![
            ScoreGroup {
                category: ScoreCategory::MigrationSafety,
                scores: &[1, 2, 3],
            },
            ScoreGroup {
                category: ScoreCategory::DataIntegrity,
                scores: &[4, 5, 6],
            },
        ],
    };
    let report = dataset.length_report();
    assert_eq!(report.expected, 3);
    assert!(report.is_uniform());
    assert!(dataset.check_lengths(LengthPolicy::Strict).is_ok());
}

#[test]
fn test_length_report_tie_prefers_longer() {
    let dataset = ScoreDataset {
        groups: vec![
            ScoreGroup {
                category: ScoreCategory::MigrationSafety,
                scores: &[1, 2],
            },
            ScoreGroup {
                category: ScoreCategory::DataIntegrity,
                scores: &[4, 5, 6],
            },
        ],
    };
    let report = dataset.length_report();
    assert_eq!(report.expected, 3);
    assert_eq!(report.deviating, vec![("migration_safety", 2)]);
}

#[test]
fn test_check_lengths_independent_allows_mismatch() {
    let dataset = ScoreDataset::builtin();
    let report = dataset.check_lengths(LengthPolicy::Independent).unwrap();
    assert_eq!(report.deviating.len(), 1);
}

#[test]
fn test_check_lengths_strict_rejects_mismatch() {
    let dataset = ScoreDataset::builtin();
    match dataset.check_lengths(LengthPolicy::Strict) {
        Err(ChartError::LengthMismatch { expected, found }) => {
            assert_eq!(expected, 34);
            assert_eq!(found, vec![("performance_impact", 32)]);
        }
        other => panic!("expected length mismatch, got {other:?}"),
    }
}
