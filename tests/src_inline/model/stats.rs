use super::*;
use crate::model::dataset::{ScoreCategory, ScoreDataset};

fn builtin_scores(category: ScoreCategory) -> &'static [u8] {
    ScoreDataset::builtin()
        .groups
        .iter()
        .find(|g| g.category == category)
        .unwrap()
        .scores
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_percentile_linear_interpolation() {
    let sorted = vec![7.0, 15.0, 36.0, 39.0, 40.0, 41.0];
    assert!(approx(percentile_sorted(&sorted, 0.25), 20.25));
    assert!(approx(percentile_sorted(&sorted, 0.50), 37.5));
    assert!(approx(percentile_sorted(&sorted, 0.75), 39.75));
    assert!(approx(percentile_sorted(&sorted, 0.0), 7.0));
    assert!(approx(percentile_sorted(&sorted, 1.0), 41.0));
    assert_eq!(percentile_sorted(&[], 0.5), 0.0);
}

#[test]
fn test_box_stats_without_fliers() {
    let stats = BoxStats::from_scores(&[7, 15, 36, 39, 40, 41]).unwrap();
    assert_eq!(stats.count, 6);
    assert!(approx(stats.median, 37.5));
    assert!(approx(stats.iqr, 19.5));
    assert_eq!(stats.whisker_low, 7.0);
    assert_eq!(stats.whisker_high, 41.0);
    assert!(stats.fliers.is_empty());
}

#[test]
fn test_box_stats_single_value() {
    let stats = BoxStats::from_scores(&[5]).unwrap();
    assert_eq!(stats.min, 5.0);
    assert_eq!(stats.max, 5.0);
    assert_eq!(stats.median, 5.0);
    assert_eq!(stats.whisker_low, 5.0);
    assert_eq!(stats.whisker_high, 5.0);
    assert!(stats.fliers.is_empty());
    assert_eq!(stats.plotted_extent(), (5.0, 5.0));
}

#[test]
fn test_box_stats_empty() {
    assert!(BoxStats::from_scores(&[]).is_none());
}

#[test]
fn test_migration_safety_stats() {
    let stats = BoxStats::from_scores(builtin_scores(ScoreCategory::MigrationSafety)).unwrap();
    assert_eq!(stats.count, 34);
    assert_eq!(stats.median, 9.0);
    assert_eq!(stats.q1, 8.0);
    assert_eq!(stats.q3, 10.0);
    assert_eq!(stats.whisker_low, 5.0);
    assert_eq!(stats.whisker_high, 10.0);
    assert_eq!(stats.fliers, vec![2.0, 2.0, 4.0, 4.0, 4.0]);
    assert!(approx(stats.mean, 270.0 / 34.0));
    assert_eq!(stats.plotted_extent(), (2.0, 10.0));
}

#[test]
fn test_performance_impact_stats_use_own_length() {
    let stats = BoxStats::from_scores(builtin_scores(ScoreCategory::PerformanceImpact)).unwrap();
    assert_eq!(stats.count, 32);
    assert_eq!(stats.median, 8.0);
    assert_eq!(stats.q1, 7.0);
    assert_eq!(stats.q3, 9.0);
    assert_eq!(stats.whisker_low, 4.0);
    assert_eq!(stats.fliers, vec![3.0]);
}

#[test]
fn test_stats_ordering_invariant_holds_for_builtin() {
    let groups = compute_group_stats(&ScoreDataset::builtin().groups).unwrap();
    assert_eq!(groups.len(), 5);
    for g in &groups {
        let s = &g.stats;
        assert!(s.min <= s.whisker_low, "{}", g.key);
        assert!(s.whisker_low <= s.q1, "{}", g.key);
        assert!(s.q1 <= s.median, "{}", g.key);
        assert!(s.median <= s.q3, "{}", g.key);
        assert!(s.q3 <= s.whisker_high, "{}", g.key);
        assert!(s.whisker_high <= s.max, "{}", g.key);
    }
}

#[test]
fn test_compute_group_stats_rejects_empty_group() {
    let groups = vec![ScoreGroup {
        category: ScoreCategory::ProjectRules,
        scores: &[],
    }];
    match compute_group_stats(&groups) {
        Err(ChartError::EmptyGroup(key)) => assert_eq!(key, "project_rules"),
        other => panic!("expected empty group error, got {other:?}"),
    }
}
