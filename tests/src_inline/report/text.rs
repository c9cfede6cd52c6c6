use super::*;
use crate::report::tests::sample_summary;

#[test]
fn test_text_summary_lists_groups_in_order() {
    let text = render_summary_text(&sample_summary());
    let positions = [
        "Migration Safety",
        "Data Integrity",
        "Performance Impact",
        "Project Rules Consistency",
        "Security/Scalability",
    ]
    .iter()
    .map(|label| text.find(label).unwrap())
    .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_text_summary_header_and_rows() {
    let text = render_summary_text(&sample_summary());
    assert!(text.starts_with("Evaluation Scores Across 34 Reviews\n"));
    let row = text
        .lines()
        .find(|l| l.starts_with("Migration Safety"))
        .unwrap();
    assert!(row.contains(" 34 "));
    assert!(row.contains("9.00"));
    assert!(row.ends_with("2,2,4,4,4"));
}

#[test]
fn test_text_summary_notes_length_mismatch() {
    let text = render_summary_text(&sample_summary());
    assert!(text.contains("note: performance_impact has 32 scores (others: 34)"));
    assert!(text.contains("output: boxplot.png (1000x600 px, 1234 bytes)"));
}
