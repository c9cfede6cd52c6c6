use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("group {0} has no scores")]
    EmptyGroup(&'static str),

    #[error("label count {labels} does not match group count {groups}")]
    LabelMismatch { labels: usize, groups: usize },

    #[error("group lengths differ (expected {expected}): {}", format_lengths(.found))]
    LengthMismatch {
        expected: usize,
        found: Vec<(&'static str, usize)>,
    },

    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_lengths(found: &[(&'static str, usize)]) -> String {
    found
        .iter()
        .map(|(key, len)| format!("{key}={len}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ChartError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(value.to_string())
    }
}
