use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ChartError;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> Result<String, ChartError> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn write_summary_json(data: &SummaryData, path: &Path) -> Result<(), ChartError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "summary written");
    Ok(())
}
