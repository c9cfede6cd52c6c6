use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

use crate::error::ChartError;

pub const FONT_FAMILY: &str = "sans-serif";

static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Registers DejaVu Sans under the generic `sans-serif` family. Only the first
/// call does any work; later calls replay its outcome.
pub fn register_embedded_font() -> Result<(), ChartError> {
    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, EMBEDDED_FONT)
                .map_err(|_| "embedded DejaVu Sans could not be parsed".to_string())
        })
        .clone()
        .map_err(ChartError::Font)
}
