use crate::report::{SummaryData, format_f64_2};

const LABEL_WIDTH: usize = 27;

pub fn render_summary_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", data.figure.title));
    out.push_str(&format!("{}\n\n", "=".repeat(data.figure.title.len())));

    out.push_str(&format!(
        "{:<width$} {:>3} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}  fliers\n",
        "group",
        "n",
        "min",
        "q1",
        "median",
        "q3",
        "max",
        "mean",
        width = LABEL_WIDTH
    ));
    for group in &data.groups {
        let s = &group.stats;
        let fliers = if s.fliers.is_empty() {
            "-".to_string()
        } else {
            s.fliers
                .iter()
                .map(|v| format!("{v}"))
                .collect::<Vec<_>>()
                .join(",")
        };
        out.push_str(&format!(
            "{:<width$} {:>3} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}  {}\n",
            group.label,
            s.count,
            format_f64_2(s.min),
            format_f64_2(s.q1),
            format_f64_2(s.median),
            format_f64_2(s.q3),
            format_f64_2(s.max),
            format_f64_2(s.mean),
            fliers,
            width = LABEL_WIDTH
        ));
    }

    if !data.lengths.uniform {
        out.push('\n');
        for dev in &data.lengths.deviating {
            out.push_str(&format!(
                "note: {} has {} scores (others: {})\n",
                dev.key, dev.len, data.lengths.expected
            ));
        }
    }

    out.push_str(&format!(
        "\noutput: {} ({}x{} px, {} bytes)\n",
        data.output, data.figure.width_px, data.figure.height_px, data.output_bytes
    ));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
