//! Text charts for terminal output
//!
//! The bar and pie charts of a graphical dashboard become horizontal bar
//! charts here: one labelled line per entry.

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// A single bar, `width` characters wide, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One line of a bar chart
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text printed after the bar
    pub caption: String,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, caption: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            caption: caption.into(),
        }
    }
}

/// Render bars scaled against `max_value`, or against the largest bar when
/// `max_value` is `None`
pub fn bar_chart(bars: &[Bar], max_value: Option<f64>, width: usize) -> String {
    if bars.is_empty() {
        return String::new();
    }

    let max_value = max_value.unwrap_or_else(|| {
        bars.iter()
            .map(|b| b.value)
            .fold(0.0_f64, |acc, v| acc.max(v))
    });
    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for bar in bars {
        output.push_str(&format!(
            "{:<label_width$}  {} {}\n",
            bar.label,
            format_bar(bar.value, max_value, width),
            bar.caption,
            label_width = label_width,
        ));
    }
    output
}
