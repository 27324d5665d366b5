use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use std::fmt::Write;

// indicatif's own {percent} rounds, so the bar uses a truncating key instead.
const PERCENT_KEY: &str = "trunc_percent";
const BAR_TEMPLATE: &str = "{msg}\n{bar:50} {trunc_percent}%";
const FILL_CHARS: &str = "# ";

/// Integer percentage shown next to the bar, truncated toward zero.
pub fn percent(value: u64, max_value: u64) -> u64 {
    if max_value == 0 {
        return 100;
    }
    (value.min(max_value) as u128 * 100 / max_value as u128) as u64
}

/// Percentage as drawn on the bar, right-aligned to three columns.
pub fn format_percent(value: u64, max_value: u64) -> String {
    format!("{:>3}", percent(value, max_value))
}

/// Bar style whose percentage comes from [`percent`].
pub fn bar_style() -> Result<ProgressStyle, indicatif::style::TemplateError> {
    Ok(ProgressStyle::with_template(BAR_TEMPLATE)?
        .with_key(PERCENT_KEY, |state: &ProgressState, w: &mut dyn Write| {
            let _ = w.write_str(&format_percent(state.pos(), state.len().unwrap_or(0)));
        })
        .progress_chars(FILL_CHARS))
}

/// Two-line status: an optional label above a filled bar.
///
/// Values are clamped to `[0, max_value]`. indicatif clears the previous frame
/// before drawing, so a shorter label never leaves stale characters behind.
pub struct ProgressReporter {
    bar: ProgressBar,
    max_value: u64,
    value: u64,
}

impl ProgressReporter {
    pub fn new(max_value: u64) -> Self {
        let bar = ProgressBar::new(max_value);
        if let Ok(style) = bar_style() {
            bar.set_style(style);
        }
        Self {
            bar,
            max_value,
            value: 0,
        }
    }

    /// Draws nothing; used for `--quiet` and in tests.
    pub fn hidden(max_value: u64) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            max_value,
            value: 0,
        }
    }

    pub fn update(&mut self, value: u64, label: Option<&str>) {
        self.value = value.min(self.max_value);
        self.bar.set_position(self.value);
        self.bar.set_message(label.unwrap_or_default().to_string());
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn percent(&self) -> u64 {
        percent(self.value, self.max_value)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
