//! Rendering of free windows as text or JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use meeting_finder::time_range::format_clock;
use meeting_finder::TimeRange;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `HH:MM-HH:MM (N min)` line per window
    #[default]
    Text,
    /// JSON array of `{start, end, duration}` objects
    Json,
}

#[derive(Debug, Serialize)]
struct WindowOutput {
    start: String,
    end: String,
    duration: u32,
}

impl From<&TimeRange> for WindowOutput {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_clock(range.start()),
            end: format_clock(range.end()),
            duration: range.duration(),
        }
    }
}

pub fn render(windows: &[TimeRange], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(windows)),
        Format::Json => {
            let out: Vec<WindowOutput> = windows.iter().map(WindowOutput::from).collect();
            let mut json =
                serde_json::to_string_pretty(&out).context("Failed to serialize windows")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(windows: &[TimeRange]) -> String {
    if windows.is_empty() {
        return "no available time\n".to_string();
    }
    windows
        .iter()
        .map(|w| {
            format!(
                "{}-{} ({} min)\n",
                format_clock(w.start()),
                format_clock(w.end()),
                w.duration()
            )
        })
        .collect()
}
