//! Comment header placed above every generated list.

use chrono::{DateTime, Utc};

use crate::classify::Category;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Title, generation time and entry count, followed by a blank line.
pub fn render_header(category: Category, generated_at: &DateTime<Utc>, count: usize) -> String {
    format!(
        "# {}\n# Last Updated: {}\n# Total: {} {}\n\n",
        category.title(),
        format_timestamp(generated_at),
        count,
        category.noun()
    )
}

/// Full file body: header then one entry per line.
pub fn render_list(category: Category, generated_at: &DateTime<Utc>, entries: &[String]) -> String {
    let mut out = render_header(category, generated_at, entries.len());
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}
