use std::fmt::Write;

use crate::models::Dashboard;

const TEMPLATE: &str = include_str!("dashboard.html");

/// How often the page re-polls `/api/data`.
pub const REFRESH_INTERVAL_MS: u64 = 5000;

/// Render the dashboard page. Only numbers and timestamps are
/// interpolated, so nothing needs escaping.
pub fn render(dashboard: &Dashboard) -> String {
    let mut rows = String::new();
    for reading in &dashboard.readings {
        // writing to a String cannot fail
        let _ = writeln!(
            rows,
            "            <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            reading.id,
            reading.temperature,
            reading.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }

    TEMPLATE
        .replace("{{LATEST}}", &dashboard.latest.to_string())
        .replace("{{ROWS}}", rows.trim_end())
        .replace("{{REFRESH_MS}}", &REFRESH_INTERVAL_MS.to_string())
}
