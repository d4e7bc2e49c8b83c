//! Plain-text table of supported platforms for error output

use crate::platform::PlatformEntry;

const HEADERS: [&str; 4] = ["TYPE", "ARCHITECTURE", "RUST_TARGET", "BINARY_NAME"];

/// Render platform entries as an aligned table with a header and dash rule
pub fn render_platform_table(entries: &[PlatformEntry]) -> String {
    let rows: Vec<[&str; 4]> = entries
        .iter()
        .map(|e| [e.os_type, e.architecture, e.build_target, e.executable_name])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = widths.map(|w| "-".repeat(w));
    let rule: [&str; 4] = [&rule[0], &rule[1], &rule[2], &rule[3]];

    let mut out = String::new();
    for line in [HEADERS, rule].iter().chain(rows.iter()) {
        let cells: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}
