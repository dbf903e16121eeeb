//! Terminal rendering functions for the cascade menu.
//!
//! Columns are rendered side by side, one per level, padded to their widest
//! cell by display width so CJK labels line up.

use unicode_width::UnicodeWidthStr;

use crate::engine::{CascadeSelect, Regime};
use crate::models::CascadeOption;
use crate::summary::{DefaultFormatter, SummaryFormatter};
use crate::ui::theme::Icons;

use super::menu::Column;

/// Render a single cell of a column
pub fn render_cell(column: &Column<'_>, row: usize, item: &CascadeOption, icons: Icons) -> String {
    let cursor = if column.focused && row == column.cursor {
        icons.cursor
    } else {
        " "
    };
    let marker = if column.selected == Some(item.key.as_str()) {
        icons.on_path
    } else {
        icons.off_path
    };
    let branch = if item.is_leaf() { " " } else { icons.branch };

    format!("{}{} {} {}", cursor, marker, item.display_label(), branch)
}

/// Render columns side by side
pub fn render_columns(columns: &[Column<'_>], icons: Icons) -> String {
    let cells: Vec<Vec<String>> = columns
        .iter()
        .map(|column| {
            column
                .items
                .iter()
                .enumerate()
                .map(|(row, item)| render_cell(column, row, item, icons))
                .collect()
        })
        .collect();
    let widths: Vec<usize> = cells
        .iter()
        .map(|col| col.iter().map(|c| c.width()).max().unwrap_or(0))
        .collect();
    let rows = cells.iter().map(Vec::len).max().unwrap_or(0);
    let divider = format!(" {} ", icons.divider);

    let mut out = String::new();
    for row in 0..rows {
        let mut line = String::new();
        for (i, col) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(&divider);
            }
            let cell = col.get(row).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i].saturating_sub(cell.width())));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render the committed summary, plus the working path while in progress
pub fn render_status_bar(select: &CascadeSelect) -> String {
    let mut out = format!("Selected: {}", select.summary());
    if select.regime() == Regime::InProgress {
        let formatter = DefaultFormatter::with_separator(select.config().separator.clone());
        let browsing = formatter.format(select.working_value(), select.resolved_options());
        out.push_str(&format!("\nBrowsing: {}", browsing));
    }
    out
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(clearable: bool) -> String {
    let mut keys = String::from("[Enter] Pick    [Tab] Confirm    [q] Quit");
    if clearable {
        keys.push_str("    [c] Clear");
    }
    keys.push_str("\n(Use ↑↓ to move, →← to open/close a level)");
    keys
}
