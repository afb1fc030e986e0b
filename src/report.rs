//! Markdown table formatting for debug listings.
//!
//! Debug mode prints one table per endpoint so the fetched entries can be
//! reviewed before anything is written. The last column is left unpadded
//! so long URLs wrap as cleanly as possible.

/// Format rows (first row is the header) as a Markdown table.
///
/// All rows must have the same number of columns. Returns an empty string
/// for empty input.
pub fn markdown_table(rows: &[Vec<String>]) -> String {
    let Some(header) = rows.first() else {
        return String::new();
    };

    let columns = header.len();
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let format_row = |row: &[String]| {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == columns - 1 {
                    cell.clone()
                } else {
                    format!("{cell:<width$}", width = widths[i])
                }
            })
            .collect();
        format!("| {} |", cells.join(" | "))
    };

    let mut lines: Vec<String> = rows.iter().map(|row| format_row(row)).collect();

    // Separator dashes match the header text in the last column only
    let separator: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if i == columns - 1 {
                "-".repeat(cell.len())
            } else {
                "-".repeat(widths[i])
            }
        })
        .collect();
    lines.insert(1, format!("| {} |", separator.join(" | ")));

    lines.join("\n")
}
