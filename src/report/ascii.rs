//! ASCII table rendering
//!
//! ```text
//! +HeadHunter Moscow-+-----------------+---------------------+----------------+
//! | Language         | Vacancies found | Vacancies processed | Average salary |
//! +------------------+-----------------+---------------------+----------------+
//! | Python           | 1500            | 600                 | 187345.7       |
//! +------------------+-----------------+---------------------+----------------+
//! ```
//!
//! Widths count characters, not bytes, so Cyrillic labels line up.

use super::TableModel;

/// Render a table with the title embedded in its top border
///
/// The title is dropped from the border when it does not fit.
pub fn render_ascii(table: &TableModel) -> String {
    let widths = column_widths(table);
    let border = border_line(&widths);

    let mut lines = Vec::with_capacity(table.rows.len() + 4);
    lines.push(title_line(&table.title, &border));
    lines.push(row_line(&table.header, &widths));
    lines.push(border.clone());

    if !table.rows.is_empty() {
        for row in &table.rows {
            lines.push(row_line(row, &widths));
        }
        lines.push(border);
    }

    lines.join("\n")
}

fn column_widths(table: &TableModel) -> Vec<usize> {
    let mut widths: Vec<usize> = table.header.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn title_line(title: &str, border: &str) -> String {
    let title_len = title.chars().count();
    // Border is pure ASCII, so byte offsets equal character offsets
    if title.is_empty() || title_len + 2 > border.len() {
        return border.to_string();
    }
    format!("+{}{}", title, &border[1 + title_len..])
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
