//! FreeNono level document rendering
//!
//! A document holds exactly one `<Nonogram>` with a `<line>` per grid row.
//! Each line lists its cells as space-separated `x` and `_` tokens.

use crate::output::difficulty::Difficulty;
use crate::spatial::grid::PuzzleGrid;
use std::fmt::Write;

/// Declaration and collection wrapper opening every document
pub const DOCUMENT_HEADER: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?><FreeNono><Nonograms>\n";

/// Closing tags ending every document
pub const DOCUMENT_FOOTER: &str = "</Nonogram>\n</Nonograms>\n</FreeNono>";

/// Render an unrated level document
pub fn serialize_nonogram(name: &str, grid: &PuzzleGrid) -> String {
    serialize_with_difficulty(name, grid, Difficulty::Undefined)
}

/// Render a level document carrying `difficulty`
pub fn serialize_with_difficulty(name: &str, grid: &PuzzleGrid, difficulty: Difficulty) -> String {
    // header + opening tag + "<line> " / " </line>\n" + two bytes per cell
    let capacity = DOCUMENT_HEADER.len()
        + DOCUMENT_FOOTER.len()
        + 96
        + name.len()
        + grid.height() * (16 + 2 * grid.width());
    let mut document = String::with_capacity(capacity);

    document.push_str(DOCUMENT_HEADER);
    // Writing into a String cannot fail
    let _ = writeln!(
        document,
        "<Nonogram desc=\"\" difficulty=\"{}\" id=\"\" name=\"{}\" height=\"{}\" width=\"{}\">",
        difficulty.level(),
        escape_attribute(name),
        grid.height(),
        grid.width()
    );

    for row in grid.rows() {
        document.push_str("<line> ");
        for cell in row {
            document.push(cell.token());
            document.push(' ');
        }
        document.push_str("</line>\n");
    }

    document.push_str(DOCUMENT_FOOTER);
    document
}

/// Escape characters that would break a double-quoted XML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
