//! Pipe tables.
//!
//! A table starts at a row containing `|` that is immediately followed by a
//! separator row, and runs until the first blank or non-row line.

use super::inline::render_inline;
use super::patterns::SEPARATOR_CELL_RE;

/// Class on the wrapper element, so wide tables can scroll on their own.
const TABLE_WRAPPER_CLASS: &str = "c-article__table";

/// Column alignment taken from a separator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Default,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Alignment declared by one separator cell (`:-:`, `--:`, `:--`, `---`).
    pub fn from_separator_cell(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            (false, false) => Alignment::Default,
        }
    }

    fn css_value(self) -> Option<&'static str> {
        match self {
            Alignment::Default => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// Split a row into trimmed cells, ignoring one optional outer pipe per side.
pub fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim).collect()
}

/// Whether `line` is a table row: it has a pipe and more than one cell.
pub fn is_row(line: &str) -> bool {
    memchr::memchr(b'|', line.as_bytes()).is_some() && split_cells(line).len() > 1
}

/// Whether `line` is a separator row such as `|:--|--:|`.
pub fn is_separator(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    split_cells(line)
        .iter()
        .all(|cell| SEPARATOR_CELL_RE.is_match(cell))
}

/// Alignments for `column_count` columns; missing separator cells default.
pub fn column_alignments(separator: &str, column_count: usize) -> Vec<Alignment> {
    let cells = split_cells(separator);
    (0..column_count)
        .map(|index| {
            cells
                .get(index)
                .map(|cell| Alignment::from_separator_cell(cell))
                .unwrap_or_default()
        })
        .collect()
}

/// A table parsed from consecutive source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    pub headers: Vec<&'a str>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> Table<'a> {
    /// Parse a table whose header row is `lines[start]`.
    ///
    /// Returns the table and the index of the first line after it, or `None`
    /// when `lines[start]` does not open a table.
    pub fn parse(lines: &[&'a str], start: usize) -> Option<(Self, usize)> {
        let header = *lines.get(start)?;
        let separator = *lines.get(start + 1)?;
        if !is_row(header) || !is_separator(separator) {
            return None;
        }

        let headers = split_cells(header);
        let alignments = column_alignments(separator, headers.len());

        let mut end = start + 2;
        let mut rows = Vec::new();
        while let Some(&line) = lines.get(end) {
            if line.trim().is_empty() || !is_row(line) {
                break;
            }
            rows.push(split_cells(line));
            end += 1;
        }

        Some((
            Table {
                headers,
                alignments,
                rows,
            },
            end,
        ))
    }

    /// Append the table's HTML to `out`.
    pub fn write_html(&self, out: &mut String) {
        out.push_str(&format!(
            r#"<div class="{TABLE_WRAPPER_CLASS}"><table><thead><tr>"#
        ));
        for (index, header) in self.headers.iter().enumerate() {
            self.write_cell(out, "th", index, header);
        }
        out.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            out.push_str("<tr>");
            for (index, cell) in row.iter().enumerate() {
                self.write_cell(out, "td", index, cell);
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table></div>");
    }

    fn write_cell(&self, out: &mut String, tag: &str, index: usize, content: &str) {
        let align = self
            .alignments
            .get(index)
            .and_then(|alignment| alignment.css_value());
        match align {
            Some(value) => out.push_str(&format!(r#"<{tag} style="text-align: {value};">"#)),
            None => out.push_str(&format!("<{tag}>")),
        }
        out.push_str(&render_inline(content));
        out.push_str(&format!("</{tag}>"));
    }
}
