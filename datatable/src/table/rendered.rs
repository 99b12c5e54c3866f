//! Resolved tables and their text/HTML output.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::cell::CellContent;
use crate::collection::RowId;
use crate::column::Alignment;
use crate::error::CellError;
use crate::fragment::escape_html;

/// Shown in place of a cell that failed to format.
pub const ERROR_MARKER: &str = "#ERR";

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub property_name: String,
    pub text: String,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: RowId,
    /// One entry per column, in column order.
    pub cells: Vec<Result<CellContent, CellError>>,
}

impl RenderedRow {
    /// Plain text of every cell; failed cells become [`ERROR_MARKER`].
    pub fn texts(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Ok(content) => content.to_plain_text(),
                Err(_) => ERROR_MARKER.to_string(),
            })
            .collect()
    }
}

/// The output of [`TableConfig::render`](super::TableConfig::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    /// Every failed cell in the table.
    pub fn errors(&self) -> impl Iterator<Item = &CellError> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter_map(|cell| cell.as_ref().err())
    }

    /// Lay the table out as a monospace grid.
    ///
    /// Column width is the widest display width of the header and cells.
    pub fn to_text(&self) -> String {
        let body: Vec<Vec<String>> = self.rows.iter().map(RenderedRow::texts).collect();

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                body.iter()
                    .filter_map(|row| row.get(i))
                    .map(|text| text.width())
                    .chain(std::iter::once(header.text.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header_texts: Vec<&str> = self.headers.iter().map(|h| h.text.as_str()).collect();
        self.write_line(&mut out, &header_texts, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(rule.join("-+-").trim_end());
        out.push('\n');

        for row in &body {
            let texts: Vec<&str> = row.iter().map(String::as_str).collect();
            self.write_line(&mut out, &texts, &widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, texts: &[&str], widths: &[usize]) {
        let cells: Vec<String> = self
            .headers
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (header, width))| {
                align_text(texts.get(i).copied().unwrap_or(""), *width, header.align)
            })
            .collect();
        out.push_str(cells.join(SEPARATOR).trim_end());
        out.push('\n');
    }

    /// Emit an HTML `<table>`. Alignment is carried as a CSS class.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<table>\n<thead>\n<tr>");
        for header in &self.headers {
            let _ = write!(
                out,
                "<th class=\"{}\">{}</th>",
                header.align.css_class(),
                escape_html(&header.text)
            );
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &self.rows {
            let _ = write!(out, "<tr data-row-id=\"{}\">", row.id);
            for (header, cell) in self.headers.iter().zip(&row.cells) {
                let class = header.align.css_class();
                match cell {
                    Ok(content) => {
                        let _ = write!(out, "<td class=\"{class}\">{}</td>", content.to_html());
                    }
                    Err(e) => {
                        let _ = write!(
                            out,
                            "<td class=\"{class} cell-error\" title=\"{}\">{ERROR_MARKER}</td>",
                            escape_html(&e.to_string())
                        );
                    }
                }
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
        out
    }
}

/// Pad `text` to `width` display columns.
fn align_text(text: &str, width: usize, align: Alignment) -> String {
    let gap = width.saturating_sub(text.width());
    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
