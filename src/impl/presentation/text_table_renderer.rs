use std::borrow::Cow;

use fractic_server_error::ServerError;

use crate::entities::{DocumentRenderer, DocumentTable};

/// Renders the table as fixed-width plain text. Cells wider than
/// `max_column_width` are wrapped onto extra lines.
pub struct TextTableRenderer {
    max_column_width: usize,
}

impl TextTableRenderer {
    pub fn new(max_column_width: usize) -> Self {
        Self {
            max_column_width: max_column_width.max(1),
        }
    }

    fn wrap<'s>(&self, cell: &'s str) -> Vec<Cow<'s, str>> {
        let lines = textwrap::wrap(cell, self.max_column_width);
        if lines.is_empty() {
            vec![Cow::Borrowed("")]
        } else {
            lines
        }
    }
}

impl Default for TextTableRenderer {
    fn default() -> Self {
        Self::new(30)
    }
}

impl DocumentRenderer for TextTableRenderer {
    fn format(&self) -> &str {
        "txt"
    }

    fn render(&self, table: &DocumentTable) -> Result<Vec<u8>, ServerError> {
        let wrapped_rows: Vec<Vec<Vec<Cow<str>>>> = std::iter::once(&table.headers)
            .chain(table.rows.iter())
            .map(|row| row.iter().map(|cell| self.wrap(cell)).collect())
            .collect();

        let column_count = table.headers.len();
        let widths: Vec<usize> = (0..column_count)
            .map(|c| {
                wrapped_rows
                    .iter()
                    .filter_map(|row| row.get(c))
                    .flat_map(|lines| lines.iter().map(|l| l.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&table.title);
        out.push('\n');
        out.push_str(&"=".repeat(table.title.chars().count()));
        out.push_str("\n\n");
        for line in &table.summary {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        for (i, row) in wrapped_rows.iter().enumerate() {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let cells: Vec<String> = widths
                    .iter()
                    .enumerate()
                    .map(|(c, width)| {
                        let text = row
                            .get(c)
                            .and_then(|lines| lines.get(line))
                            .map(|l| l.as_ref())
                            .unwrap_or("");
                        format!("{:width$}", text, width = *width)
                    })
                    .collect();
                out.push_str(cells.join(" | ").trim_end());
                out.push('\n');
            }
            if i == 0 {
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                out.push_str(&rule.join("-+-"));
                out.push('\n');
            }
        }

        Ok(out.into_bytes())
    }
}
