use fractic_server_error::ServerError;

use crate::{
    entities::{DocumentRenderer, DocumentTable},
    errors::DocumentGenerationFailed,
};

/// Renders the table as CSV: title and summary lines first, one field each,
/// then the header and item rows.
pub struct CsvTableRenderer;

impl DocumentRenderer for CsvTableRenderer {
    fn format(&self) -> &str {
        "csv"
    }

    fn render(&self, table: &DocumentTable) -> Result<Vec<u8>, ServerError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        std::iter::once(&table.title)
            .chain(table.summary.iter())
            .try_for_each(|line| writer.write_record([line]))
            .and_then(|_| writer.write_record(&table.headers))
            .and_then(|_| table.rows.iter().try_for_each(|row| writer.write_record(row)))
            .map_err(|e| DocumentGenerationFailed::with_debug(self.format(), &e))?;

        writer
            .into_inner()
            .map_err(|e| DocumentGenerationFailed::with_debug(self.format(), &e.into_error()))
    }
}
