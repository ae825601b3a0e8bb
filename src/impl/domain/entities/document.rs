use fractic_server_error::ServerError;

/// Tabular rendering input: a title, a few summary lines, then one row per
/// item.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTable {
    pub title: String,
    pub summary: Vec<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Document-generation backend.
pub trait DocumentRenderer: Send + Sync {
    /// Short format name used in messages and file names (ex. "pdf", "txt").
    fn format(&self) -> &str;

    fn render(&self, table: &DocumentTable) -> Result<Vec<u8>, ServerError>;
}
