use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::ShoppingLog;

#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Replaces the stored record with `log`.
    fn save(&mut self, log: &ShoppingLog) -> Result<(), ServerError>;

    /// Stored record, without re-validation.
    fn load(&self) -> Result<ShoppingLog, ServerError>;

    /// Stored record, byte for byte.
    fn export_raw(&self) -> Result<Vec<u8>, ServerError>;

    /// Checks the shape of an external JSON record and, if it passes, makes it
    /// the stored record.
    fn import_external(&mut self, bytes: &[u8]) -> Result<ShoppingLog, ServerError>;

    async fn import_file<P>(&mut self, path: P) -> Result<ShoppingLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn clear(&mut self) -> Result<(), ServerError>;
}
