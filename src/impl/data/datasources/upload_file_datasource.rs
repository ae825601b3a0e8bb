use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::errors::ReadError;

#[async_trait]
pub(crate) trait UploadFileDatasource: Send + Sync {
    async fn read<P>(&self, path: P) -> Result<Vec<u8>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct UploadFileDatasourceImpl;

impl UploadFileDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UploadFileDatasource for UploadFileDatasourceImpl {
    async fn read<P>(&self, path: P) -> Result<Vec<u8>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))
    }
}
