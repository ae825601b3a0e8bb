use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            log_storage_datasource::LogStorageDatasource,
            upload_file_datasource::{UploadFileDatasource, UploadFileDatasourceImpl},
        },
        models::{
            shopping_log_model::ShoppingLogModel, unvalidated_log_model::UnvalidatedLogModel,
        },
    },
    domain::repositories::log_repository::LogRepository,
    entities::ShoppingLog,
    errors::NoSavedLog,
};

pub(crate) struct LogRepositoryImpl<S, U = UploadFileDatasourceImpl>
where
    S: LogStorageDatasource,
    U: UploadFileDatasource,
{
    storage: S,
    upload_datasource: U,
}

impl<S> LogRepositoryImpl<S, UploadFileDatasourceImpl>
where
    S: LogStorageDatasource,
{
    pub(crate) fn new(storage: S) -> Self {
        LogRepositoryImpl {
            storage,
            upload_datasource: UploadFileDatasourceImpl::new(),
        }
    }
}

impl<S, U> LogRepositoryImpl<S, U>
where
    S: LogStorageDatasource,
    U: UploadFileDatasource,
{
    fn read_stored(&self) -> Result<String, ServerError> {
        self.storage.read()?.ok_or_else(|| NoSavedLog::new())
    }

    fn persist(&mut self, log: &ShoppingLog) -> Result<(), ServerError> {
        let json = ShoppingLogModel::from(log.clone()).to_json()?;
        self.storage.write(&json)
    }
}

#[async_trait]
impl<S, U> LogRepository for LogRepositoryImpl<S, U>
where
    S: LogStorageDatasource,
    U: UploadFileDatasource,
{
    fn save(&mut self, log: &ShoppingLog) -> Result<(), ServerError> {
        self.persist(log)
    }

    fn load(&self) -> Result<ShoppingLog, ServerError> {
        let raw = self.read_stored()?;
        Ok(ShoppingLogModel::from_str(&raw)?.into())
    }

    fn export_raw(&self) -> Result<Vec<u8>, ServerError> {
        Ok(self.read_stored()?.into_bytes())
    }

    fn import_external(&mut self, bytes: &[u8]) -> Result<ShoppingLog, ServerError> {
        let log = UnvalidatedLogModel::from_bytes(bytes)?
            .validate()
            .map_err(|e| {
                tracing::warn!(reason = %e, "rejected uploaded shopping log");
                e.into_server_error()
            })?;
        self.persist(&log)?;
        Ok(log)
    }

    async fn import_file<P>(&mut self, path: P) -> Result<ShoppingLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let bytes = self.upload_datasource.read(path).await?;
        self.import_external(&bytes)
    }

    fn clear(&mut self) -> Result<(), ServerError> {
        self.storage.clear()
    }
}
