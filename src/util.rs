use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::{
        models::config_model::LogConfigModel,
        repositories::log_repository_impl::LogRepositoryImpl,
    },
    domain::{
        logic::{
            clock::SystemClock, sanitizer::AmmoniaSanitizer, save_debounce::SaveDebounce,
        },
        repositories::log_repository::LogRepository as _,
        usecases::log_usecase::{LogUsecase as _, LogUsecaseImpl},
    },
    entities::{DocumentRenderer, FormSession, LogConfig, RenderedDocument, ShoppingLog},
    errors::ReadError,
    presentation::text_table_renderer::TextTableRenderer,
    storage::{InMemoryStorage, LogStorageDatasource},
    collaborators::{Clock, Sanitizer},
};

/// Parses a RON config document. Missing fields fall back to defaults.
pub fn parse_config(s: &str) -> Result<LogConfig, ServerError> {
    LogConfigModel::from_str(s)?.try_into()
}

pub fn read_config<P>(path: P) -> Result<LogConfig, ServerError>
where
    P: AsRef<std::path::Path>,
{
    parse_config(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
}

/// One shopping-log form session bound to a storage slot.
///
/// Owns the form state and everything needed to save, load, import and export
/// it. Defaults: system clock, `ammonia` sanitizer, plain-text document
/// renderer.
pub struct ShoppingLogUtil<S = InMemoryStorage>
where
    S: LogStorageDatasource,
{
    usecase: LogUsecaseImpl<LogRepositoryImpl<S>>,
    session: FormSession,
}

impl<S> ShoppingLogUtil<S>
where
    S: LogStorageDatasource,
{
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, LogConfig::default())
    }

    pub fn with_config(storage: S, config: LogConfig) -> Self {
        let session = FormSession::new(SaveDebounce::new(config.debounce_interval));
        Self {
            usecase: LogUsecaseImpl::new(
                LogRepositoryImpl::new(storage),
                config,
                Box::new(SystemClock),
                Box::new(AmmoniaSanitizer),
                Some(Box::new(TextTableRenderer::default())),
            ),
            session,
        }
    }

    pub fn from_config_file<P>(storage: S, config_path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::with_config(storage, read_config(config_path)?))
    }

    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.usecase.set_clock(Box::new(clock));
        self
    }

    pub fn with_sanitizer<Z>(mut self, sanitizer: Z) -> Self
    where
        Z: Sanitizer + 'static,
    {
        self.usecase.set_sanitizer(Box::new(sanitizer));
        self
    }

    pub fn with_renderer<D>(mut self, renderer: D) -> Self
    where
        D: DocumentRenderer + 'static,
    {
        self.usecase.set_renderer(Some(Box::new(renderer)));
        self
    }

    /// Document export will report the tool as unavailable.
    pub fn without_renderer(mut self) -> Self {
        self.usecase.set_renderer(None);
        self
    }

    pub fn config(&self) -> &LogConfig {
        self.usecase.config()
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    /// Starts a fresh form session. Stored data is kept.
    pub fn reset_session(&mut self) {
        self.session = FormSession::new(SaveDebounce::new(self.config().debounce_interval));
    }

    pub fn save(&mut self) -> Result<ShoppingLog, ServerError> {
        self.usecase.save(&mut self.session)
    }

    pub fn load(&mut self) -> Result<ShoppingLog, ServerError> {
        self.usecase.load(&mut self.session)
    }

    pub async fn upload<P>(&mut self, path: P) -> Result<ShoppingLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.usecase.upload(&mut self.session, path).await
    }

    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<ShoppingLog, ServerError> {
        self.usecase.import_bytes(&mut self.session, bytes)
    }

    pub fn download(&self) -> Result<RenderedDocument, ServerError> {
        self.usecase.download()
    }

    pub fn export_document(&self) -> Result<RenderedDocument, ServerError> {
        self.usecase.export_document(&self.session)
    }

    pub fn clear_storage(&mut self) -> Result<(), ServerError> {
        self.usecase.repository_mut().clear()
    }
}
