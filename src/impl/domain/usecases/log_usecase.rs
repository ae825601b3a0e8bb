use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{
            clock::Clock,
            draft_validator::{DraftRejection, DraftValidator},
            sanitizer::{sanitize_draft, Sanitizer},
        },
        repositories::log_repository::LogRepository,
    },
    entities::{DocumentRenderer, FormSession, LogConfig, RenderedDocument, ShoppingLog},
    errors::{DocumentGenerationFailed, DocumentToolUnavailable, InvalidFieldValue, MissingItems},
    presentation::document_builder::DocumentBuilder,
};

pub(crate) const EXPORT_FILE_NAME: &str = "shoppingLog.json";
const DOCUMENT_FILE_STEM: &str = "shopping-log";

#[async_trait]
pub trait LogUsecase: Send + Sync {
    /// Validates the form, sanitizes it and replaces the stored log.
    fn save(&mut self, session: &mut FormSession) -> Result<ShoppingLog, ServerError>;

    /// Repopulates the form from the stored log. Leaves the form untouched if
    /// nothing is stored.
    fn load(&self, session: &mut FormSession) -> Result<ShoppingLog, ServerError>;

    /// Replaces the stored log with an uploaded file and refreshes the form
    /// from storage.
    async fn upload<P>(
        &mut self,
        session: &mut FormSession,
        path: P,
    ) -> Result<ShoppingLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    /// Same as `upload`, for bytes already in memory.
    fn import_bytes(
        &mut self,
        session: &mut FormSession,
        bytes: &[u8],
    ) -> Result<ShoppingLog, ServerError>;

    /// Stored log as a downloadable JSON file.
    fn download(&self) -> Result<RenderedDocument, ServerError>;

    /// Renders the current form through the configured document renderer.
    fn export_document(&self, session: &FormSession) -> Result<RenderedDocument, ServerError>;
}

pub(crate) struct LogUsecaseImpl<R>
where
    R: LogRepository,
{
    repository: R,
    config: LogConfig,
    clock: Box<dyn Clock>,
    sanitizer: Box<dyn Sanitizer>,
    renderer: Option<Box<dyn DocumentRenderer>>,
}

impl<R> LogUsecaseImpl<R>
where
    R: LogRepository,
{
    pub(crate) fn new(
        repository: R,
        config: LogConfig,
        clock: Box<dyn Clock>,
        sanitizer: Box<dyn Sanitizer>,
        renderer: Option<Box<dyn DocumentRenderer>>,
    ) -> Self {
        Self {
            repository,
            config,
            clock,
            sanitizer,
            renderer,
        }
    }

    pub(crate) fn config(&self) -> &LogConfig {
        &self.config
    }

    pub(crate) fn set_clock(&mut self, clock: Box<dyn Clock>) {
        self.clock = clock;
    }

    pub(crate) fn set_sanitizer(&mut self, sanitizer: Box<dyn Sanitizer>) {
        self.sanitizer = sanitizer;
    }

    pub(crate) fn set_renderer(&mut self, renderer: Option<Box<dyn DocumentRenderer>>) {
        self.renderer = renderer;
    }

    pub(crate) fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}

#[async_trait]
impl<R> LogUsecase for LogUsecaseImpl<R>
where
    R: LogRepository,
{
    fn save(&mut self, session: &mut FormSession) -> Result<ShoppingLog, ServerError> {
        let now = self.clock.now();
        session.debounce.check(now)?;

        let draft = session.to_draft();
        let goal = match DraftValidator::new(&draft).validate() {
            Ok(goal) => goal,
            Err(DraftRejection::Field(violation)) => {
                tracing::debug!(reason = %violation.message(), "save rejected by validation");
                session.mark_invalid(violation.field);
                return Err(InvalidFieldValue::new(
                    &violation.field.label(),
                    &violation.error.to_string(),
                ));
            }
            Err(DraftRejection::NoItems) => {
                // Every field passed, so nothing stays marked.
                session.clear_invalid();
                return Err(MissingItems::new());
            }
        };
        session.clear_invalid();

        let log = sanitize_draft(draft, goal, self.sanitizer.as_ref());
        self.repository.save(&log)?;
        session.debounce.record(now);

        tracing::info!(items = log.items().len(), date = log.date(), "shopping log saved");
        Ok(log)
    }

    fn load(&self, session: &mut FormSession) -> Result<ShoppingLog, ServerError> {
        let log = self.repository.load()?;
        session.populate(&log);
        tracing::debug!(items = log.items().len(), "shopping log loaded");
        Ok(log)
    }

    async fn upload<P>(
        &mut self,
        session: &mut FormSession,
        path: P,
    ) -> Result<ShoppingLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.repository.import_file(path).await?;
        tracing::info!("shopping log uploaded");
        self.load(session)
    }

    fn import_bytes(
        &mut self,
        session: &mut FormSession,
        bytes: &[u8],
    ) -> Result<ShoppingLog, ServerError> {
        self.repository.import_external(bytes)?;
        tracing::info!("shopping log imported");
        self.load(session)
    }

    fn download(&self) -> Result<RenderedDocument, ServerError> {
        Ok(RenderedDocument {
            file_name: EXPORT_FILE_NAME.to_string(),
            bytes: self.repository.export_raw()?,
        })
    }

    fn export_document(&self, session: &FormSession) -> Result<RenderedDocument, ServerError> {
        let renderer = self
            .renderer
            .as_ref()
            .ok_or_else(|| DocumentToolUnavailable::new())?;
        let table = DocumentBuilder::new(&self.config).build(session);
        let bytes = renderer.render(&table).map_err(|e| {
            tracing::warn!(format = renderer.format(), error = ?e, "document generation failed");
            DocumentGenerationFailed::with_debug(renderer.format(), &e)
        })?;
        Ok(RenderedDocument {
            file_name: format!("{DOCUMENT_FILE_STEM}.{}", renderer.format()),
            bytes,
        })
    }
}
