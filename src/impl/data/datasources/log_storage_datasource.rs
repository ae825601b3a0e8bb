use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fractic_server_error::ServerError;

use crate::errors::{ReadError, WriteError};

/// Client-local key/value slot holding the single serialized shopping log.
///
/// Writes replace the whole record.
pub trait LogStorageDatasource: Send + Sync {
    fn read(&self) -> Result<Option<String>, ServerError>;

    fn write(&mut self, record: &str) -> Result<(), ServerError>;

    fn clear(&mut self) -> Result<(), ServerError>;
}

/// Storage that lives as long as the session.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    record: Option<String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStorageDatasource for InMemoryStorage {
    fn read(&self) -> Result<Option<String>, ServerError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, record: &str) -> Result<(), ServerError> {
        self.record = Some(record.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ServerError> {
        self.record = None;
        Ok(())
    }
}

/// Storage backed by a single JSON file.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// readers see either the old record or the new one.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl LogStorageDatasource for FileStorage {
    fn read(&self) -> Result<Option<String>, ServerError> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReadError::with_debug(&e)),
        }
    }

    fn write(&mut self, record: &str) -> Result<(), ServerError> {
        let tmp = self.temp_path();
        fs::write(&tmp, record).map_err(|e| WriteError::with_debug(&e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            WriteError::with_debug(&e)
        })
    }

    fn clear(&mut self) -> Result<(), ServerError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WriteError::with_debug(&e)),
        }
    }
}
