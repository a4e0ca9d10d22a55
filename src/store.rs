use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{DatasetDocument, UserRecord},
};

/// The user records loaded once at startup
///
/// Read-only after construction; shared between requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    users: Vec<UserRecord>,
}

impl Dataset {
    /// Reads and normalizes the dataset document at `path`
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::DatasetIo {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            users = dataset.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses and normalizes an in-memory dataset document
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: DatasetDocument = serde_json::from_str(json)?;
        Ok(Self::from_records(
            document.users.into_iter().map(UserRecord::from).collect(),
        ))
    }

    pub fn from_records(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// All records in load order
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
