//! Backing stores for restaurant records.
//!
//! A repository only knows how to hand out the complete, unfiltered
//! collection. Every selection happens in the query path.

use common::errors::QueryError;
use common::types::restaurant::RestaurantRecord;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

pub trait RestaurantRepository {
    fn find_all(&self) -> Result<Vec<RestaurantRecord>, QueryError>;
}

/// Reads a JSON array of records from disk on every call, so edits to the
/// file are visible to the next query.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RestaurantRepository for JsonFileRepository {
    fn find_all(&self) -> Result<Vec<RestaurantRecord>, QueryError> {
        let contents = read_to_string(&self.path).map_err(|e| {
            QueryError::Storage(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            QueryError::Storage(format!("cannot decode {}: {}", self.path.display(), e))
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Vec<RestaurantRecord>,
}

impl InMemoryRepository {
    pub fn new(records: Vec<RestaurantRecord>) -> Self {
        Self { records }
    }
}

impl RestaurantRepository for InMemoryRepository {
    fn find_all(&self) -> Result<Vec<RestaurantRecord>, QueryError> {
        Ok(self.records.clone())
    }
}
