use crate::models::Neighborhood;
use std::path::Path;
use thiserror::Error;

/// Default catalog shipped with the service
const DEFAULT_CATALOG: &str = include_str!("../../data/neighborhoods.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no neighborhoods")]
    Empty,
}

/// Static neighborhood catalog
///
/// Loaded once at startup and never mutated. Records keep their catalog
/// order, which the matcher relies on for deterministic tie-breaking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    neighborhoods: Vec<Neighborhood>,
}

impl CatalogStore {
    /// Load the catalog bundled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG)
    }

    /// Load a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn from_json(json: &str) -> Result<Self, CatalogError> {
        let neighborhoods: Vec<Neighborhood> = serde_json::from_str(json)?;
        if neighborhoods.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { neighborhoods })
    }

    /// All catalog records, in catalog order
    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    pub fn len(&self) -> usize {
        self.neighborhoods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty()
    }
}
