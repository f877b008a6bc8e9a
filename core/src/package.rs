use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::config::{ConfigError, ExtractConfig};
use crate::csv_read::{self, CsvError};
use crate::diff::{DiffReport, diff_collections};
use crate::extract::{self, ExtractError};
use crate::model::Collection;

/// One parsed parametric limit file, ready to diff.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricFile {
    pub collection: Collection,
}

/// Errors surfaced by [`ParametricFile::open`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PackageError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl From<Collection> for ParametricFile {
    fn from(collection: Collection) -> Self {
        Self { collection }
    }
}

impl ParametricFile {
    /// Read CSV from `reader` and extract its entries under `config`.
    ///
    /// The config is validated first so a bad policy fails before any I/O is
    /// interpreted.
    pub fn open<R: Read>(reader: R, config: &ExtractConfig) -> Result<Self, PackageError> {
        config.validate()?;
        let rows = csv_read::read_rows(reader)?;
        let collection = extract::extract(&rows, config)?;
        Ok(Self { collection })
    }

    /// Read and extract a parametric file from a filesystem path.
    pub fn open_path(path: impl AsRef<Path>, config: &ExtractConfig) -> Result<Self, PackageError> {
        config.validate()?;
        let rows = csv_read::read_rows_from_path(path)?;
        let collection = extract::extract(&rows, config)?;
        Ok(Self { collection })
    }

    pub fn diff(&self, other: &Self) -> DiffReport {
        diff_collections(&self.collection, &other.collection)
    }
}
