use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a transactions file path should be passed")]
    MissingPathError,
    #[error("could not open transactions file")]
    FileError(#[from] std::io::Error),
    #[error("could not parse CSV rows to transaction")]
    CsvError(#[from] csv::Error),
    #[error("invalid transaction at line {line}")]
    RowError {
        line: u64,
        #[source]
        source: crate::domain::error::Error,
    },
    #[error("transactions reader stopped unexpectedly")]
    ReaderError(#[from] tokio::task::JoinError),
    #[error(transparent)]
    StoreError(#[from] crate::store::Error),
    #[error("could not remove imported file {}", path.display())]
    ReleaseError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
