use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot list directory {}: {source}", .path.display())]
    ListDir { path: PathBuf, source: ignore::Error },
    #[error("cannot write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("cannot load collation data: {0:?}")]
    Collation(icu_collator::CollatorError),
}
