use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriterError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error("'{}' already exists. Use --overwrite to force", .0.display())]
    OverwriteDisallowed(PathBuf),
}
