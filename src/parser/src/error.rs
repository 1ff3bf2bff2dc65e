use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("'{}' does not exist", .0.display())]
    MissingInputFile(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    InvalidInputFile(PathBuf),

    #[error("--precision must lie between 1 and 17")]
    InvalidPrecision,
}
