use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error(transparent)]
    ParsePedigree(#[from] csv::Error),

    #[error("invalid trait value '{0}'. Expected '1', '0', or an empty field")]
    InvalidTrait(String),
}
