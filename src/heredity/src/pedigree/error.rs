use thiserror::Error;

use super::MAX_MEMBERS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("individual '{0}' is defined more than once")]
    DuplicateMember(String),

    #[error("parent '{parent}' of '{child}' does not match any individual in the pedigree")]
    UnknownParent { child: String, parent: String },

    #[error("individual '{child}' has exactly one recorded parent. Either both, or none, must be set")]
    MissingParent { child: String },

    #[error("pedigree contains {found} individuals, but at most {} are supported", MAX_MEMBERS)]
    PopulationOverflow { found: usize },
}
