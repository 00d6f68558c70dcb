#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    //Selection errors
    /// No candidate satisfied the basic constraint set. Carries the name of the
    /// last constraint that rejected a candidate, empty when nothing was evaluated.
    #[error("overconstrained: {0}")]
    ErrOverconstrained(String),

    //Constraint parsing errors
    #[error("Constraint string too long.")]
    ErrConstraintStringTooLong,
    #[error("Constraint string sequence too long.")]
    ErrConstraintStringSeqTooLong,
    #[error("track constraints must be an object")]
    ErrConstraintsNotObject,
    #[error("advanced constraints must be an array")]
    ErrAdvancedNotArray,
    #[error("advanced constraint set must be an object")]
    ErrAdvancedElementNotObject,

    //Third Party Error
    #[error("parse json: {0}")]
    ParseJson(String),
}

impl Error {
    /// Name of the constraint reported by an overconstrained selection.
    pub fn failed_constraint_name(&self) -> Option<&str> {
        match self {
            Error::ErrOverconstrained(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ParseJson(e.to_string())
    }
}
