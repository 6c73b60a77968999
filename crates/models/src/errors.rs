use thiserror::Error;

/// Failure to translate a store row into a typed entity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}`: expected {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
