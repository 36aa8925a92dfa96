// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The storage unique index rejected a slug that passed the existence check.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
    #[error("no free slug derived from `{base}` within {attempts} suffixes")]
    SlugExhausted { base: String, attempts: u32 },
    #[error("persistence error: {0}")]
    Persistence(String),
}
