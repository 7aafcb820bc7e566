use thiserror::Error;

/// Result alias used by every service operation.
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unclassified storage fault. Deliberately not folded into the business
    /// variants so callers can tell a broken backend from a rejected request.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. storage connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Repository(RepositoryError::Backend(_)))
    }
}

/// Errors surfaced by repository adapters. Guarded inserts report ceiling and
/// uniqueness outcomes as distinct variants; services translate those into
/// `DomainError::Validation` with the canonical wording.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage backend failure: {0}")]
    Backend(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Ceiling of {limit} reached for {entity}")]
    CeilingExceeded { entity: &'static str, limit: u32 },
}
