/// Domain-specific error types for the catalog library.
///
/// The filter-sort engine and the comparison selection never fail; these
/// errors only surface at the edges (parsing input, loading data files,
/// resolving ids).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid value: {0}")]
    Parse(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;
