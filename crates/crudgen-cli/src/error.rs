//! Error types for the CLI.

use crudgen_mysql::LoadError;

/// Errors that can occur while generating code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Loading a table's schema failed (query error or table not found).
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A database error outside table loading, e.g. the table listing.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The bulk path finished with per-table failures. Output for the
    /// tables that succeeded was still produced.
    #[error("Generation finished with errors:\n{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    Partial(Vec<String>),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, CliError>;
