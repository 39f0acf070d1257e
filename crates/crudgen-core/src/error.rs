//! Error types for schema model construction.

/// Errors that can occur while building the schema model.
///
/// The transformers themselves (identifier derivation, type mapping)
/// have no error paths; only table construction can fail.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The introspection query returned zero columns. A table with no
    /// columns is impossible in a live schema, so this is how an absent
    /// table surfaces through a generic column query.
    #[error("Table not found: {table}")]
    TableNotFound {
        /// The table that yielded no columns.
        table: String,
    },
}

/// Result type for schema model operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
