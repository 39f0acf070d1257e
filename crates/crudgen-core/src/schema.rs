//! In-memory model of one table's introspected schema.
//!
//! A [`Table`] is loaded atomically from a column list, computes its
//! derived facts once (singular Go struct name, primary-key count), and
//! is read-only afterwards. Column order is schema ordinal order and is
//! preserved through generation.

use crate::error::{CodegenError, Result};
use crate::ident::go_ident;
use crate::plural::singularize;

/// Role a column plays in its table's key structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyRole {
    /// Not part of the primary key.
    #[default]
    None,
    /// Primary key member (`COLUMN_KEY = 'PRI'`).
    Primary,
}

/// A column's default-value marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnDefault {
    /// No default declared.
    #[default]
    None,
    /// A literal default value.
    Value(String),
    /// The database fills the column on write (`CURRENT_TIMESTAMP`).
    /// Such columns are skipped on insert and update but still read.
    CurrentTimestamp,
}

/// One column as reported by schema introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Raw column name, exactly as cased in the schema.
    pub name: String,
    /// Coarse type category, e.g. `varchar`.
    pub data_type: String,
    /// Full column type, e.g. `varchar(255)`. Carried for future use;
    /// generation keys off `data_type`.
    pub column_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Key role.
    pub key: KeyRole,
    /// Default-value marker.
    pub default: ColumnDefault,
    /// Extra attributes, e.g. `auto_increment`.
    pub extra: String,
}

impl Column {
    /// Whether this column is part of the primary key.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.key == KeyRole::Primary
    }

    /// Whether the database populates this column on write.
    #[must_use]
    pub fn generated_on_write(&self) -> bool {
        self.default == ColumnDefault::CurrentTimestamp
    }
}

/// A table and the derived facts generation needs.
///
/// Immutable once constructed; the generator only reads it.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    struct_name: String,
    columns: Vec<Column>,
    primary_key_count: usize,
    public: bool,
}

impl Table {
    /// Builds a table from introspected columns, deriving the singular
    /// Go struct name and counting primary-key columns.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::TableNotFound`] when `columns` is empty:
    /// an absent table yields zero rows from the generic column query,
    /// indistinguishable from a (impossible) column-less table.
    pub fn from_columns(
        name: impl Into<String>,
        columns: Vec<Column>,
        public: bool,
    ) -> Result<Self> {
        let name = name.into();
        if columns.is_empty() {
            return Err(CodegenError::TableNotFound { table: name });
        }
        let struct_name = singularize(&go_ident(&name));
        let primary_key_count = columns.iter().filter(|c| c.is_primary()).count();
        Ok(Self {
            name,
            struct_name,
            columns,
            primary_key_count,
            public,
        })
    }

    /// Raw table name, schema-cased.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Singular Go identifier used as the generated struct name.
    #[must_use]
    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    /// Columns in schema ordinal order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of primary-key columns; drives CRUD strategy selection.
    #[must_use]
    pub fn primary_key_count(&self) -> usize {
        self.primary_key_count
    }

    /// Whether generated operations use exported Go names.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.public
    }
}
