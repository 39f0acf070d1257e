//! `INFORMATION_SCHEMA` queries and row conversion.

use sqlx::mysql::MySqlPool;

use crudgen_core::{CodegenError, Column, ColumnDefault, KeyRole, Table};

/// Column metadata query, ordered by schema ordinal position. Ordinal
/// order is what the generator preserves through to the emitted text.
const COLUMNS_SQL: &str = r"
SELECT COLUMN_NAME, DATA_TYPE, COLUMN_TYPE, COLUMN_DEFAULT, IS_NULLABLE, COLUMN_KEY, EXTRA
FROM INFORMATION_SCHEMA.COLUMNS
WHERE TABLE_NAME = ?
  AND TABLE_SCHEMA = ?
ORDER BY ORDINAL_POSITION
";

/// Table listing query for the bulk generation path.
const TABLES_SQL: &str = r"
SELECT TABLE_NAME
FROM INFORMATION_SCHEMA.TABLES
WHERE TABLE_SCHEMA = ?
ORDER BY TABLE_NAME
";

/// The `COLUMN_DEFAULT` sentinel for columns the database stamps on
/// write.
const CURRENT_TIMESTAMP: &str = "CURRENT_TIMESTAMP";

/// One row of `INFORMATION_SCHEMA.COLUMNS`, as MySQL reports it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ColumnRow {
    /// Raw column name.
    #[sqlx(rename = "COLUMN_NAME")]
    pub column_name: String,
    /// Coarse type category, e.g. `varchar`.
    #[sqlx(rename = "DATA_TYPE")]
    pub data_type: String,
    /// Full column type, e.g. `varchar(255)`.
    #[sqlx(rename = "COLUMN_TYPE")]
    pub column_type: String,
    /// `YES` or `NO`.
    #[sqlx(rename = "IS_NULLABLE")]
    pub is_nullable: String,
    /// `PRI` for primary-key members, otherwise another marker or empty.
    #[sqlx(rename = "COLUMN_KEY")]
    pub column_key: String,
    /// Extra attributes, e.g. `auto_increment`.
    #[sqlx(rename = "EXTRA")]
    pub extra: String,
    /// Declared default, absent when the column has none.
    #[sqlx(rename = "COLUMN_DEFAULT")]
    pub column_default: Option<String>,
}

impl From<ColumnRow> for Column {
    fn from(row: ColumnRow) -> Self {
        let default = match row.column_default {
            None => ColumnDefault::None,
            Some(value) if value == CURRENT_TIMESTAMP => ColumnDefault::CurrentTimestamp,
            Some(value) => ColumnDefault::Value(value),
        };
        Self {
            name: row.column_name,
            data_type: row.data_type,
            column_type: row.column_type,
            nullable: row.is_nullable == "YES",
            key: if row.column_key == "PRI" {
                KeyRole::Primary
            } else {
                KeyRole::None
            },
            default,
            extra: row.extra,
        }
    }
}

/// Errors from loading a table's schema.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The introspection query failed; surfaced verbatim from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The table yielded zero columns.
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Fetches ordered column metadata for one table.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] on connection or query
/// failure.
pub async fn fetch_columns(
    pool: &MySqlPool,
    schema: &str,
    table: &str,
) -> sqlx::Result<Vec<ColumnRow>> {
    sqlx::query_as(COLUMNS_SQL)
        .bind(table)
        .bind(schema)
        .fetch_all(pool)
        .await
}

/// Lists every table in a schema, for the bulk generation path.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] on connection or query
/// failure.
pub async fn list_tables(pool: &MySqlPool, schema: &str) -> sqlx::Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(TABLES_SQL).bind(schema).fetch_all(pool).await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

/// Loads one table's schema and builds the core model.
///
/// # Errors
///
/// Returns [`LoadError::Database`] on query failure and
/// [`LoadError::Codegen`] ([`CodegenError::TableNotFound`]) when the
/// query returns zero columns.
pub async fn load_table(
    pool: &MySqlPool,
    schema: &str,
    table: &str,
    public: bool,
) -> Result<Table, LoadError> {
    let rows = fetch_columns(pool, schema, table).await?;
    let columns = rows.into_iter().map(Column::from).collect();
    Ok(Table::from_columns(table, columns, public)?)
}
