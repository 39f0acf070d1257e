//! Single-table and bulk generation.

use sqlx::mysql::MySqlPool;
use tracing::{debug, warn};

use crudgen_core::{Generator, TypeMap, DEFAULT_DB_HANDLE};
use crudgen_mysql::{list_tables, load_table};

use crate::error::Result;

/// Options shared by every generation call in one run.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Emit exported (public) Go method names.
    pub public: bool,
    /// Package supplying the four null-wrapper types.
    pub null_package: String,
    /// Go type of the read handle parameter.
    pub db_read: String,
    /// Go type of the write handle parameter.
    pub db_write: String,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            public: false,
            null_package: "sql".to_string(),
            db_read: DEFAULT_DB_HANDLE.to_string(),
            db_write: DEFAULT_DB_HANDLE.to_string(),
        }
    }
}

/// Generates the full text document for one table: import block, struct
/// definition, CRUD stubs.
///
/// # Errors
///
/// Returns [`CliError::Load`](crate::CliError::Load) when the schema
/// cannot be read or the table yields no columns.
pub async fn generate_table(
    pool: &MySqlPool,
    schema: &str,
    table: &str,
    opts: &GenOptions,
) -> Result<String> {
    debug!("loading schema for {schema}.{table}");
    let table = load_table(pool, schema, table, opts.public).await?;
    let types = TypeMap::with_null_package(&opts.null_package);
    let generator = Generator::new(&table, &types).with_db_handles(&opts.db_read, &opts.db_write);

    let mut out = String::new();
    let imports = generator.go_imports();
    if !imports.is_empty() {
        out.push_str(&imports);
        out.push('\n');
    }
    out.push_str(&generator.go_struct());
    out.push('\n');
    out.push_str(&generator.gen_crud());
    Ok(out)
}

/// Outcome of a bulk run: the concatenated output of every table that
/// generated cleanly, plus one `table: message` entry per failure.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Generated text for the tables that succeeded.
    pub code: String,
    /// Per-table failure messages, in listing order.
    pub failures: Vec<String>,
}

/// Generates for every table in the schema, best effort: a failing
/// table is recorded and the run continues with the next one.
///
/// # Errors
///
/// Returns [`CliError::Database`](crate::CliError::Database) only when
/// the table listing itself fails; per-table failures land in the
/// report instead.
pub async fn generate_database(
    pool: &MySqlPool,
    schema: &str,
    opts: &GenOptions,
) -> Result<BatchReport> {
    let tables = list_tables(pool, schema).await?;
    let mut report = BatchReport::default();
    for name in tables {
        match generate_table(pool, schema, &name, opts).await {
            Ok(code) => {
                report.code.push_str(&code);
                report.code.push('\n');
            }
            Err(err) => {
                warn!("skipping {name}: {err}");
                report.failures.push(format!("{name}: {err}"));
            }
        }
    }
    Ok(report)
}
