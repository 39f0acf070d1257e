//! MySQL type category → Go type mapping.
//!
//! The scalar table collapses MySQL's type zoo into five Go types;
//! anything unrecognized falls back to `[]byte`, which is safe for
//! arbitrary bytes. Nullable columns swap the scalar for its
//! `database/sql` null wrapper, or a wrapper from a different package
//! when one is configured (e.g. `null` from guregu/null).

/// A resolved Go type for a column, plus the imports it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoType {
    /// Go type name as it appears on the generated struct field.
    pub name: String,
    /// Import paths the field drags into the generated file.
    pub imports: Vec<&'static str>,
}

/// Maps MySQL column type categories to Go types.
///
/// The null-wrapper package is fixed at construction and applies to the
/// whole generation run; nothing here is process-global, so concurrent
/// runs with different packages are safe.
#[derive(Debug, Clone)]
pub struct TypeMap {
    null_package: String,
}

impl TypeMap {
    /// A mapper using the standard library wrappers (`sql.NullInt64`
    /// and friends).
    #[must_use]
    pub fn new() -> Self {
        Self::with_null_package("sql")
    }

    /// A mapper whose four null wrappers (`NullFloat64`, `NullInt64`,
    /// `NullString`, `NullTime`) come from `package`.
    #[must_use]
    pub fn with_null_package(package: &str) -> Self {
        Self {
            null_package: package.to_string(),
        }
    }

    /// Resolves a column's Go type.
    ///
    /// `data_type` is the coarse `DATA_TYPE` category ("bigint",
    /// "varchar", ...), not the full column type. Nullable columns get
    /// the wrapper type and the `database/sql` import; `[]byte` is
    /// already nil-able and stays bare. Temporal categories require the
    /// `time` import whether or not they end up wrapped.
    #[must_use]
    pub fn go_type(&self, data_type: &str, nullable: bool) -> GoType {
        let scalar = scalar_type(data_type);
        let mut imports = Vec::new();
        let mut name = scalar.to_string();
        if nullable {
            imports.push("database/sql");
            name = match null_wrapper_suffix(scalar) {
                Some(suffix) => format!("{}.{}", self.null_package, suffix),
                None => "[]byte".to_string(),
            };
        }
        if scalar == "time.Time" {
            imports.push("time");
        }
        GoType { name, imports }
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed MySQL category → Go scalar table. Unknown categories map to
/// `[]byte`.
fn scalar_type(data_type: &str) -> &'static str {
    match data_type {
        "int" | "tinyint" | "smallint" | "mediumint" | "bigint" | "year" => "int64",
        "float" | "double" | "real" | "decimal" | "numeric" => "float64",
        "varchar" | "char" | "text" | "tinytext" | "mediumtext" | "longtext" | "enum" | "set" => {
            "string"
        }
        "time" | "timestamp" | "date" | "datetime" => "time.Time",
        // bit, blob variants, binary variants, and everything unknown
        _ => "[]byte",
    }
}

/// Wrapper type name (without package) for a nullable scalar. `[]byte`
/// has none.
fn null_wrapper_suffix(scalar: &str) -> Option<&'static str> {
    match scalar {
        "float64" => Some("NullFloat64"),
        "int64" => Some("NullInt64"),
        "string" => Some("NullString"),
        "time.Time" => Some("NullTime"),
        _ => None,
    }
}
