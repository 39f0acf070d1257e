//! Go source assembly for a loaded table.
//!
//! Direct string building, no template engine: a struct block, an import
//! block, and CRUD function stubs. Which stubs are emitted depends on
//! primary-key cardinality: a single key gets Create/Update/Delete/Read,
//! a composite key gets Set/Remove/Read, and a keyless table gets
//! nothing (no safe per-row identifier exists).
//!
//! Emitted queries use the exact schema-cased table and column names.
//! Columns the database fills on write (`CURRENT_TIMESTAMP` defaults)
//! are left out of insert and update field lists but still selected on
//! read.

use std::collections::BTreeSet;

use crate::gotype::TypeMap;
use crate::ident::go_ident;
use crate::schema::Table;

/// Default Go type of the generated database-handle parameter.
pub const DEFAULT_DB_HANDLE: &str = "*sqlx.DB";

/// Generates Go source text for one table.
///
/// Borrows the loaded [`Table`] and a configured [`TypeMap`]; the handle
/// parameter types are overridable for codebases that wrap their pools.
pub struct Generator<'a> {
    table: &'a Table,
    types: &'a TypeMap,
    db_read: String,
    db_write: String,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default `*sqlx.DB` handle types.
    #[must_use]
    pub fn new(table: &'a Table, types: &'a TypeMap) -> Self {
        Self {
            table,
            types,
            db_read: DEFAULT_DB_HANDLE.to_string(),
            db_write: DEFAULT_DB_HANDLE.to_string(),
        }
    }

    /// Overrides the Go types of the read and write handle parameters.
    #[must_use]
    pub fn with_db_handles(mut self, read: &str, write: &str) -> Self {
        self.db_read = read.to_string();
        self.db_write = write.to_string();
        self
    }

    /// Returns the Go struct definition, one field per column with a
    /// `db:` tag carrying the exact schema column name.
    #[must_use]
    pub fn go_struct(&self) -> String {
        let name = self.table.struct_name();
        let mut out = format!("// {name} is a database struct\n");
        out.push_str(&format!("type {name} struct {{\n"));
        for col in self.table.columns() {
            let field = go_ident(&col.name);
            let ty = self.types.go_type(&col.data_type, col.nullable);
            out.push_str(&format!("\t{} {} `db:\"{}\"`\n", field, ty.name, col.name));
        }
        out.push_str("}\n");
        out
    }

    /// Returns the Go import block required by the struct fields, or an
    /// empty string when no import is needed.
    #[must_use]
    pub fn go_imports(&self) -> String {
        let mut paths = BTreeSet::new();
        for col in self.table.columns() {
            let ty = self.types.go_type(&col.data_type, col.nullable);
            paths.extend(ty.imports);
        }
        if paths.is_empty() {
            return String::new();
        }
        let mut out = String::from("import (\n");
        for path in paths {
            out.push_str(&format!("\t\"{path}\"\n"));
        }
        out.push_str(")\n");
        out
    }

    /// Generates the CRUD stubs for the table.
    ///
    /// Zero primary keys produce empty output. The generator does not
    /// validate the table beyond that: unusual metadata yields
    /// structurally complete but possibly degenerate stubs, and
    /// validating the schema is the caller's job.
    #[must_use]
    pub fn gen_crud(&self) -> String {
        match self.table.primary_key_count() {
            0 => String::new(),
            1 => {
                let mut out = String::new();
                out.push_str(&self.gen_create());
                out.push_str(&self.gen_update());
                out.push_str(&self.gen_delete());
                out.push_str(&self.gen_read());
                out
            }
            _ => {
                let mut out = String::new();
                out.push_str(&self.gen_set());
                out.push_str(&self.gen_remove());
                out.push_str(&self.gen_read());
                out
            }
        }
    }

    /// Exported or unexported Go method name, per the table's visibility.
    fn method_name(&self, exported: &str) -> String {
        if self.table.is_public() {
            exported.to_string()
        } else {
            exported.to_lowercase()
        }
    }

    fn func_header(&self, doc: &str, exported: &str, handle: &str) -> String {
        format!(
            "// {doc}\nfunc (st *{}){}(ldb {}) error {{\n",
            self.table.struct_name(),
            self.method_name(exported),
            handle
        )
    }

    // Single-key insert: the key is omitted from the field list and
    // filled in from the insert identifier afterwards.
    fn gen_create(&self) -> String {
        let mut fields = Vec::new();
        let mut binds = Vec::new();
        let mut key = String::new();
        for col in self.table.columns() {
            if col.is_primary() {
                key = go_ident(&col.name);
            } else if !col.generated_on_write() {
                fields.push(col.name.clone());
                binds.push(format!(":{}", col.name));
            }
        }
        let mut out = self.func_header("Create will create a record", "Create", &self.db_write);
        out.push_str("\tsqlstr := `\n");
        out.push_str(&format!("\tINSERT INTO {}\n", self.table.name()));
        out.push_str(&format!("\t({})\n", fields.join(", ")));
        out.push_str("\tVALUES\n");
        out.push_str(&format!("\t({})\n", binds.join(", ")));
        out.push_str("\t`\n");
        out.push_str("\tres, err := ldb.NamedExec(sqlstr, st)\n");
        out.push_str("\tif err != nil {\n");
        out.push_str("\t\treturn err\n");
        out.push_str("\t}\n");
        out.push_str(&format!("\tst.{key}, err = res.LastInsertId()\n"));
        out.push_str("\treturn err\n");
        out.push_str("}\n");
        out
    }

    fn gen_update(&self) -> String {
        let mut sets = Vec::new();
        let mut args = Vec::new();
        let mut key = String::new();
        for col in self.table.columns() {
            if col.is_primary() {
                key = col.name.clone();
            } else if !col.generated_on_write() {
                sets.push(format!("\t\t{} = ?", col.name));
                args.push(format!("st.{}", go_ident(&col.name)));
            }
        }
        let mut out = self.func_header("Update will update a record", "Update", &self.db_write);
        out.push_str("\tsqlstr := `\n");
        out.push_str(&format!("\tUPDATE {} SET\n", self.table.name()));
        out.push_str(&sets.join(",\n"));
        out.push('\n');
        out.push_str(&format!("\tWHERE {key} = :{key}\n"));
        out.push_str("\t`\n");
        out.push_str(&format!("\t_, err := ldb.Exec(sqlstr, {})\n", args.join(", ")));
        out.push_str("\treturn err\n");
        out.push_str("}\n");
        out
    }

    fn gen_delete(&self) -> String {
        let mut key = String::new();
        let mut go_key = String::new();
        for col in self.table.columns() {
            if col.is_primary() {
                key = col.name.clone();
                go_key = go_ident(&col.name);
            }
        }
        let mut out = self.func_header("Delete will delete a record", "Delete", &self.db_write);
        out.push_str(&format!(
            "\tsqlstr := \"DELETE FROM {} WHERE {} = ?\"\n",
            self.table.name(),
            key
        ));
        out.push_str(&format!("\t_, err := ldb.Exec(sqlstr, st.{go_key})\n"));
        out.push_str("\treturn err\n");
        out.push_str("}\n");
        out
    }

    // Composite-key insert. Keys are part of the field list; the emitted
    // SQL is a plain INSERT with no ON DUPLICATE KEY clause.
    fn gen_set(&self) -> String {
        let mut fields = Vec::new();
        let mut binds = Vec::new();
        for col in self.table.columns() {
            if !col.generated_on_write() {
                fields.push(col.name.clone());
                binds.push(format!(":{}", col.name));
            }
        }
        let mut out = self.func_header("Set will create a record", "Set", &self.db_write);
        out.push_str("\tsqlstr := `\n");
        out.push_str(&format!("\tINSERT INTO {}\n", self.table.name()));
        out.push_str(&format!("\t({})\n", fields.join(", ")));
        out.push_str("\tVALUES\n");
        out.push_str(&format!("\t({})\n", binds.join(", ")));
        out.push_str("\t`\n");
        out.push_str("\t_, err := ldb.NamedExec(sqlstr, st)\n");
        out.push_str("\treturn err\n");
        out.push_str("}\n");
        out
    }

    fn gen_remove(&self) -> String {
        let mut preds = Vec::new();
        let mut args = Vec::new();
        for col in self.table.columns() {
            if col.is_primary() {
                preds.push(format!("\t{} = ?", col.name));
                args.push(format!("st.{}", go_ident(&col.name)));
            }
        }
        let mut out = self.func_header("Remove will delete a record", "Remove", &self.db_write);
        out.push_str("\tsqlstr := `\n");
        out.push_str(&format!("\tDELETE FROM {} WHERE\n", self.table.name()));
        out.push_str(&preds.join(" AND\n"));
        out.push_str("\n\t`\n");
        out.push_str(&format!("\t_, err := ldb.Exec(sqlstr, {})\n", args.join(", ")));
        out.push_str("\treturn err\n");
        out.push_str("}\n");
        out
    }

    // Read selects every column, including generated-on-write defaults.
    fn gen_read(&self) -> String {
        let mut preds = Vec::new();
        let mut args = Vec::new();
        let mut fields = Vec::new();
        for col in self.table.columns() {
            if col.is_primary() {
                preds.push(format!("{} = ?", col.name));
                args.push(format!("st.{}", go_ident(&col.name)));
            }
            fields.push(col.name.clone());
        }
        let mut out = self.func_header("Read will Read a record", "Read", &self.db_read);
        out.push_str(&format!(
            "\tsqlstr := `\n\tSELECT {}\n\tFROM {}\n\tWHERE {}\n\t`\n",
            fields.join(", "),
            self.table.name(),
            preds.join(" AND ")
        ));
        out.push_str(&format!("\treturn ldb.Get(st, sqlstr, {})\n", args.join(", ")));
        out.push_str("}\n");
        out
    }
}
