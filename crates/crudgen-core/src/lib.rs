//! # crudgen-core
//!
//! Turns introspected MySQL table metadata into Go source text: a record
//! struct with `db:` tags and a set of CRUD function stubs.
//!
//! This crate is driver-agnostic and does no I/O. A boundary crate
//! (crudgen-mysql) supplies the [`Column`] metadata; everything here is a
//! pure transformation over it:
//!
//! - [`ident`] derives Go identifiers from schema-cased names
//! - [`plural`] singularizes table names for struct naming
//! - [`gotype`] maps MySQL type categories to Go types and imports
//! - [`schema`] holds the loaded table model and its derived facts
//! - [`codegen`] assembles the output text
//!
//! There are no error paths inside the transformers: unknown type
//! categories fall back to `[]byte`, unmatched words pass through
//! unchanged. Generation always produces syntactically complete text.
//!
//! ## Example
//!
//! ```rust
//! use crudgen_core::{Column, ColumnDefault, Generator, KeyRole, Table, TypeMap};
//!
//! let columns = vec![Column {
//!     name: "id".to_string(),
//!     data_type: "bigint".to_string(),
//!     column_type: "bigint(20)".to_string(),
//!     nullable: false,
//!     key: KeyRole::Primary,
//!     default: ColumnDefault::None,
//!     extra: "auto_increment".to_string(),
//! }];
//! let table = Table::from_columns("users", columns, true).unwrap();
//! let types = TypeMap::new();
//! let generator = Generator::new(&table, &types);
//!
//! assert!(generator.go_struct().starts_with("// User is a database struct"));
//! ```

pub mod codegen;
pub mod error;
pub mod gotype;
pub mod ident;
pub mod plural;
pub mod schema;

pub use codegen::{Generator, DEFAULT_DB_HANDLE};
pub use error::{CodegenError, Result};
pub use gotype::{GoType, TypeMap};
pub use ident::go_ident;
pub use plural::singularize;
pub use schema::{Column, ColumnDefault, KeyRole, Table};
