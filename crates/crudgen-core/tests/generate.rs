//! End-to-end generation tests over realistic table shapes.
//!
//! These build tables the way the MySQL loader would and check the
//! emitted Go text: which operations appear, which columns each field
//! list carries, and how keys show up in WHERE clauses.

use crudgen_core::{Column, ColumnDefault, Generator, KeyRole, Table, TypeMap};

fn column(name: &str, data_type: &str) -> Column {
    Column {
        name: name.to_string(),
        data_type: data_type.to_string(),
        column_type: data_type.to_string(),
        nullable: false,
        key: KeyRole::None,
        default: ColumnDefault::None,
        extra: String::new(),
    }
}

fn primary(name: &str, data_type: &str) -> Column {
    Column {
        key: KeyRole::Primary,
        extra: "auto_increment".to_string(),
        ..column(name, data_type)
    }
}

/// `users (id PRI int auto_increment, user_name varchar, created_at
/// timestamp DEFAULT CURRENT_TIMESTAMP)`
fn users_table(public: bool) -> Table {
    let columns = vec![
        primary("id", "int"),
        column("user_name", "varchar"),
        Column {
            default: ColumnDefault::CurrentTimestamp,
            ..column("created_at", "timestamp")
        },
    ];
    Table::from_columns("users", columns, public).unwrap()
}

/// `role_users (role_id PRI int, user_id PRI int)`
fn role_users_table() -> Table {
    let columns = vec![
        Column {
            key: KeyRole::Primary,
            ..column("role_id", "int")
        },
        Column {
            key: KeyRole::Primary,
            ..column("user_id", "int")
        },
    ];
    Table::from_columns("role_users", columns, true).unwrap()
}

#[test]
fn single_key_table_emits_create_update_delete_read() {
    let table = users_table(true);
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("func (st *User)Create(ldb *sqlx.DB) error {"));
    assert!(crud.contains("func (st *User)Update(ldb *sqlx.DB) error {"));
    assert!(crud.contains("func (st *User)Delete(ldb *sqlx.DB) error {"));
    assert!(crud.contains("func (st *User)Read(ldb *sqlx.DB) error {"));
    assert!(!crud.contains("Set("));
    assert!(!crud.contains("Remove("));
}

#[test]
fn create_excludes_key_and_generated_columns() {
    let table = users_table(true);
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    // The INSERT field list is user_name alone: id comes back from
    // LastInsertId, created_at is filled by the database.
    assert!(crud.contains("\tINSERT INTO users\n\t(user_name)\n\tVALUES\n\t(:user_name)\n"));
    assert!(crud.contains("\tst.Id, err = res.LastInsertId()\n"));
}

#[test]
fn update_excludes_key_and_generated_columns() {
    let table = users_table(true);
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("\tUPDATE users SET\n\t\tuser_name = ?\n\tWHERE id = :id\n"));
    assert!(!crud.contains("created_at = ?"));
}

#[test]
fn delete_and_read_key_on_the_primary_key() {
    let table = users_table(true);
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("\tsqlstr := \"DELETE FROM users WHERE id = ?\"\n"));
    assert!(crud.contains("\tSELECT id, user_name, created_at\n\tFROM users\n\tWHERE id = ?\n"));
    assert!(crud.contains("\treturn ldb.Get(st, sqlstr, st.Id)\n"));
}

#[test]
fn composite_key_table_emits_set_remove_read() {
    let table = role_users_table();
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("func (st *RoleUser)Set(ldb *sqlx.DB) error {"));
    assert!(crud.contains("func (st *RoleUser)Remove(ldb *sqlx.DB) error {"));
    assert!(crud.contains("func (st *RoleUser)Read(ldb *sqlx.DB) error {"));
    assert!(!crud.contains("Update"));
    assert!(!crud.contains("Create"));
}

#[test]
fn set_inserts_every_non_generated_column_including_keys() {
    let table = role_users_table();
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("\tINSERT INTO role_users\n\t(role_id, user_id)\n"));
    assert!(crud.contains("\t(:role_id, :user_id)\n"));
    // Plain insert semantics: no upsert clause.
    assert!(!crud.contains("ON DUPLICATE KEY"));
}

#[test]
fn remove_keys_on_the_conjunction_of_all_primary_keys() {
    let table = role_users_table();
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("\tDELETE FROM role_users WHERE\n\trole_id = ? AND\n\tuser_id = ?\n"));
    assert!(crud.contains("\t_, err := ldb.Exec(sqlstr, st.RoleID, st.UserID)\n"));
}

#[test]
fn composite_read_keys_on_the_conjunction_of_all_primary_keys() {
    let table = role_users_table();
    let types = TypeMap::new();
    let crud = Generator::new(&table, &types).gen_crud();

    assert!(crud.contains("\tWHERE role_id = ? AND user_id = ?\n"));
    assert!(crud.contains("\treturn ldb.Get(st, sqlstr, st.RoleID, st.UserID)\n"));
}

#[test]
fn keyless_table_generates_nothing() {
    let columns = vec![column("event", "varchar"), column("payload", "blob")];
    let table = Table::from_columns("audit_log", columns, true).unwrap();
    let types = TypeMap::new();
    assert_eq!(Generator::new(&table, &types).gen_crud(), "");
}

#[test]
fn struct_reflects_nullability_and_temporal_types() {
    let columns = vec![
        primary("id", "bigint"),
        Column {
            nullable: true,
            ..column("nickname", "varchar")
        },
        Column {
            default: ColumnDefault::CurrentTimestamp,
            ..column("created_at", "timestamp")
        },
    ];
    let table = Table::from_columns("accounts", columns, true).unwrap();
    let types = TypeMap::new();
    let generator = Generator::new(&table, &types);

    let code = generator.go_struct();
    assert!(code.contains("\tId int64 `db:\"id\"`\n"));
    assert!(code.contains("\tNickname sql.NullString `db:\"nickname\"`\n"));
    assert!(code.contains("\tCreatedAt time.Time `db:\"created_at\"`\n"));

    let imports = generator.go_imports();
    assert_eq!(imports, "import (\n\t\"database/sql\"\n\t\"time\"\n)\n");
}

#[test]
fn null_package_selector_flows_into_the_struct() {
    let columns = vec![
        primary("id", "bigint"),
        Column {
            nullable: true,
            ..column("score", "decimal")
        },
    ];
    let table = Table::from_columns("scores", columns, true).unwrap();
    let types = TypeMap::with_null_package("null");
    let code = Generator::new(&table, &types).go_struct();
    assert!(code.contains("\tScore null.NullFloat64 `db:\"score\"`\n"));
}
