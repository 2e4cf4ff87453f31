//! Declared schema and the startup bootstrap that creates missing tables.
//! Existing tables are never dropped or altered; drift goes unnoticed.

use crate::error::AppError;
use sqlx::PgPool;

#[derive(Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
    pub indexed: bool,
}

#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

pub const USERS: TableDef = TableDef {
    name: "users",
    columns: &[
        ColumnDef {
            name: "id",
            sql_type: "SERIAL",
            nullable: false,
            primary_key: true,
            indexed: true,
        },
        ColumnDef {
            name: "name",
            sql_type: "VARCHAR",
            nullable: true,
            primary_key: false,
            indexed: false,
        },
        ColumnDef {
            name: "email",
            sql_type: "VARCHAR",
            nullable: true,
            primary_key: false,
            indexed: false,
        },
    ],
};

/// Every table the service owns, in creation order.
pub const SCHEMA: &[&TableDef] = &[&USERS];

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn create_table_sql(table: &TableDef) -> String {
    let mut col_defs: Vec<String> = Vec::new();
    for c in table.columns {
        let mut def = format!("{} {}", quote(c.name), c.sql_type);
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        col_defs.push(def);
    }
    let pk_cols: Vec<String> = table
        .columns
        .iter()
        .filter(|c| c.primary_key)
        .map(|c| quote(c.name))
        .collect();
    if !pk_cols.is_empty() {
        col_defs.push(format!("PRIMARY KEY ({})", pk_cols.join(", ")));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(table.name),
        col_defs.join(",\n  ")
    )
}

/// One `CREATE INDEX IF NOT EXISTS ix_<table>_<column>` per indexed column.
pub fn create_index_sql(table: &TableDef) -> Vec<String> {
    table
        .columns
        .iter()
        .filter(|c| c.indexed)
        .map(|c| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                quote(&format!("ix_{}_{}", table.name, c.name)),
                quote(table.name),
                quote(c.name)
            )
        })
        .collect()
}

/// Create every declared table and index that does not exist yet. Safe to run on every start.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for table in SCHEMA {
        sqlx::query(&create_table_sql(table)).execute(pool).await?;
        for sql in create_index_sql(table) {
            sqlx::query(&sql).execute(pool).await?;
        }
        tracing::info!(table = table.name, "table ensured");
    }
    Ok(())
}
