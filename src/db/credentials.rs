// src/db/credentials.rs

//! Persisted bearer credential for the backend API.

use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

pub const AUTH_TOKEN: &str = "auth_token";

pub fn save_token(db: &Database, token: &str) -> Result<(), ServerError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ServerError::BadRequest("token vacío".into()));
    }

    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into credentials (name, token, saved_at)
            values (?1, ?2, ?3)
            on conflict(name) do update set token = excluded.token, saved_at = excluded.saved_at
            "#,
            params![AUTH_TOKEN, token, Utc::now().timestamp()],
        )?;
        Ok(())
    })
}

pub fn load_token(db: &Database) -> Result<Option<String>, ServerError> {
    db.with_conn(|conn| {
        let token = conn
            .query_row(
                "select token from credentials where name = ?1",
                params![AUTH_TOKEN],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(token)
    })
}

pub fn clear_token(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("delete from credentials where name = ?1", params![AUTH_TOKEN])?;
        Ok(())
    })
}
