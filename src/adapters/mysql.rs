use crate::config::DbConfig;
use crate::domain::model::InsertStatement;
use crate::domain::ports::PayloadStore;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

/// Opens a fresh connection for every save.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    options: MySqlConnectOptions,
}

impl MySqlStore {
    pub fn new(db: &DbConfig) -> Self {
        Self {
            options: connect_options(db),
        }
    }
}

/// Only the settings that were supplied are applied; the rest keep the
/// driver defaults.
pub fn connect_options(db: &DbConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new();
    if let Some(host) = &db.host {
        options = options.host(host);
    }
    if let Some(port) = db.port {
        options = options.port(port);
    }
    if let Some(user) = &db.user {
        options = options.username(user);
    }
    if let Some(password) = &db.password {
        options = options.password(password);
    }
    if let Some(database) = &db.database {
        options = options.database(database);
    }
    options
}

#[async_trait]
impl PayloadStore for MySqlStore {
    async fn save(&self, statement: &InsertStatement) -> Result<()> {
        let mut conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(RelayError::DbConnectionError)?;

        let [first, second] = &statement.params;
        let outcome = sqlx::query(statement.sql)
            .bind(first)
            .bind(second)
            .execute(&mut conn)
            .await;

        if let Err(e) = conn.close().await {
            tracing::debug!("Closing database connection failed: {}", e);
        }

        let done = outcome.map_err(RelayError::QueryError)?;
        tracing::debug!("Insert affected {} rows", done.rows_affected());
        Ok(())
    }
}
