use std::str::FromStr;

use async_trait::async_trait;
use lid_core::domain::SessionRow;
use lid_core::error::{ExtractError, Result};
use lid_core::ports::SessionRepository;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};

/// The one query this tool runs: every jid in the device-session table,
/// unfiltered and unordered.
const SESSION_QUERY: &str = "SELECT jid FROM whatsmeow_device";

/// PostgreSQL implementation of the SessionRepository trait.
///
/// Holds at most one connection, opened by `connect` and released by
/// `close`. Dropping the repository also drops any open connection.
pub struct PostgresSessionRepository {
    database_url: String,
    connection: Option<PgConnection>,
}

impl PostgresSessionRepository {
    /// Creates a new repository for the given connection string. No I/O
    /// happens until `connect`.
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            connection: None,
        }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn connect(&mut self) -> Result<()> {
        // TLS when the server offers it, but certificates are not strictly
        // validated. Session databases on managed hosts commonly present
        // self-signed chains.
        let options = PgConnectOptions::from_str(&self.database_url)
            .map_err(|e| ExtractError::connection(e.to_string()))?
            .ssl_mode(PgSslMode::Prefer);

        let connection = PgConnection::connect_with(&options)
            .await
            .map_err(|e| ExtractError::connection(e.to_string()))?;
        self.connection = Some(connection);
        Ok(())
    }

    async fn fetch_all_jids(&mut self) -> Result<Vec<SessionRow>> {
        let connection = self
            .connection
            .as_mut()
            .ok_or_else(|| ExtractError::query("not connected"))?;

        // NULL jids are read as empty strings and skipped downstream.
        let jids: Vec<Option<String>> = sqlx::query_scalar(SESSION_QUERY)
            .fetch_all(connection)
            .await
            .map_err(|e| ExtractError::query(e.to_string()))?;

        Ok(jids
            .into_iter()
            .map(|jid| SessionRow {
                jid: jid.unwrap_or_default(),
            })
            .collect())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(connection) = self.connection.take() {
            connection
                .close()
                .await
                .map_err(|e| ExtractError::connection(e.to_string()))?;
        }
        Ok(())
    }
}
