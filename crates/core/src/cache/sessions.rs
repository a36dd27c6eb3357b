//! Session result cache operations.
//!
//! Expiry is stored as Unix milliseconds. Expired rows are invisible to reads
//! and are deleted by [`CacheDb::purge_expired_sessions`].

use std::time::Duration;

use super::connection::CacheDb;
use crate::Error;
use crate::results::ResultSet;
use crate::session::SessionId;
use crate::store::SessionStore;
use chrono::Utc;
use tokio_rusqlite::params;

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn ttl_millis(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
}

impl CacheDb {
    /// Get the raw JSON stored for a session, if it has not expired.
    pub async fn get_session_json(&self, session_id: &str) -> Result<Option<String>, Error> {
        let session_id = session_id.to_string();
        let now = now_millis();
        self.conn
            .call(move |conn| -> Result<Option<String>, Error> {
                let mut stmt = conn
                    .prepare("SELECT results_json FROM session_results WHERE session_id = ?1 AND expires_at > ?2")?;

                let result = stmt.query_row(params![session_id, now], |row| row.get(0));

                match result {
                    Ok(json) => Ok(Some(json)),
                    Err(tokio_rusqlite::rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)
    }

    /// Insert or replace the JSON stored for a session.
    ///
    /// Uses UPSERT semantics: the payload and expiry are both overwritten.
    pub async fn put_session_json(&self, session_id: &str, results_json: &str, ttl: Duration) -> Result<(), Error> {
        let session_id = session_id.to_string();
        let results_json = results_json.to_string();

        let stored_at = now_millis();
        let expires_at = stored_at.saturating_add(ttl_millis(ttl));

        self.conn
            .call(move |conn| -> Result<(), Error> {
                conn.execute(
                    "INSERT INTO session_results (session_id, results_json, stored_at, expires_at)
                    VALUES (?1, ?2, ?3, ?4)
                    ON CONFLICT(session_id) DO UPDATE SET
                        results_json = excluded.results_json,
                        stored_at = excluded.stored_at,
                        expires_at = excluded.expires_at",
                    params![session_id, results_json, stored_at, expires_at],
                )?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    /// Expiry of a session entry in Unix milliseconds, expired or not.
    pub async fn session_expires_at(&self, session_id: &str) -> Result<Option<i64>, Error> {
        let session_id = session_id.to_string();
        self.conn
            .call(move |conn| -> Result<Option<i64>, Error> {
                let result = conn.query_row(
                    "SELECT expires_at FROM session_results WHERE session_id = ?1",
                    params![session_id],
                    |row| row.get(0),
                );

                match result {
                    Ok(expires_at) => Ok(Some(expires_at)),
                    Err(tokio_rusqlite::rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)
    }

    /// Delete expired session entries.
    ///
    /// Returns the number of deleted entries.
    pub async fn purge_expired_sessions(&self) -> Result<u64, Error> {
        let now = now_millis();
        self.conn
            .call(move |conn| -> Result<u64, Error> {
                let count = conn.execute("DELETE FROM session_results WHERE expires_at <= ?1", params![now])?;
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }
}

#[async_trait::async_trait]
impl SessionStore for CacheDb {
    async fn put(&self, id: &SessionId, results: &ResultSet, ttl: Duration) -> Result<(), Error> {
        let json = serde_json::to_string(results)?;
        self.put_session_json(id.as_str(), &json, ttl).await
    }

    async fn get(&self, id: &SessionId) -> Result<Option<ResultSet>, Error> {
        let Some(json) = self.get_session_json(id.as_str()).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<ResultSet>(&json) {
            Ok(results) => Ok(Some(results)),
            Err(e) => {
                tracing::warn!(session_id = %id, "discarding undecodable session entry: {}", e);
                Ok(None)
            }
        }
    }
}
