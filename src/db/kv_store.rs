//! String-keyed store holding the persisted roster and viewer identity.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::EventRecord;
use crate::roster::sample_events;

/// Key holding the JSON-encoded roster.
pub const EVENTS_KEY: &str = "spark-run-events-v1";
/// Key holding the viewer's display name.
pub const VIEWER_KEY: &str = "spark-run-me";

#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ==================== ROSTER ====================

    /// Read the stored roster. A missing or unreadable value yields the
    /// sample roster instead of an error.
    pub async fn load_events(&self) -> Result<Vec<EventRecord>, AppError> {
        let Some(raw) = self.get(EVENTS_KEY).await? else {
            tracing::info!("No stored roster, starting from sample data");
            return Ok(sample_events());
        };

        match serde_json::from_str::<Vec<EventRecord>>(&raw) {
            Ok(events) => Ok(events),
            Err(e) => {
                tracing::warn!("Stored roster is unreadable, using sample data: {}", e);
                Ok(sample_events())
            }
        }
    }

    pub async fn save_events(&self, events: &[EventRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string(events)?;
        self.set(EVENTS_KEY, &json).await
    }

    pub async fn clear_events(&self) -> Result<(), AppError> {
        self.remove(EVENTS_KEY).await
    }

    // ==================== VIEWER ====================

    pub async fn load_viewer(&self) -> Result<String, AppError> {
        Ok(self.get(VIEWER_KEY).await?.unwrap_or_default())
    }

    pub async fn save_viewer(&self, name: &str) -> Result<(), AppError> {
        self.set(VIEWER_KEY, name).await
    }
}
