//! Notification side channel for irrigation alerts
//!
//! Alerts are appended to a table the presentation layer polls; delivery
//! (popups, push) is an external concern.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;

/// Service for the notification log
#[derive(Clone)]
pub struct NotificationService {
    db: PgPool,
}

/// A recorded alert
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NotificationService {
    /// Create a new NotificationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record an alert
    pub async fn record(&self, title: &str, message: &str) -> AppResult<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (title, message)
            VALUES ($1, $2)
            RETURNING id, title, message, created_at
            "#,
        )
        .bind(title)
        .bind(message)
        .fetch_one(&self.db)
        .await?;

        Ok(notification)
    }

    /// Most recent alerts, newest first
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, title, message, created_at
            FROM notifications
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(notifications)
    }
}
