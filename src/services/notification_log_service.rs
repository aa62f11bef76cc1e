//! services/notification_log_service.rs

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::models::notification_model::{
    ListNotificationsResponse, NewNotification, NotificationRecord,
};

#[derive(Clone)]
pub struct NotificationLogService {
    db_pool: Pool<Sqlite>,
}

impl NotificationLogService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        NotificationLogService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.db_pool).await?;
        Ok(())
    }

    /// Inserta una fila en `notifications`. La tabla es append-only: nunca se
    /// actualiza ni borra lo registrado.
    pub async fn log_notification(&self, entry: NewNotification) -> Result<()> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, customer_id, vehicle_id, method,
                message, status, external_id, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(id)
        .bind(&entry.customer_id)
        .bind(&entry.vehicle_id)
        .bind(&entry.method)
        .bind(&entry.message)
        .bind(&entry.status)
        .bind(&entry.external_id)
        .bind(created_at)
        .execute(&self.db_pool)
        .await
        .context("Fallo al insertar notificación")?;

        Ok(())
    }

    /// Lista notificaciones con paginación, más recientes primero.
    pub async fn list_notifications(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<ListNotificationsResponse> {
        let offset = (page - 1) * page_size;

        // total
        let total_row = sqlx::query("SELECT COUNT(*) as cnt FROM notifications")
            .fetch_one(&self.db_pool)
            .await?;
        let total: i64 = total_row.get("cnt");

        // items
        let items = sqlx::query_as::<_, NotificationRecord>(
            r#"
            SELECT id, customer_id, vehicle_id, method,
                   message, status, external_id, created_at
            FROM notifications
            ORDER BY created_at DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(ListNotificationsResponse {
            total: total as u64,
            page,
            page_size,
            items,
        })
    }
}
