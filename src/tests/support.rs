//! tests/support.rs
//! Utilidades compartidas por las pruebas: pool en memoria, fixtures y un
//! sender de mentira que registra lo que se le pide enviar.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use crate::models::notification_model::NotificationRecord;
use crate::services::channel_sender::{ChannelSender, ChannelSenders, SendOutcome};
use crate::services::due_review_service::DueReviewService;
use crate::services::notification_log_service::NotificationLogService;
use crate::services::reminder_service::ReminderService;

/// Pool SQLite en memoria con las migraciones reales aplicadas.
/// Una sola conexión: cada conexión :memory: sería una base distinta.
pub async fn test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("No se pudo abrir SQLite en memoria");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Fallaron las migraciones de prueba");

    pool
}

pub async fn insert_workshop(
    pool: &Pool<Sqlite>,
    id: &str,
    name: &str,
    phone: &str,
    email_message: Option<&str>,
    sms_message: Option<&str>,
    whatsapp_message: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO workshops (id, name, phone_number, email_message, sms_message, whatsapp_message)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(phone)
    .bind(email_message)
    .bind(sms_message)
    .bind(whatsapp_message)
    .execute(pool)
    .await
    .expect("Fallo al insertar workshop");
}

pub async fn insert_customer(
    pool: &Pool<Sqlite>,
    id: &str,
    full_name: &str,
    email: Option<&str>,
    phone_number: Option<&str>,
    contact_method: &str,
    workshop_id: &str,
) {
    sqlx::query(
        r#"
        INSERT INTO customers (id, full_name, email, phone_number, contact_method, workshop_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(id)
    .bind(full_name)
    .bind(email)
    .bind(phone_number)
    .bind(contact_method)
    .bind(workshop_id)
    .execute(pool)
    .await
    .expect("Fallo al insertar customer");
}

pub async fn insert_vehicle(
    pool: &Pool<Sqlite>,
    id: &str,
    plate_number: &str,
    owner_id: &str,
    workshop_id: &str,
    review_due_date: &str,
    next_appointment_id: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO vehicles (id, plate_number, owner_id, workshop_id, review_due_date, next_appointment_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(id)
    .bind(plate_number)
    .bind(owner_id)
    .bind(workshop_id)
    .bind(review_due_date)
    .bind(next_appointment_id)
    .execute(pool)
    .await
    .expect("Fallo al insertar vehicle");
}

pub async fn fetch_notifications(pool: &Pool<Sqlite>) -> Vec<NotificationRecord> {
    sqlx::query_as::<_, NotificationRecord>(
        r#"
        SELECT id, customer_id, vehicle_id, method,
               message, status, external_id, created_at
        FROM notifications
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
    .expect("Fallo al leer notifications")
}

/// Arma un ReminderService completo sobre el pool dado.
pub fn reminder_service_with(pool: &Pool<Sqlite>, senders: ChannelSenders) -> ReminderService {
    ReminderService::new(
        DueReviewService::new(pool.clone()),
        NotificationLogService::new(pool.clone()),
        senders,
    )
}

/// Lista de (destinatario, cuerpo) que recibió un MockSender.
pub type SentCalls = Arc<Mutex<Vec<(String, String)>>>;

/// Sender de prueba: registra los envíos y devuelve el resultado configurado.
pub struct MockSender {
    calls: SentCalls,
    fail: bool,
    provider_id: Option<String>,
}

impl MockSender {
    pub fn ok(provider_id: Option<&str>) -> (Self, SentCalls) {
        let calls: SentCalls = Arc::new(Mutex::new(Vec::new()));
        (
            MockSender {
                calls: calls.clone(),
                fail: false,
                provider_id: provider_id.map(|s| s.to_string()),
            },
            calls,
        )
    }

    pub fn failing() -> (Self, SentCalls) {
        let calls: SentCalls = Arc::new(Mutex::new(Vec::new()));
        (
            MockSender {
                calls: calls.clone(),
                fail: true,
                provider_id: None,
            },
            calls,
        )
    }
}

#[async_trait]
impl ChannelSender for MockSender {
    async fn send(&self, recipient: &str, body: &str) -> Result<SendOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((recipient.to_string(), body.to_string()));

        if self.fail {
            Err(anyhow!("proveedor caído"))
        } else {
            Ok(SendOutcome {
                provider_id: self.provider_id.clone(),
            })
        }
    }
}
