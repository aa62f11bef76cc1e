use serde::{Deserialize, Serialize};

/// Fila de la tabla `notifications`. Append-only: este servicio nunca
/// actualiza ni borra lo registrado.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NotificationRecord {
    pub id: String,
    pub customer_id: String,
    pub vehicle_id: String,
    pub method: String, // "email", "sms", "whatsapp", "none"
    pub message: String,
    pub status: String, // "sent", "failed"
    pub external_id: Option<String>,
    pub created_at: String,
}

/// Datos para insertar una notificación; id y created_at los pone el servicio.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub customer_id: String,
    pub vehicle_id: String,
    pub method: String,
    pub message: String,
    pub status: String,
    pub external_id: Option<String>,
}

/// Resultado por tupla que se devuelve al caller del batch.
#[derive(Debug, Clone, Serialize)]
pub struct ReminderOutcome {
    pub customer: String,
    pub vehicle: String,
    pub method: String,
    pub success: bool,
}

/// Resultado global de una corrida del batch.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub message: String,
    pub results: Vec<ReminderOutcome>,
}

/// Para listar notificaciones con paginación
#[derive(Debug, Clone, Serialize)]
pub struct ListNotificationsResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub items: Vec<NotificationRecord>,
}
