use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::{
    config::reminder_config::ReminderConfig, services::reminder_service::ReminderService,
};

/// POST /api/reminders/send-monthly
/// Disparado por el cron externo; protegido con el header x-cron-secret.
pub async fn send_monthly_reminders_endpoint(
    req: HttpRequest,
    reminder_service: web::Data<ReminderService>,
    config: web::Data<ReminderConfig>,
) -> HttpResponse {
    let secret = req
        .headers()
        .get("x-cron-secret")
        .and_then(|v| v.to_str().ok());

    if secret != Some(config.cron_secret.as_str()) {
        return HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized" }));
    }

    match reminder_service.send_monthly_reminders().await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            log::error!("Errore invio promemoria: {:?}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Errore interno" }))
        }
    }
}
