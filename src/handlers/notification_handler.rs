use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::services::notification_log_service::NotificationLogService;

#[derive(Deserialize)]
pub struct PaginationQuery {
    page: Option<u64>,
    page_size: Option<u64>,
}

/// GET /api/notifications
pub async fn list_notifications_endpoint(
    log_service: web::Data<NotificationLogService>,
    query: web::Query<PaginationQuery>,
) -> HttpResponse {
    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(10);

    match log_service.list_notifications(page, page_size).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "error": "Internal server error",
            "details": format!("{:?}", e)
        })),
    }
}
