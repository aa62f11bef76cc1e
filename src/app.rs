//! app.rs
use crate::handlers::{notification_handler, reminder_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                // web::resource responde 405 solo ante métodos distintos de POST
                web::resource("/reminders/send-monthly")
                    .route(web::post().to(reminder_handler::send_monthly_reminders_endpoint)),
            )
            .service(
                web::scope("/notifications").route(
                    "",
                    web::get().to(notification_handler::list_notifications_endpoint),
                ),
            ),
    );
}
