use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::{Pool, Sqlite};

use crate::config::reminder_config::ReminderConfig;
use crate::logger::init_logger;
use crate::services::channel_sender::ChannelSenders;
use crate::services::due_review_service::DueReviewService;
use crate::services::email_service::EmailSender;
use crate::services::notification_log_service::NotificationLogService;
use crate::services::reminder_service::ReminderService;
use crate::services::sms_service::SmsSender;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

async fn setup_database(database_path: &str) -> Pool<Sqlite> {
    // Crear la carpeta contenedora si hace falta
    if let Some(parent) = std::path::Path::new(database_path).parent() {
        std::fs::create_dir_all(parent).expect("No se pudo crear el directorio de datos");
    }

    // mode=rwc crea el archivo en el primer arranque
    let db_url = format!("sqlite:{}?mode=rwc", database_path);
    log::info!("Conectando a SQLite en {}", db_url);

    let db_pool = Pool::<Sqlite>::connect(&db_url)
        .await
        .expect("No se pudo conectar a la base de datos SQLite.");

    db_pool
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    // Toda la configuración se lee una sola vez acá; los servicios la
    // reciben por parámetro.
    let config = ReminderConfig::from_env().expect("Configuración incompleta");

    let db_pool = setup_database(&config.database_path).await;

    // NotificationLogService corre las migraciones (incluye las tablas del
    // almacén para uso local)
    let log_service = NotificationLogService::new(db_pool.clone());
    if let Err(e) = log_service.run_migrations().await {
        panic!("Fallo en migraciones: {:?}", e);
    }

    let due_service = DueReviewService::new(db_pool.clone());

    // Senders reales, uno por canal
    let email_sender =
        EmailSender::new(&config.smtp).expect("No se pudo inicializar EmailSender");
    let senders = ChannelSenders::new(
        Box::new(email_sender),
        Box::new(SmsSender::sms(&config.twilio)),
        Box::new(SmsSender::whatsapp(&config.twilio)),
    );

    let reminder_service = web::Data::new(ReminderService::new(
        due_service,
        log_service.clone(),
        senders,
    ));
    let log_service_data = web::Data::new(log_service);
    let config_data = web::Data::new(config);

    // Levantar servidor
    log::info!("Levantando servidor en 0.0.0.0:5023");
    HttpServer::new(move || {
        App::new()
            .app_data(reminder_service.clone())
            .app_data(log_service_data.clone())
            .app_data(config_data.clone())
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", 5023))?
    .run()
    .await
}
