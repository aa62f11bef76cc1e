//! config/reminder_config.rs
//! Configuración del servicio leída del entorno (.env en desarrollo).

use anyhow::{Context, Result};
use std::env;

/// Configuración global del servicio de recordatorios.
/// Se construye una sola vez en `main` y se inyecta en handlers y senders;
/// nada lee variables de entorno después del arranque.
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Secreto compartido del header `x-cron-secret`
    pub cron_secret: String,
    /// Ruta del archivo SQLite
    pub database_path: String,
    pub smtp: SmtpConfig,
    pub twilio: TwilioConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    /// Remitente, p.ej. "Officina <noreply@tuosito.it>"
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Base de la API REST; se sobreescribe en entornos de prueba
    pub api_url: String,
    pub account_sid: String,
    pub auth_token: String,
    /// Número emisor; con prefijo whatsapp: cuando el canal es WhatsApp
    pub phone_number: String,
}

impl ReminderConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ReminderConfig {
            cron_secret: env::var("CRON_SECRET").context("No se definió CRON_SECRET")?,
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/reminders.db".to_string()),
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").context("No se definió SMTP_HOST")?,
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .context("SMTP_PORT debe ser un puerto válido")?,
                user: env::var("SMTP_USER").context("No se definió SMTP_USER")?,
                pass: env::var("SMTP_PASS").context("No se definió SMTP_PASS")?,
                from: env::var("SMTP_FROM").context("No se definió SMTP_FROM")?,
            },
            twilio: TwilioConfig {
                api_url: env::var("TWILIO_API_URL")
                    .unwrap_or_else(|_| "https://api.twilio.com/2010-04-01".to_string()),
                account_sid: env::var("TWILIO_ACCOUNT_SID")
                    .context("No se definió TWILIO_ACCOUNT_SID")?,
                auth_token: env::var("TWILIO_AUTH_TOKEN")
                    .context("No se definió TWILIO_AUTH_TOKEN")?,
                phone_number: env::var("TWILIO_PHONE_NUMBER")
                    .context("No se definió TWILIO_PHONE_NUMBER")?,
            },
        })
    }
}
