//! services/email_service.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::reminder_config::SmtpConfig,
    services::channel_sender::{ChannelSender, SendOutcome},
};

/// Asunto fijo de los recordatorios por correo.
const REMINDER_SUBJECT: &str = "Promemoria revisione auto";

/// Sender de email vía SMTP. El transporte se arma una sola vez con la
/// configuración; cada send construye el mensaje para su destinatario.
pub struct EmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    subject: String,
}

impl EmailSender {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let from: Mailbox = config.from.parse().context("SMTP_FROM inválido")?;

        let tls_params = TlsParameters::new(config.host.clone())?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .tls(Tls::Required(tls_params))
            .build();

        Ok(EmailSender {
            mailer,
            from,
            subject: REMINDER_SUBJECT.to_string(),
        })
    }
}

#[async_trait]
impl ChannelSender for EmailSender {
    async fn send(&self, recipient: &str, body: &str) -> Result<SendOutcome> {
        let to: Mailbox = recipient.parse().context("Invalid recipient address")?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        tokio::time::timeout(std::time::Duration::from_secs(30), self.mailer.send(message))
            .await??;

        // SMTP no devuelve un id de mensaje utilizable
        Ok(SendOutcome { provider_id: None })
    }
}
