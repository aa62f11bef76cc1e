//! services/sms_service.rs
//! Senders de SMS y WhatsApp contra la API REST estilo Twilio.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::reminder_config::TwilioConfig,
    services::channel_sender::{ChannelSender, SendOutcome},
};

/// Sender de SMS. En modo WhatsApp se antepone el prefijo "whatsapp:" al
/// emisor y al destinatario, que es como la API distingue ambos canales.
pub struct SmsSender {
    http_client: Client,
    api_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
    whatsapp_mode: bool,
}

impl SmsSender {
    pub fn sms(config: &TwilioConfig) -> Self {
        Self::build(config, false)
    }

    pub fn whatsapp(config: &TwilioConfig) -> Self {
        Self::build(config, true)
    }

    fn build(config: &TwilioConfig, whatsapp_mode: bool) -> Self {
        SmsSender {
            http_client: Client::new(),
            api_url: config.api_url.clone(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.phone_number.clone(),
            whatsapp_mode,
        }
    }

    fn address(&self, number: &str) -> String {
        if self.whatsapp_mode {
            format!("whatsapp:{}", number)
        } else {
            number.to_string()
        }
    }
}

#[async_trait]
impl ChannelSender for SmsSender {
    async fn send(&self, recipient: &str, body: &str) -> Result<SendOutcome> {
        let send_url = format!(
            "{}/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        );
        let params = [
            ("To", self.address(recipient)),
            ("From", self.address(&self.from_number)),
            ("Body", body.to_string()),
        ];

        let resp = self
            .http_client
            .post(&send_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .context("Fallo al hacer POST Messages.json")?;

        if !resp.status().is_success() {
            let body_txt = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Error del proveedor de mensajes: {}", body_txt));
        }

        let json_val = resp.json::<serde_json::Value>().await?;
        let provider_id = json_val
            .get("sid")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Ok(SendOutcome { provider_id })
    }
}
