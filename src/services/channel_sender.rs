//! services/channel_sender.rs
//! Contrato uniforme de envío para los tres canales salientes.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::customer_model::ContactMethod;

/// Resultado de un envío aceptado por el proveedor.
#[derive(Debug, Clone, Default)]
pub struct SendOutcome {
    /// Id del mensaje en el proveedor (sid de Twilio); email no devuelve uno.
    pub provider_id: Option<String>,
}

/// Un canal saliente: email, SMS o WhatsApp.
/// `Err` significa que el proveedor rechazó o no respondió; el batch registra
/// el fallo y sigue con la siguiente tupla.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    async fn send(&self, recipient: &str, body: &str) -> Result<SendOutcome>;
}

/// Conjunto de senders, uno por canal, elegido según el método de contacto
/// preferido del cliente.
pub struct ChannelSenders {
    email: Box<dyn ChannelSender>,
    sms: Box<dyn ChannelSender>,
    whatsapp: Box<dyn ChannelSender>,
}

impl ChannelSenders {
    pub fn new(
        email: Box<dyn ChannelSender>,
        sms: Box<dyn ChannelSender>,
        whatsapp: Box<dyn ChannelSender>,
    ) -> Self {
        ChannelSenders {
            email,
            sms,
            whatsapp,
        }
    }

    pub fn for_method(&self, method: ContactMethod) -> &dyn ChannelSender {
        match method {
            ContactMethod::Email => self.email.as_ref(),
            ContactMethod::Sms => self.sms.as_ref(),
            ContactMethod::WhatsApp => self.whatsapp.as_ref(),
        }
    }
}
