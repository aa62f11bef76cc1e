use serde::{Deserialize, Serialize};

/// Cliente del taller, dueño de uno o más vehículos. La aplicación principal
/// es dueña de esta tabla; este servicio solo la lee.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub contact_method: String, // "email", "sms", "whatsapp"
    pub workshop_id: String,
}

/// Método de contacto preferido, parseado del texto guardado en DB.
/// Un valor desconocido se trata como "sin canal válido".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Sms,
    WhatsApp,
}

impl ContactMethod {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "email" => Some(ContactMethod::Email),
            "sms" => Some(ContactMethod::Sms),
            "whatsapp" => Some(ContactMethod::WhatsApp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Sms => "sms",
            ContactMethod::WhatsApp => "whatsapp",
        }
    }
}
