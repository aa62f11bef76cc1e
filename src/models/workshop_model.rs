use serde::{Deserialize, Serialize};

/// Taller con sus plantillas de mensaje por canal. Las tres plantillas son
/// opcionales; la cadena de fallback vive en el dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workshop {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email_message: Option<String>,
    pub sms_message: Option<String>,
    pub whatsapp_message: Option<String>,
}
