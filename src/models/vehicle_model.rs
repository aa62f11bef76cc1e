use serde::{Deserialize, Serialize};

/// Vehículo registrado en un taller. `review_due_date` se guarda como
/// "YYYY-MM-DD"; `next_appointment_id` no nulo significa que ya hay cita.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: String,
    pub plate_number: String,
    pub owner_id: String,
    pub workshop_id: String,
    pub review_due_date: String,
    pub next_appointment_id: Option<String>,
}
