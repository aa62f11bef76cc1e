//! services/due_review_service.rs
//! Resolver del batch: ventana de vencimiento y consulta de revisiones por
//! recordar (vehículos que vencen en el mes objetivo y no tienen cita).

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use sqlx::{Pool, Sqlite};

use crate::models::{customer_model::Customer, vehicle_model::Vehicle, workshop_model::Workshop};

/// Ventana semiabierta [start, end) de exactamente un mes calendario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DueWindow {
    /// Mes calendario siguiente al de `today`, con rollover de año en
    /// diciembre.
    pub fn for_run_date(today: NaiveDate) -> DueWindow {
        let (start_year, start_month) = next_month(today.year(), today.month());
        let (end_year, end_month) = next_month(start_year, start_month);

        DueWindow {
            start: first_of_month(start_year, start_month),
            end: first_of_month(end_year, end_month),
        }
    }

    /// Etiqueta "MM/YYYY" del mes objetivo; es el valor del token {date}.
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.start.month(), self.start.year())
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // month sale de next_month, siempre 1..=12
    NaiveDate::from_ymd_opt(year, month, 1).expect("mes fuera de rango")
}

/// Tupla de trabajo producida por el resolver.
#[derive(Debug, Clone)]
pub struct DueReview {
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub workshop: Workshop,
}

#[derive(Clone)]
pub struct DueReviewService {
    db_pool: Pool<Sqlite>,
}

impl DueReviewService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        DueReviewService { db_pool }
    }

    /// Consulta las revisiones que vencen dentro de `window` y no tienen cita
    /// agendada. Cada llamada vuelve a consultar el estado actual; no hay
    /// reintentos internos y cualquier error de consulta aborta la corrida
    /// completa.
    pub async fn find_due_reviews(&self, window: &DueWindow) -> Result<Vec<DueReview>> {
        let start = window.start.to_string();
        let end = window.end.to_string();

        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, plate_number, owner_id, workshop_id,
                   review_due_date, next_appointment_id
            FROM vehicles
            WHERE review_due_date >= ?1
              AND review_due_date < ?2
              AND next_appointment_id IS NULL
            "#,
        )
        .bind(&start)
        .bind(&end)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al consultar vehículos con revisión por vencer")?;

        // Un solo fetch de talleres, indexado por id: las plantillas se
        // comparten entre todos los vehículos del mismo taller.
        let workshops = self.fetch_workshops().await?;

        let mut reviews = Vec::new();
        for vehicle in vehicles {
            let customer = sqlx::query_as::<_, Customer>(
                r#"
                SELECT id, full_name, email, phone_number, contact_method, workshop_id
                FROM customers
                WHERE id = ?1
                "#,
            )
            .bind(&vehicle.owner_id)
            .fetch_one(&self.db_pool)
            .await
            .context("No se encontró el cliente dueño del vehículo")?;

            let workshop = workshops
                .get(&vehicle.workshop_id)
                .cloned()
                .context("No se encontró el taller del vehículo")?;

            reviews.push(DueReview {
                customer,
                vehicle,
                workshop,
            });
        }

        Ok(reviews)
    }

    async fn fetch_workshops(&self) -> Result<HashMap<String, Workshop>> {
        let rows = sqlx::query_as::<_, Workshop>(
            r#"
            SELECT id, name, phone_number, email_message, sms_message, whatsapp_message
            FROM workshops
            "#,
        )
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al consultar talleres")?;

        Ok(rows.into_iter().map(|w| (w.id.clone(), w)).collect())
    }
}
