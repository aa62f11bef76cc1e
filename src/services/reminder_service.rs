//! services/reminder_service.rs
//! Pipeline del batch mensual: resolver -> render -> envío -> registro.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::{
    models::{
        customer_model::{ContactMethod, Customer},
        notification_model::{NewNotification, ReminderOutcome, RunReport},
        workshop_model::Workshop,
    },
    services::{
        channel_sender::ChannelSenders,
        due_review_service::{DueReview, DueReviewService, DueWindow},
        notification_log_service::NotificationLogService,
        template_service::{render_template, TemplateFields},
    },
};

/// Plantilla usada cuando el taller no configuró ninguna.
const DEFAULT_TEMPLATE: &str =
    "Ciao {customer.name}, la revisione del veicolo {vehicle.plateNumber} scade il {date}.";

/// Mensaje de diagnóstico registrado cuando no hay canal válido.
const NO_CHANNEL_MESSAGE: &str = "Nessun metodo di contatto valido per invio reminder";

/// Plan de despacho de una tupla: o hay canal con destinatario y plantilla,
/// o no hay forma de contactar al cliente.
enum DispatchPlan<'a> {
    Send {
        method: ContactMethod,
        recipient: &'a str,
        template: &'a str,
    },
    NoChannel,
}

pub struct ReminderService {
    due_service: DueReviewService,
    log_service: NotificationLogService,
    senders: ChannelSenders,
}

impl ReminderService {
    pub fn new(
        due_service: DueReviewService,
        log_service: NotificationLogService,
        senders: ChannelSenders,
    ) -> Self {
        ReminderService {
            due_service,
            log_service,
            senders,
        }
    }

    /// Corre el batch tomando "hoy" del reloj del sistema.
    pub async fn send_monthly_reminders(&self) -> Result<RunReport> {
        self.run_for_date(Utc::now().date_naive()).await
    }

    /// Corre el batch para una fecha dada. Solo un fallo del resolver hace
    /// fallar la corrida; los fallos de envío quedan registrados por tupla.
    pub async fn run_for_date(&self, today: NaiveDate) -> Result<RunReport> {
        let window = DueWindow::for_run_date(today);
        log::info!(
            "(run_for_date) Ventana objetivo [{}, {}), etiqueta {}",
            window.start,
            window.end,
            window.label()
        );

        let reviews = self.due_service.find_due_reviews(&window).await?;

        if reviews.is_empty() {
            log::info!("(run_for_date) Sin revisiones por recordar este mes.");
            return Ok(RunReport {
                message: "No reminders to send this month".to_string(),
                results: vec![],
            });
        }

        log::info!(
            "(run_for_date) {} recordatorios por despachar.",
            reviews.len()
        );

        let date_label = window.label();
        let mut results = Vec::new();
        for review in &reviews {
            let outcome = self.dispatch_review(review, &date_label).await;
            results.push(outcome);
        }

        log::info!("(run_for_date) Corrida finalizada.");
        Ok(RunReport {
            message: "Reminder inviati".to_string(),
            results,
        })
    }

    /// Despacha una tupla: elige canal, renderiza, envía y registra.
    /// Nunca devuelve error: el resultado queda en el ReminderOutcome.
    async fn dispatch_review(&self, review: &DueReview, date_label: &str) -> ReminderOutcome {
        let customer = &review.customer;
        let vehicle = &review.vehicle;
        let workshop = &review.workshop;

        let (status, method_label, message, provider_id, success) =
            match plan_dispatch(customer, workshop) {
                DispatchPlan::Send {
                    method,
                    recipient,
                    template,
                } => {
                    let fields = TemplateFields {
                        customer_name: &customer.full_name,
                        workshop_name: &workshop.name,
                        workshop_phone: &workshop.phone_number,
                        plate_number: &vehicle.plate_number,
                        date: date_label,
                    };
                    let message = render_template(template, &fields);

                    log::info!(
                        "(dispatch_review) -> Enviando por {} a cliente='{}', vehículo='{}'...",
                        method.as_str(),
                        customer.full_name,
                        vehicle.plate_number
                    );

                    match self
                        .senders
                        .for_method(method)
                        .send(recipient, &message)
                        .await
                    {
                        Ok(outcome) => {
                            log::info!(
                                "(dispatch_review) Canal '{}' enviado con éxito para vehículo='{}'.",
                                method.as_str(),
                                vehicle.plate_number
                            );
                            ("sent", method.as_str(), message, outcome.provider_id, true)
                        }
                        Err(e) => {
                            log::error!(
                                "(dispatch_review) Error al enviar canal '{}' para vehículo='{}': {:?}",
                                method.as_str(),
                                vehicle.plate_number,
                                e
                            );
                            ("failed", method.as_str(), message, None, false)
                        }
                    }
                }
                DispatchPlan::NoChannel => {
                    log::error!(
                        "(dispatch_review) Cliente='{}' sin canal válido (método '{}').",
                        customer.full_name,
                        customer.contact_method
                    );
                    ("failed", "none", NO_CHANNEL_MESSAGE.to_string(), None, false)
                }
            };

        // El registro es best-effort: un fallo del insert se reporta al log
        // operativo y no cambia el resultado de la tupla.
        let entry = NewNotification {
            customer_id: customer.id.clone(),
            vehicle_id: vehicle.id.clone(),
            method: method_label.to_string(),
            message,
            status: status.to_string(),
            external_id: provider_id,
        };
        if let Err(e) = self.log_service.log_notification(entry).await {
            log::error!("(dispatch_review) Log notification error: {:?}", e);
        }

        ReminderOutcome {
            customer: customer.full_name.clone(),
            vehicle: vehicle.plate_number.clone(),
            method: customer.contact_method.clone(),
            success,
        }
    }
}

/// Selección pura de canal: método preferido -> destinatario y plantilla.
/// Método desconocido o campo de contacto vacío -> NoChannel.
fn plan_dispatch<'a>(customer: &'a Customer, workshop: &'a Workshop) -> DispatchPlan<'a> {
    let method = match ContactMethod::parse(&customer.contact_method) {
        Some(m) => m,
        None => return DispatchPlan::NoChannel,
    };

    let recipient = match method {
        ContactMethod::Email => customer.email.as_deref(),
        ContactMethod::Sms | ContactMethod::WhatsApp => customer.phone_number.as_deref(),
    };

    match recipient {
        Some(r) if !r.is_empty() => DispatchPlan::Send {
            method,
            recipient: r,
            template: choose_template(method, workshop),
        },
        _ => DispatchPlan::NoChannel,
    }
}

/// Cadena de fallback explícita: plantilla del canal -> plantilla de email
/// del taller -> texto por defecto. Una plantilla vacía cuenta como ausente.
fn choose_template<'a>(method: ContactMethod, workshop: &'a Workshop) -> &'a str {
    let channel_template = match method {
        ContactMethod::Email => workshop.email_message.as_deref(),
        ContactMethod::Sms => workshop.sms_message.as_deref(),
        ContactMethod::WhatsApp => workshop.whatsapp_message.as_deref(),
    };

    channel_template
        .filter(|t| !t.is_empty())
        .or_else(|| workshop.email_message.as_deref().filter(|t| !t.is_empty()))
        .unwrap_or(DEFAULT_TEMPLATE)
}
