//! services/template_service.rs
//! Render de plantillas de recordatorio: sustitución literal de tokens fijos.

/// Campos disponibles para las plantillas configuradas por los talleres.
pub struct TemplateFields<'a> {
    pub customer_name: &'a str,
    pub workshop_name: &'a str,
    pub workshop_phone: &'a str,
    pub plate_number: &'a str,
    /// Ya formateada por el caller (MM/YYYY); acá no se formatean fechas.
    pub date: &'a str,
}

/// Sustituye los tokens reconocidos por su valor. Tokens ausentes en la
/// plantilla se ignoran; tokens no reconocidos quedan tal cual; un campo
/// vacío sustituye con cadena vacía. Se reemplazan todas las ocurrencias
/// de cada token.
pub fn render_template(template: &str, fields: &TemplateFields) -> String {
    template
        .replace("{customer.name}", fields.customer_name)
        .replace("{workshop.name}", fields.workshop_name)
        .replace("{workshop.phoneNumber}", fields.workshop_phone)
        .replace("{vehicle.plateNumber}", fields.plate_number)
        .replace("{date}", fields.date)
}
