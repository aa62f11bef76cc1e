//! tests/template_tests.rs
//! Pruebas unitarias del render de plantillas.

#[cfg(test)]
mod tests {
    use crate::services::template_service::{render_template, TemplateFields};

    fn fields() -> TemplateFields<'static> {
        TemplateFields {
            customer_name: "Mario Rossi",
            workshop_name: "Officina Bianchi",
            workshop_phone: "0123 456789",
            plate_number: "AB123CD",
            date: "07/2025",
        }
    }

    #[test]
    fn test_replaces_all_known_tokens() {
        let template = "Ciao {customer.name}, la revisione di {vehicle.plateNumber} scade il {date}. Chiama {workshop.name} al {workshop.phoneNumber}.";
        let out = render_template(template, &fields());
        assert_eq!(
            out,
            "Ciao Mario Rossi, la revisione di AB123CD scade il 07/2025. Chiama Officina Bianchi al 0123 456789."
        );
    }

    #[test]
    fn test_repeated_token_replaced_everywhere() {
        // El original solo reemplazaba la primera ocurrencia; acá van todas.
        let out = render_template("{date} e di nuovo {date}", &fields());
        assert_eq!(out, "07/2025 e di nuovo 07/2025");
    }

    #[test]
    fn test_unknown_tokens_left_alone() {
        let out = render_template("Targa {TARGA}, {vehicle.plateNumber}", &fields());
        assert_eq!(out, "Targa {TARGA}, AB123CD");
    }

    #[test]
    fn test_empty_field_substitutes_empty_string() {
        let f = TemplateFields {
            customer_name: "",
            ..fields()
        };
        let out = render_template("Ciao {customer.name}!", &f);
        assert_eq!(out, "Ciao !");
    }

    #[test]
    fn test_template_without_tokens_unchanged() {
        let out = render_template("Nessun token qui", &fields());
        assert_eq!(out, "Nessun token qui");
    }
}
