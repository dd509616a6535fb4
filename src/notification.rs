use crate::models::Lead;

/// Placeholder rendered for any field the CRM left empty or absent.
///
/// Downstream consumers match on this exact text, treat it as part of the
/// message contract.
pub const NO_INFORMATION: &str = "no information";

/// Builds the plain-text system notification for a lead.
///
/// Pure and infallible: a lead with no fields at all yields a message that
/// is all placeholders. The repeat-contact label is `NO` only when the
/// returning-customer flag is exactly `"N"`; any other value, including an
/// absent or empty flag, renders `YES`.
pub fn format_lead_notification(lead: &Lead) -> String {
    format!(
        "New lead event\n\
         ID: {}\n\
         Title: {}\n\
         Name: {}\n\
         Second name: {}\n\
         Last name: {}\n\
         Company: {}\n\
         Repeat contact: {}\n\
         Source: {}\n\
         Comments: {}",
        field_or_placeholder(&lead.id),
        field_or_placeholder(&lead.title),
        field_or_placeholder(&lead.name),
        field_or_placeholder(&lead.second_name),
        field_or_placeholder(&lead.last_name),
        field_or_placeholder(&lead.company_title),
        repeat_contact_label(&lead.is_return_customer),
        field_or_placeholder(&lead.source_description),
        field_or_placeholder(&lead.comments),
    )
}

fn field_or_placeholder(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => NO_INFORMATION,
    }
}

fn repeat_contact_label(flag: &Option<String>) -> &'static str {
    match flag.as_deref() {
        Some("N") => "NO",
        _ => "YES",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lead_renders_all_placeholders() {
        let message = format_lead_notification(&Lead::default());

        // 8 free-text fields; the repeat-contact line renders a label instead
        assert_eq!(message.matches(NO_INFORMATION).count(), 8);
        assert!(message.contains("Repeat contact: YES"));
    }

    #[test]
    fn test_id_only_lead_keeps_placeholders_elsewhere() {
        let lead = Lead {
            id: Some("42".to_string()),
            ..Lead::default()
        };
        let message = format_lead_notification(&lead);

        assert!(message.contains("ID: 42"));
        // Every other field line still carries the placeholder
        assert_eq!(message.matches(NO_INFORMATION).count(), 7);
        assert!(message.contains("Repeat contact: YES"));
    }

    #[test]
    fn test_repeat_contact_label_values() {
        let mut lead = Lead::default();

        lead.is_return_customer = Some("N".to_string());
        assert!(format_lead_notification(&lead).contains("Repeat contact: NO"));

        lead.is_return_customer = Some("Y".to_string());
        assert!(format_lead_notification(&lead).contains("Repeat contact: YES"));

        lead.is_return_customer = Some("whatever".to_string());
        assert!(format_lead_notification(&lead).contains("Repeat contact: YES"));

        lead.is_return_customer = None;
        assert!(format_lead_notification(&lead).contains("Repeat contact: YES"));
    }

    #[test]
    fn test_empty_string_field_renders_placeholder() {
        let lead = Lead {
            title: Some(String::new()),
            ..Lead::default()
        };
        let message = format_lead_notification(&lead);
        assert!(message.contains(&format!("Title: {}", NO_INFORMATION)));
    }

    #[test]
    fn test_full_lead_renders_every_field() {
        let lead = Lead {
            id: Some("42".to_string()),
            title: Some("Website inquiry".to_string()),
            name: Some("Ivan".to_string()),
            second_name: Some("Petrovich".to_string()),
            last_name: Some("Sidorov".to_string()),
            company_title: Some("Acme LLC".to_string()),
            is_return_customer: Some("N".to_string()),
            source_description: Some("Landing page form".to_string()),
            comments: Some("Call after 18:00".to_string()),
        };
        let message = format_lead_notification(&lead);

        assert!(!message.contains(NO_INFORMATION));
        assert!(message.contains("Name: Ivan"));
        assert!(message.contains("Company: Acme LLC"));
        assert!(message.contains("Repeat contact: NO"));
    }
}
