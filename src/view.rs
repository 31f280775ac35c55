//! Plain-text rendering of the status line and lead list.

use crate::models::{DisplayLead, SearchStatus, StatusKind};
use std::fmt::Write;

pub const NO_LEADS: &str = "No leads found.";

/// Status line with a marker for its kind. Empty messages render as nothing.
pub fn render_status(status: &SearchStatus) -> String {
    if status.message.is_empty() {
        return String::new();
    }
    match status.kind {
        StatusKind::Success => format!("✅ {}", status.message),
        StatusKind::Error => format!("❌ {}", status.message),
        StatusKind::None => status.message.clone(),
    }
}

pub fn render_leads(leads: &[DisplayLead]) -> String {
    if leads.is_empty() {
        return NO_LEADS.to_string();
    }

    let mut out = String::new();
    for (index, lead) in leads.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "Lead #{}", index + 1);
        for (key, value) in lead.fields() {
            let _ = writeln!(out, "  {}: {}", key, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_markers() {
        assert_eq!(render_status(&SearchStatus::default()), "");
        assert_eq!(
            render_status(&SearchStatus::in_progress()),
            "Starting search..."
        );
        assert_eq!(
            render_status(&SearchStatus::error("Error fetching leads")),
            "❌ Error fetching leads"
        );
        assert!(render_status(&SearchStatus::search_succeeded("ok")).starts_with("✅ "));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_leads(&[]), NO_LEADS);
    }

    #[test]
    fn test_lead_blocks() {
        let leads = vec![
            DisplayLead {
                business_name: "Padaria Central".to_string(),
                rating: 4.5,
                ..Default::default()
            },
            DisplayLead::default(),
        ];
        let text = render_leads(&leads);

        assert!(text.starts_with("Lead #1\n"));
        assert!(text.contains("  businessName: Padaria Central\n"));
        assert!(text.contains("  rating: 4.5\n"));
        assert!(text.contains("Lead #2\n"));
        assert!(!text.contains("null"));
        assert!(!text.contains("undefined"));
    }
}
