use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub company_name: String,
    pub logo: String,
    pub primary_color: String,
    pub reminder_hours: i64,
    pub email_templates: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut email_templates = BTreeMap::new();
        email_templates.insert(
            "interviewInvite".to_string(),
            concat!(
                "Dear {{candidateName}},\n\n",
                "We are pleased to invite you for an interview for the {{position}} position.\n\n",
                "Date: {{date}}\nTime: {{time}}\nLocation: {{location}}\n\n",
                "Please confirm your attendance.\n\n",
                "Best regards,\n{{companyName}} Recruitment Team"
            )
            .to_string(),
        );
        email_templates.insert(
            "reminder".to_string(),
            concat!(
                "Dear {{candidateName}},\n\n",
                "This is a reminder about your upcoming interview tomorrow.\n\n",
                "Date: {{date}}\nTime: {{time}}\nLocation: {{location}}\n\n",
                "We look forward to meeting you!\n\n",
                "Best regards,\n{{companyName}} Recruitment Team"
            )
            .to_string(),
        );

        Self {
            company_name: "Your Company".to_string(),
            logo: String::new(),
            primary_color: "#2563eb".to_string(),
            reminder_hours: 24,
            email_templates,
        }
    }
}
