use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsPayload {
    pub company_name: Option<String>,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub reminder_hours: Option<i64>,
    pub email_templates: Option<BTreeMap<String, String>>,
}

impl UpdateSettingsPayload {
    /// Shallow merge; a supplied `emailTemplates` map replaces the stored one
    /// wholesale, template keys are not merged.
    pub fn apply_to(self, settings: &mut Settings) {
        if let Some(company_name) = self.company_name {
            settings.company_name = company_name;
        }
        if let Some(logo) = self.logo {
            settings.logo = logo;
        }
        if let Some(primary_color) = self.primary_color {
            settings.primary_color = primary_color;
        }
        if let Some(reminder_hours) = self.reminder_hours {
            settings.reminder_hours = reminder_hours;
        }
        if let Some(email_templates) = self.email_templates {
            settings.email_templates = email_templates;
        }
    }
}
