use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline stages in order; unknown names are rejected at the JSON boundary.
/// Declaration order carries `Ord`, so `Stage`-keyed maps sort in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Applied,
    PhoneScreen,
    Interview,
    Offer,
    Hired,
}

impl Stage {
    pub const PIPELINE: [Stage; 5] = [
        Stage::Applied,
        Stage::PhoneScreen,
        Stage::Interview,
        Stage::Offer,
        Stage::Hired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::PhoneScreen => "phone_screen",
            Stage::Interview => "interview",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub stage: Stage,
    pub applied_date: NaiveDate,
}
