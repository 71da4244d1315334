use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, Stage};

/// Creation forces `stage`/`appliedDate`, so the payload does not carry them;
/// unknown keys in the request body are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub resume_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidatePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub resume_url: Option<String>,
    pub notes: Option<String>,
    pub stage: Option<Stage>,
    pub applied_date: Option<chrono::NaiveDate>,
}

impl UpdateCandidatePayload {
    /// Shallow merge; `id` is not part of the patchable set.
    pub fn apply_to(self, candidate: &mut Candidate) {
        if let Some(name) = self.name {
            candidate.name = Some(name);
        }
        if let Some(email) = self.email {
            candidate.email = Some(email);
        }
        if let Some(phone) = self.phone {
            candidate.phone = Some(phone);
        }
        if let Some(position) = self.position {
            candidate.position = Some(position);
        }
        if let Some(resume_url) = self.resume_url {
            candidate.resume_url = Some(resume_url);
        }
        if let Some(notes) = self.notes {
            candidate.notes = Some(notes);
        }
        if let Some(stage) = self.stage {
            candidate.stage = stage;
        }
        if let Some(applied_date) = self.applied_date {
            candidate.applied_date = applied_date;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStagePayload {
    pub stage: Stage,
}
