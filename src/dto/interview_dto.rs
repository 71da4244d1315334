use serde::{Deserialize, Serialize};

use crate::models::interview::Interview;

/// `candidateName`/`position` are fallbacks for when `candidateId` does not
/// resolve; `status`/`reminderSent` are forced at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInterviewPayload {
    pub candidate_id: Option<String>,
    pub candidate_name: Option<String>,
    pub position: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    pub interviewers: Option<Vec<String>>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewPayload {
    pub candidate_id: Option<String>,
    pub candidate_name: Option<String>,
    pub position: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    pub interviewers: Option<Vec<String>>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub reminder_sent: Option<bool>,
}

impl UpdateInterviewPayload {
    /// Shallow merge; snapshot fields are patchable but never re-derived.
    pub fn apply_to(self, interview: &mut Interview) {
        if let Some(candidate_id) = self.candidate_id {
            interview.candidate_id = Some(candidate_id);
        }
        if let Some(candidate_name) = self.candidate_name {
            interview.candidate_name = Some(candidate_name);
        }
        if let Some(position) = self.position {
            interview.position = Some(position);
        }
        if let Some(date) = self.date {
            interview.date = Some(date);
        }
        if let Some(time) = self.time {
            interview.time = Some(time);
        }
        if let Some(duration) = self.duration {
            interview.duration = Some(duration);
        }
        if let Some(interview_type) = self.interview_type {
            interview.interview_type = Some(interview_type);
        }
        if let Some(interviewers) = self.interviewers {
            interview.interviewers = Some(interviewers);
        }
        if let Some(location) = self.location {
            interview.location = Some(location);
        }
        if let Some(notes) = self.notes {
            interview.notes = Some(notes);
        }
        if let Some(status) = self.status {
            interview.status = status;
        }
        if let Some(reminder_sent) = self.reminder_sent {
            interview.reminder_sent = reminder_sent;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub success: bool,
    pub message: String,
}
