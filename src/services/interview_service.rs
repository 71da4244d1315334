use crate::dto::interview_dto::{ScheduleInterviewPayload, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::models::candidate::Stage;
use crate::models::interview::Interview;
use crate::store::{new_id, SharedStore};

#[derive(Clone)]
pub struct InterviewService {
    store: SharedStore,
}

impl InterviewService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Interview>> {
        let store = self.store.lock();
        Ok(store.interviews.clone())
    }

    pub async fn get(&self, id: &str) -> Result<Interview> {
        let store = self.store.lock();
        store
            .interviews
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    /// When `candidate_id` matches a stored candidate, the candidate's name
    /// and position replace whatever the caller sent, and a candidate still
    /// at `applied` or `phone_screen` moves to `interview`. An unknown id
    /// schedules the interview as sent, with no stage change.
    pub async fn schedule(&self, payload: ScheduleInterviewPayload) -> Result<Interview> {
        let mut interview = Interview {
            id: new_id(),
            candidate_id: payload.candidate_id,
            candidate_name: payload.candidate_name,
            position: payload.position,
            date: payload.date,
            time: payload.time,
            duration: payload.duration,
            interview_type: payload.interview_type,
            interviewers: payload.interviewers,
            location: payload.location,
            notes: payload.notes,
            status: "scheduled".to_string(),
            reminder_sent: false,
        };

        let mut store = self.store.lock();

        if let Some(candidate_id) = interview.candidate_id.clone() {
            if let Some(candidate) = store.candidates.iter_mut().find(|c| c.id == candidate_id) {
                interview.candidate_name = candidate.name.clone();
                interview.position = candidate.position.clone();
                if matches!(candidate.stage, Stage::Applied | Stage::PhoneScreen) {
                    candidate.stage = Stage::Interview;
                    tracing::info!("Candidate {} moved to stage interview", candidate.id);
                }
            }
        }

        store.interviews.push(interview.clone());
        tracing::info!("Interview {} scheduled", interview.id);

        Ok(interview)
    }

    pub async fn update(&self, id: &str, payload: UpdateInterviewPayload) -> Result<Interview> {
        let mut store = self.store.lock();
        let interview = store
            .interviews
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        payload.apply_to(interview);

        Ok(interview.clone())
    }

    pub async fn cancel(&self, id: &str) -> Result<()> {
        let mut store = self.store.lock();
        let index = store
            .interviews
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        store.interviews.remove(index);
        tracing::info!("Interview {} cancelled", id);

        Ok(())
    }

    /// Sending twice is harmless; the flag just stays set.
    pub async fn send_reminder(&self, id: &str) -> Result<Interview> {
        let mut store = self.store.lock();
        let interview = store
            .interviews
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        interview.reminder_sent = true;
        tracing::info!("Reminder recorded for interview {}", interview.id);

        Ok(interview.clone())
    }
}
