use crate::dto::candidate_dto::{CreateCandidatePayload, SetStagePayload, UpdateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, Stage};
use crate::store::{new_id, SharedStore};
use crate::utils::time;

#[derive(Clone)]
pub struct CandidateService {
    store: SharedStore,
}

impl CandidateService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        let store = self.store.lock();
        Ok(store.candidates.clone())
    }

    pub async fn get(&self, id: &str) -> Result<Candidate> {
        let store = self.store.lock();
        store
            .candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    /// New candidates always enter the pipeline at `applied`, dated today.
    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let candidate = Candidate {
            id: new_id(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            position: payload.position,
            resume_url: payload.resume_url,
            notes: payload.notes,
            stage: Stage::Applied,
            applied_date: time::today(),
        };

        let mut store = self.store.lock();
        store.candidates.push(candidate.clone());
        tracing::info!("Candidate {} created", candidate.id);

        Ok(candidate)
    }

    pub async fn update(&self, id: &str, payload: UpdateCandidatePayload) -> Result<Candidate> {
        let mut store = self.store.lock();
        let candidate = store
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;

        payload.apply_to(candidate);

        Ok(candidate.clone())
    }

    pub async fn set_stage(&self, id: &str, payload: SetStagePayload) -> Result<Candidate> {
        let mut store = self.store.lock();
        let candidate = store
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;

        candidate.stage = payload.stage;
        tracing::info!("Candidate {} moved to stage {}", candidate.id, candidate.stage);

        Ok(candidate.clone())
    }

    /// Removes the candidate only; interviews referencing the id are kept.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.lock();
        let index = store
            .candidates
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;

        store.candidates.remove(index);
        tracing::info!("Candidate {} deleted", id);

        Ok(())
    }
}
