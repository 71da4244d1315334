pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::{
    candidate_service::CandidateService, interview_service::InterviewService,
    settings_service::SettingsService, stats_service::StatsService,
};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub settings_service: SettingsService,
    pub stats_service: StatsService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        let candidate_service = CandidateService::new(store.clone());
        let interview_service = InterviewService::new(store.clone());
        let settings_service = SettingsService::new(store.clone());
        let stats_service = StatsService::new(store.clone());

        Self {
            store,
            candidate_service,
            interview_service,
            settings_service,
            stats_service,
        }
    }
}
