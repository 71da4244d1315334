pub mod candidate_service;
pub mod interview_service;
pub mod settings_service;
pub mod stats_service;
