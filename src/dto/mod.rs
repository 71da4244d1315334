pub mod candidate_dto;
pub mod interview_dto;
pub mod settings_dto;
pub mod stats_dto;
