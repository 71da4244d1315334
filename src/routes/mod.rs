pub mod candidate_routes;
pub mod interview_routes;
pub mod settings_routes;
pub mod stats_routes;
pub mod system;
