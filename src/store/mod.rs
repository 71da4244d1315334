use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::candidate::{Candidate, Stage};
use crate::models::interview::Interview;
use crate::models::settings::Settings;

/// Volatile in-process repository: candidates, interviews and the settings
/// singleton, in insertion order. Deleting a candidate does not cascade to
/// interviews; dangling `candidate_id` references are left alone.
#[derive(Debug, Default)]
pub struct PipelineStore {
    pub candidates: Vec<Candidate>,
    pub interviews: Vec<Interview>,
    pub settings: Settings,
}

impl PipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed demo dataset the process boots with.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.candidates = vec![
            demo_candidate(
                "1",
                "Sarah Johnson",
                "sarah.j@email.com",
                "555-0101",
                "Senior Developer",
                Stage::Interview,
                date(2026, 1, 15),
                "Strong React experience",
            ),
            demo_candidate(
                "2",
                "Michael Chen",
                "mchen@email.com",
                "555-0102",
                "Product Manager",
                Stage::PhoneScreen,
                date(2026, 1, 18),
                "Ex-Google PM",
            ),
            demo_candidate(
                "3",
                "Emily Davis",
                "emily.d@email.com",
                "555-0103",
                "UX Designer",
                Stage::Applied,
                date(2026, 1, 20),
                "Great portfolio",
            ),
            demo_candidate(
                "4",
                "James Wilson",
                "jwilson@email.com",
                "555-0104",
                "Senior Developer",
                Stage::Offer,
                date(2026, 1, 10),
                "Negotiating salary",
            ),
            demo_candidate(
                "5",
                "Lisa Martinez",
                "lisa.m@email.com",
                "555-0105",
                "Data Analyst",
                Stage::Hired,
                date(2026, 1, 5),
                "Started Jan 20",
            ),
            demo_candidate(
                "6",
                "David Brown",
                "dbrown@email.com",
                "555-0106",
                "DevOps Engineer",
                Stage::Applied,
                date(2026, 1, 21),
                "AWS certified",
            ),
        ];

        store.interviews = vec![
            Interview {
                id: "1".into(),
                candidate_id: Some("1".into()),
                candidate_name: Some("Sarah Johnson".into()),
                position: Some("Senior Developer".into()),
                date: Some("2026-01-24".into()),
                time: Some("10:00".into()),
                duration: Some(60),
                interview_type: Some("Technical Interview".into()),
                interviewers: Some(vec!["John Smith".into(), "Jane Doe".into()]),
                location: Some("Google Meet".into()),
                notes: Some("Focus on system design".into()),
                status: "scheduled".into(),
                reminder_sent: false,
            },
            Interview {
                id: "2".into(),
                candidate_id: Some("2".into()),
                candidate_name: Some("Michael Chen".into()),
                position: Some("Product Manager".into()),
                date: Some("2026-01-23".into()),
                time: Some("14:00".into()),
                duration: Some(30),
                interview_type: Some("Phone Screen".into()),
                interviewers: Some(vec!["HR Team".into()]),
                location: Some("Phone Call".into()),
                notes: Some("Initial screening".into()),
                status: "scheduled".into(),
                reminder_sent: true,
            },
        ];

        store
    }

    pub fn into_shared(self) -> SharedStore {
        SharedStore::new(self)
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Handle shared by every service. The data model assumes one logical writer
/// at a time, so every operation runs under this single lock start to finish.
#[derive(Debug, Clone)]
pub struct SharedStore(Arc<Mutex<PipelineStore>>);

impl SharedStore {
    pub fn new(store: PipelineStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    pub fn lock(&self) -> MutexGuard<'_, PipelineStore> {
        self.0.lock().expect("pipeline store mutex poisoned")
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn demo_candidate(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    position: &str,
    stage: Stage,
    applied_date: NaiveDate,
    notes: &str,
) -> Candidate {
    Candidate {
        id: id.into(),
        name: Some(name.into()),
        email: Some(email.into()),
        phone: Some(phone.into()),
        position: Some(position.into()),
        resume_url: Some("#".into()),
        notes: Some(notes.into()),
        stage,
        applied_date,
    }
}
