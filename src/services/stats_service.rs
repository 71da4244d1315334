use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::dto::stats_dto::PipelineStats;
use crate::error::Result;
use crate::models::candidate::Stage;
use crate::store::{PipelineStore, SharedStore};
use crate::utils::time;

#[derive(Clone)]
pub struct StatsService {
    store: SharedStore,
}

impl StatsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn compute(&self) -> Result<PipelineStats> {
        let store = self.store.lock();
        Ok(compute_stats(&store, time::now()))
    }
}

fn compute_stats(store: &PipelineStore, now: NaiveDateTime) -> PipelineStats {
    let by_stage = Stage::PIPELINE
        .iter()
        .map(|&stage| {
            let count = store
                .candidates
                .iter()
                .filter(|c| c.stage == stage)
                .count();
            (stage, count)
        })
        .collect();

    let week_out = now + Duration::days(7);

    PipelineStats {
        total: store.candidates.len(),
        by_stage,
        upcoming_interviews: store
            .interviews
            .iter()
            .filter(|i| i.status == "scheduled")
            .count(),
        this_week_interviews: store
            .interviews
            .iter()
            .filter(|i| in_window(i.date.as_deref(), now, week_out))
            .count(),
    }
}

/// True when `date` parses as `YYYY-MM-DD` and its midnight lands inside the
/// inclusive window; a missing or unparseable date never counts.
fn in_window(date: Option<&str>, from: NaiveDateTime, to: NaiveDateTime) -> bool {
    let Some(raw) = date else { return false };
    let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return false;
    };
    let midnight = day.and_time(NaiveTime::MIN);
    from <= midnight && midnight <= to
}
