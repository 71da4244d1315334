use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::candidate::Stage;

/// `by_stage` carries every pipeline stage, zero counts included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub total: usize,
    pub by_stage: BTreeMap<Stage, usize>,
    pub upcoming_interviews: usize,
    pub this_week_interviews: usize,
}
