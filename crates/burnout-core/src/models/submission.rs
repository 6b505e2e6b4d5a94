use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::report::ScoreReport;
use super::response::ResponseVector;

/// A completed administration, shaped for the external storage layer:
/// the raw response vector plus the computed report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub id: Uuid,
    pub instrument_id: String,
    pub responses: ResponseVector,
    pub report: ScoreReport,
    pub completed_at: jiff::Timestamp,
}
