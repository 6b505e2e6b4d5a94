use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Mean score for one domain. `None` means every item in the domain was
/// unanswered: insufficient data, which callers must handle explicitly
/// rather than rendering as a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub domain: String,
    pub score: Option<f64>,
}

/// The scoring engine's output: per-item scores in item order (`None`
/// propagates unanswered slots positionally), per-domain means in declared
/// domain order, and the item-weighted overall mean.
///
/// A report is a value: computed fresh on every scoring call and never
/// mutated afterward. The insufficient-data sentinel is `None`, not NaN,
/// so reports compare with ordinary equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub item_scores: Vec<Option<f64>>,
    pub domain_scores: Vec<DomainScore>,
    pub overall: Option<f64>,
}

impl ScoreReport {
    /// Look up a domain mean by domain id.
    pub fn domain(&self, id: &str) -> Option<&DomainScore> {
        self.domain_scores.iter().find(|d| d.domain == id)
    }
}
