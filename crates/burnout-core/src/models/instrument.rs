use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An ordered set of selectable options, each mapped to a numeric value.
///
/// Map values are not required to be monotonic; the engine never assumes
/// an ordering beyond the option index itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseScale {
    pub labels: Vec<String>,
    pub map: Vec<f64>,
    /// Upper bound of the value range and the reversal ceiling: a
    /// reverse-coded item scores `ceiling - map[idx]`.
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
}

fn default_ceiling() -> f64 {
    100.0
}

impl ResponseScale {
    pub fn option_count(&self) -> usize {
        self.map.len()
    }
}

/// One questionnaire statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: u32,
    pub text: String,
    pub domain: String,
    pub scale: String,
    #[serde(default)]
    pub reverse: bool,
}

/// A named grouping of items whose scores are averaged into a sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainDef {
    pub id: String,
    pub name: String,
}

/// A labeled score range used to classify a score into a severity
/// category. Both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub color: String,
}

impl Band {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

/// An immutable questionnaire description.
///
/// Item order defines response-vector indexing. Band order is the
/// tie-break when classifying a score that more than one band claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentDefinition {
    pub id: String,
    pub title: String,
    pub domains: Vec<DomainDef>,
    pub response_scales: BTreeMap<String, ResponseScale>,
    pub items: Vec<Item>,
    pub bands: Vec<Band>,
}

impl InstrumentDefinition {
    pub fn scale(&self, id: &str) -> Option<&ResponseScale> {
        self.response_scales.get(id)
    }

    pub fn domain(&self, id: &str) -> Option<&DomainDef> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// Largest scale ceiling, the upper bound of any reachable score.
    pub fn max_ceiling(&self) -> f64 {
        self.response_scales
            .values()
            .map(|s| s.ceiling)
            .fold(0.0, f64::max)
    }
}
