use thiserror::Error;

/// Malformed instrument definition. Fatal at load time; an instrument
/// that fails validation must never reach the scoring engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("instrument is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("instrument '{0}' has no items")]
    EmptyItems(String),

    #[error("item {item_id} references undefined scale '{scale_id}'")]
    UndefinedScale { item_id: u32, scale_id: String },

    #[error("scale '{scale_id}' has {labels} labels but {values} map values")]
    ScaleLengthMismatch {
        scale_id: String,
        labels: usize,
        values: usize,
    },

    #[error("scale '{scale_id}' must offer at least two options")]
    ScaleTooSmall { scale_id: String },

    #[error("scale '{scale_id}' map value {value} is outside [0, {ceiling}]")]
    MapValueOutOfRange {
        scale_id: String,
        value: f64,
        ceiling: f64,
    },

    #[error("item {item_id} references undeclared domain '{domain}'")]
    UndeclaredDomain { item_id: u32, domain: String },

    #[error("domain '{0}' has no items")]
    EmptyDomain(String),

    #[error("instrument '{0}' declares no severity bands")]
    NoBands(String),
}

/// Caller misuse of the scoring engine. The answer-capture layer validates
/// option indices before they reach the engine; the engine fails fast
/// rather than clamping.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("expected {expected} responses, got {actual}")]
    ResponseLength { expected: usize, actual: usize },

    #[error(
        "item {item_id}: option index {index} is out of range for scale '{scale_id}' ({options} options)"
    )]
    OptionIndexOutOfRange {
        item_id: u32,
        index: usize,
        scale_id: String,
        options: usize,
    },

    #[error("item {item_id} references undefined scale '{scale_id}'")]
    UndefinedScale { item_id: u32, scale_id: String },
}
