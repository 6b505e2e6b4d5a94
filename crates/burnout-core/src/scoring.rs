//! The scoring engine: a pure mapping from a response vector and an
//! instrument definition to a score report.
//!
//! Stateless and deterministic: the same inputs always produce an equal
//! report, and nothing here mutates shared state, so the functions are
//! safe to call from any number of logical contexts.

use tracing::warn;

use crate::error::ScoreError;
use crate::models::instrument::{Band, InstrumentDefinition, Item};
use crate::models::report::{DomainScore, ScoreReport};
use crate::models::response::ResponseVector;

/// Score a single item against its chosen option.
///
/// An unanswered slot propagates as `Ok(None)`; it never defaults to a
/// numeric value. A reverse-coded item mirrors the mapped value around
/// its scale's ceiling (`ceiling - raw`), not around the scale's own
/// min/max.
pub fn score_item(
    instrument: &InstrumentDefinition,
    item: &Item,
    response: Option<usize>,
) -> Result<Option<f64>, ScoreError> {
    let Some(choice) = response else {
        return Ok(None);
    };

    let scale = instrument
        .scale(&item.scale)
        .ok_or_else(|| ScoreError::UndefinedScale {
            item_id: item.id,
            scale_id: item.scale.clone(),
        })?;

    let raw = *scale
        .map
        .get(choice)
        .ok_or_else(|| ScoreError::OptionIndexOutOfRange {
            item_id: item.id,
            index: choice,
            scale_id: item.scale.clone(),
            options: scale.option_count(),
        })?;

    Ok(Some(if item.reverse { scale.ceiling - raw } else { raw }))
}

/// Score a full response vector into a report.
///
/// Domain means cover only that domain's numeric item scores; a domain
/// whose every item is unanswered gets `None`. The overall score is the
/// mean of all numeric item scores: item-weighted, so domains with more
/// items pull on it proportionally, and unanswered items are excluded
/// from both numerator and denominator.
pub fn compute_scores(
    instrument: &InstrumentDefinition,
    responses: &ResponseVector,
) -> Result<ScoreReport, ScoreError> {
    if responses.len() != instrument.items.len() {
        return Err(ScoreError::ResponseLength {
            expected: instrument.items.len(),
            actual: responses.len(),
        });
    }

    let mut item_scores = Vec::with_capacity(instrument.items.len());
    for (item, &response) in instrument.items.iter().zip(responses) {
        item_scores.push(score_item(instrument, item, response)?);
    }

    let domain_scores = instrument
        .domains
        .iter()
        .map(|domain| {
            let values: Vec<f64> = instrument
                .items
                .iter()
                .zip(&item_scores)
                .filter(|(item, _)| item.domain == domain.id)
                .filter_map(|(_, score)| *score)
                .collect();
            DomainScore {
                domain: domain.id.clone(),
                score: mean(&values),
            }
        })
        .collect();

    let answered: Vec<f64> = item_scores.iter().copied().flatten().collect();

    Ok(ScoreReport {
        item_scores,
        domain_scores,
        overall: mean(&answered),
    })
}

/// Classify a score into the first declared band whose inclusive range
/// contains it. Declaration order doubles as the tie-break for bands
/// sharing a boundary. A score outside every band falls back to the
/// first declared band, a documented weak point of authored band
/// tables, warned about rather than raised.
///
/// The instrument must declare at least one band; `validate` enforces
/// this.
pub fn classify_band<'a>(instrument: &'a InstrumentDefinition, score: f64) -> &'a Band {
    if let Some(band) = instrument.bands.iter().find(|b| b.contains(score)) {
        return band;
    }
    warn!(
        instrument = %instrument.id,
        score,
        "score outside all declared bands; falling back to the first band"
    );
    &instrument.bands[0]
}

/// Mean of an empty set is the insufficient-data sentinel, not 0.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
