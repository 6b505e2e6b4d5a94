//! Mutable state of one questionnaire administration.
//!
//! The original web UI kept the cursor position and the response vector
//! in ambient globals; here they are explicit fields owned by the
//! presentation layer. The scoring engine never sees this type, only the
//! finished response vector.

use thiserror::Error;
use uuid::Uuid;

use burnout_core::error::ScoreError;
use burnout_core::models::instrument::{InstrumentDefinition, Item};
use burnout_core::models::response::{ResponseVector, answered_count};
use burnout_core::models::submission::Submission;
use burnout_core::scoring;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("item position {position} is out of range ({items} items)")]
    Position { position: usize, items: usize },

    #[error(transparent)]
    Score(#[from] ScoreError),
}

pub struct Session<'a> {
    instrument: &'a InstrumentDefinition,
    responses: ResponseVector,
    position: usize,
    id: Uuid,
    started_at: jiff::Timestamp,
}

impl<'a> Session<'a> {
    pub fn new(instrument: &'a InstrumentDefinition) -> Self {
        Self {
            instrument,
            responses: vec![None; instrument.items.len()],
            position: 0,
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
        }
    }

    pub fn instrument(&self) -> &'a InstrumentDefinition {
        self.instrument
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn responses(&self) -> &ResponseVector {
        &self.responses
    }

    /// The item the cursor is on, or `None` once past the end.
    pub fn current_item(&self) -> Option<&'a Item> {
        self.instrument.items.get(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.instrument.items.len()
    }

    /// (answered, total) for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (answered_count(&self.responses), self.instrument.items.len())
    }

    /// Record the option chosen for the item at `position`. Option
    /// indices are validated here, so an out-of-range index can never
    /// reach the scoring engine.
    pub fn record(&mut self, position: usize, option_index: usize) -> Result<(), SessionError> {
        let items = self.instrument.items.len();
        let Some(item) = self.instrument.items.get(position) else {
            return Err(SessionError::Position { position, items });
        };
        let scale =
            self.instrument
                .scale(&item.scale)
                .ok_or_else(|| ScoreError::UndefinedScale {
                    item_id: item.id,
                    scale_id: item.scale.clone(),
                })?;
        if option_index >= scale.option_count() {
            return Err(SessionError::Score(ScoreError::OptionIndexOutOfRange {
                item_id: item.id,
                index: option_index,
                scale_id: item.scale.clone(),
                options: scale.option_count(),
            }));
        }
        self.responses[position] = Some(option_index);
        Ok(())
    }

    /// Record an answer for the current item and advance the cursor.
    pub fn answer(&mut self, option_index: usize) -> Result<(), SessionError> {
        self.record(self.position, option_index)?;
        self.position += 1;
        Ok(())
    }

    /// Leave the current item unanswered and advance.
    pub fn skip(&mut self) {
        if self.position < self.instrument.items.len() {
            self.position += 1;
        }
    }

    /// Move the cursor back one item; an earlier answer can be replaced
    /// by answering again.
    pub fn back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Score the collected responses and package them for storage.
    pub fn finish(&self) -> Result<Submission, ScoreError> {
        let report = scoring::compute_scores(self.instrument, &self.responses)?;
        Ok(Submission {
            id: self.id,
            instrument_id: self.instrument.id.clone(),
            responses: self.responses.clone(),
            report,
            completed_at: jiff::Timestamp::now(),
        })
    }
}
