//! Load-time structural validation of instrument definitions.

use tracing::warn;

use crate::error::ConfigError;
use crate::models::instrument::InstrumentDefinition;

/// Band tables are authored at one-decimal precision, so adjacent bands
/// like `[0, 49.9]` / `[50, 69.9]` leave sub-0.1 gaps that no authored
/// boundary occupies. Gaps wider than this are worth a warning.
const BAND_GAP_TOLERANCE: f64 = 0.1;

impl InstrumentDefinition {
    /// Structural validation. Call once at load time; a definition that
    /// passes is safe to hand to the scoring engine. Does not mutate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyItems(self.id.clone()));
        }

        for (scale_id, scale) in &self.response_scales {
            if scale.labels.len() != scale.map.len() {
                return Err(ConfigError::ScaleLengthMismatch {
                    scale_id: scale_id.clone(),
                    labels: scale.labels.len(),
                    values: scale.map.len(),
                });
            }
            if scale.map.len() < 2 {
                return Err(ConfigError::ScaleTooSmall {
                    scale_id: scale_id.clone(),
                });
            }
            for &value in &scale.map {
                if !(0.0..=scale.ceiling).contains(&value) {
                    return Err(ConfigError::MapValueOutOfRange {
                        scale_id: scale_id.clone(),
                        value,
                        ceiling: scale.ceiling,
                    });
                }
            }
        }

        for item in &self.items {
            if !self.response_scales.contains_key(&item.scale) {
                return Err(ConfigError::UndefinedScale {
                    item_id: item.id,
                    scale_id: item.scale.clone(),
                });
            }
            if self.domain(&item.domain).is_none() {
                return Err(ConfigError::UndeclaredDomain {
                    item_id: item.id,
                    domain: item.domain.clone(),
                });
            }
        }

        for domain in &self.domains {
            if !self.items.iter().any(|i| i.domain == domain.id) {
                return Err(ConfigError::EmptyDomain(domain.id.clone()));
            }
        }

        // The classifier falls back to the first declared band, so there
        // must be one.
        if self.bands.is_empty() {
            return Err(ConfigError::NoBands(self.id.clone()));
        }

        self.diagnose_bands();
        Ok(())
    }

    /// Parse a JSON definition and validate it. This is the "loaded once
    /// at process start" entry point for external configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let definition: InstrumentDefinition = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Gaps and overlaps in the band table are tolerated at runtime
    /// (classification falls back to the first declared band, and the
    /// first declared match wins a tie), but the instrument author should
    /// hear about them.
    fn diagnose_bands(&self) {
        let ceiling = self.max_ceiling();

        let mut by_min: Vec<_> = self.bands.iter().collect();
        by_min.sort_by(|a, b| a.min.total_cmp(&b.min));
        let mut covered = 0.0f64;
        for band in by_min {
            if band.min - covered > BAND_GAP_TOLERANCE {
                warn!(
                    instrument = %self.id,
                    from = covered,
                    to = band.min,
                    "band table gap; scores in it fall back to the first band"
                );
            }
            covered = covered.max(band.max);
        }
        if ceiling - covered > BAND_GAP_TOLERANCE {
            warn!(
                instrument = %self.id,
                from = covered,
                to = ceiling,
                "band table gap; scores in it fall back to the first band"
            );
        }

        for (i, a) in self.bands.iter().enumerate() {
            for b in &self.bands[i + 1..] {
                if a.min <= b.max && b.min <= a.max {
                    warn!(
                        instrument = %self.id,
                        first = %a.label,
                        second = %b.label,
                        "bands overlap; the first declared band wins"
                    );
                }
            }
        }
    }
}
