//! Text and JSON rendering of score reports.

use burnout_core::models::instrument::InstrumentDefinition;
use burnout_core::models::report::ScoreReport;
use burnout_core::models::submission::Submission;
use burnout_core::scoring::classify_band;

use crate::messages::Catalog;

/// Render a report as plain text, one line per gauge the web UI would
/// show. Domains with no numeric score are reported as insufficient data
/// rather than shown as zero.
pub fn render_text(
    instrument: &InstrumentDefinition,
    report: &ScoreReport,
    catalog: &Catalog,
) -> String {
    let mut out = String::new();

    match report.overall {
        Some(score) => {
            let band = classify_band(instrument, score);
            out.push_str(&catalog.overall_line(&instrument.title, score, &band.label));
        }
        None => out.push_str(&catalog.overall_insufficient()),
    }
    out.push('\n');

    for domain_score in &report.domain_scores {
        let name = instrument
            .domain(&domain_score.domain)
            .map(|d| d.name.as_str())
            .unwrap_or(domain_score.domain.as_str());
        match domain_score.score {
            Some(score) => {
                let band = classify_band(instrument, score);
                out.push_str(&catalog.domain_line(name, score, &band.label));
            }
            None => out.push_str(&catalog.insufficient_data(name)),
        }
        out.push('\n');
    }

    out
}

/// Render a submission as pretty JSON, the shape the storage layer
/// consumes.
pub fn render_json(submission: &Submission) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(submission)
}
