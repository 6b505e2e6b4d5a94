//! User-facing message templates for the terminal UI.
//!
//! The original web UI resolved free-form key paths against a translation
//! table at render time; a typo surfaced as a blank string in production.
//! Here every message is a typed method on [`Catalog`], so a missing key
//! cannot survive compilation. The scoring core never touches this
//! module.

#[derive(Debug, Default)]
pub struct Catalog;

impl Catalog {
    pub fn progress(&self, answered: usize, total: usize) -> String {
        format!("{answered}/{total} answered")
    }

    pub fn item_prompt(&self, number: usize, total: usize, text: &str) -> String {
        format!("[{number}/{total}] {text}")
    }

    pub fn option_line(&self, number: usize, label: &str) -> String {
        format!("  {number}. {label}")
    }

    pub fn input_hint(&self) -> String {
        "Enter an option number, press Enter to skip, or 'b' to go back.".to_string()
    }

    pub fn invalid_option(&self, options: usize) -> String {
        format!("Enter a number between 1 and {options}, or press Enter to skip.")
    }

    pub fn overall_line(&self, title: &str, score: f64, band: &str) -> String {
        format!("{title}: {score:.1}% ({band})")
    }

    pub fn domain_line(&self, name: &str, score: f64, band: &str) -> String {
        format!("  {name}: {score:.1}% ({band})")
    }

    pub fn insufficient_data(&self, name: &str) -> String {
        format!("  {name}: insufficient data")
    }

    pub fn overall_insufficient(&self) -> String {
        "No items answered; no overall index can be computed.".to_string()
    }
}
