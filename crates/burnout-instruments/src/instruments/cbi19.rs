use std::collections::BTreeMap;
use std::sync::LazyLock;

use burnout_core::models::instrument::{
    Band, DomainDef, InstrumentDefinition, Item, ResponseScale,
};

/// CBI-19: Copenhagen Burnout Inventory, 19 items.
/// Three domains: personal (6 items), work (7 items, item 13
/// reverse-coded), patient (6 items). Both scales share the 0-100 value
/// range, so reversal mirrors around 100.
pub fn cbi19() -> &'static InstrumentDefinition {
    static DEF: LazyLock<InstrumentDefinition> = LazyLock::new(|| {
        let items = [
            (1, "How often do you feel tired?", "personal", "a", false),
            (
                2,
                "How often are you physically exhausted?",
                "personal",
                "a",
                false,
            ),
            (
                3,
                "How often are you emotionally exhausted?",
                "personal",
                "a",
                false,
            ),
            (
                4,
                "How often do you think: \"I can't take it anymore\"?",
                "personal",
                "a",
                false,
            ),
            (5, "How often do you feel worn out?", "personal", "a", false),
            (
                6,
                "How often do you feel weak and susceptible to illness?",
                "personal",
                "a",
                false,
            ),
            (7, "Is your work emotionally exhausting?", "work", "b", false),
            (
                8,
                "Do you feel burned out because of your work?",
                "work",
                "b",
                false,
            ),
            (9, "Does your work frustrate you?", "work", "b", false),
            (
                10,
                "Do you feel worn out at the end of the working day?",
                "work",
                "a",
                false,
            ),
            (
                11,
                "Are you exhausted in the morning at the thought of another day at work?",
                "work",
                "a",
                false,
            ),
            (
                12,
                "Do you feel that every working hour is tiring for you?",
                "work",
                "a",
                false,
            ),
            (
                13,
                "Do you have enough energy for family and friends during leisure time?",
                "work",
                "a",
                true,
            ),
            (
                14,
                "Do you find it hard to work with patients?",
                "patient",
                "b",
                false,
            ),
            (
                15,
                "Do you find it frustrating to work with patients?",
                "patient",
                "b",
                false,
            ),
            (
                16,
                "Does it drain your energy to work with patients?",
                "patient",
                "b",
                false,
            ),
            (
                17,
                "Do you feel that you give more than you get back when you work with patients?",
                "patient",
                "b",
                false,
            ),
            (
                18,
                "Are you tired of working with patients?",
                "patient",
                "a",
                false,
            ),
            (
                19,
                "Do you sometimes wonder how long you will be able to continue working with patients?",
                "patient",
                "a",
                false,
            ),
        ];

        InstrumentDefinition {
            id: "cbi19".to_string(),
            title: "Burnout Check (CBI-19)".to_string(),
            domains: vec![
                domain("personal", "Personal burnout"),
                domain("work", "Work-related burnout"),
                domain("patient", "Patient-related burnout"),
            ],
            response_scales: BTreeMap::from([
                (
                    "a".to_string(),
                    scale([
                        "Never / almost never",
                        "Seldom",
                        "Sometimes",
                        "Often",
                        "Always",
                    ]),
                ),
                (
                    "b".to_string(),
                    scale([
                        "To a very low degree",
                        "To a low degree",
                        "Somewhat",
                        "To a high degree",
                        "To a very high degree",
                    ]),
                ),
            ]),
            items: items
                .iter()
                .map(|&(id, text, domain, scale, reverse)| Item {
                    id,
                    text: text.to_string(),
                    domain: domain.to_string(),
                    scale: scale.to_string(),
                    reverse,
                })
                .collect(),
            bands: vec![
                band(0.0, 49.9, "Low–Moderate strain", "#22C55E"),
                band(50.0, 69.9, "Elevated strain", "#F59E0B"),
                band(70.0, 100.0, "High strain", "#EF4444"),
            ],
        }
    });
    &DEF
}

fn scale(labels: [&str; 5]) -> ResponseScale {
    ResponseScale {
        labels: labels.iter().map(|s| s.to_string()).collect(),
        map: vec![0.0, 25.0, 50.0, 75.0, 100.0],
        ceiling: 100.0,
    }
}

fn domain(id: &str, name: &str) -> DomainDef {
    DomainDef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn band(min: f64, max: f64, label: &str, color: &str) -> Band {
    Band {
        min,
        max,
        label: label.to_string(),
        color: color.to_string(),
    }
}
