//! Risk keyword scanning over proposed action text.
//!
//! Five fixed categories of high-risk phrasing. The score counts how many
//! categories match at all, not how many individual hits occur; three
//! matched categories saturate the score at 1.0.

use lazy_static::lazy_static;
use regex::Regex;

/// Number of matched categories at which the risk score saturates.
const SATURATION_CATEGORIES: f64 = 3.0;

lazy_static! {
    static ref RISK_CATEGORIES: Vec<(&'static str, Regex)> = vec![
        (
            "urgency",
            Regex::new(r"(?i)\b(urgent|immediate|asap|emergency|critical|secret|confidential|private)\b")
                .expect("urgency pattern"),
        ),
        (
            "override",
            Regex::new(r"(?i)\b(ignore|bypass|skip|override|disable|remove|delete|erase)\b")
                .expect("override pattern"),
        ),
        (
            "financial",
            Regex::new(r"(?i)\b(transfer|send|wire|payment|invoice|refund)\b")
                .expect("financial pattern"),
        ),
        (
            "suspicion",
            Regex::new(r"(?i)\b(unauthorized|unverified|unknown|suspicious|unusual)\b")
                .expect("suspicion pattern"),
        ),
        (
            "imperative",
            Regex::new(r"(?i)\b(do not|don'?t|never|always|must|required)\b")
                .expect("imperative pattern"),
        ),
    ];
}

/// Names of the risk categories with at least one match in `text`.
pub fn matched_categories(text: &str) -> Vec<&'static str> {
    RISK_CATEGORIES
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| *name)
        .collect()
}

/// Risk score in [0.0, 1.0] for the given text.
pub fn risk_score(text: &str) -> f64 {
    let hits = matched_categories(text).len();
    (hits as f64 / SATURATION_CATEGORIES).min(1.0)
}
