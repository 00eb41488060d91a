//! Result presentation — pairing scores with resume names, ordering, the
//! inclusive minimum-score filter, and CSV rendering.
//!
//! Scores keep full precision in memory and in JSON; CSV is a display
//! format and rounds to two decimal places.

use serde::{Deserialize, Serialize};

/// One ranked candidate: the caller-supplied resume identifier (typically a
/// file name) and its cosine similarity against the job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResume {
    pub resume: String,
    pub score: f64,
}

/// Pairs resume names with their scores, positionally. Callers must pass
/// slices of equal length (the ranker guarantees one score per resume).
pub fn pair_with_names(names: &[String], scores: &[f64]) -> Vec<ScoredResume> {
    names
        .iter()
        .zip(scores)
        .map(|(name, &score)| ScoredResume {
            resume: name.clone(),
            score,
        })
        .collect()
}

/// Sorts descending by score. Stable: equal scores keep their input order.
pub fn sort_descending(rankings: &mut [ScoredResume]) {
    rankings.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Keeps candidates at or above the threshold (inclusive).
pub fn filter_by_threshold(rankings: Vec<ScoredResume>, threshold: f64) -> Vec<ScoredResume> {
    rankings
        .into_iter()
        .filter(|r| r.score >= threshold)
        .collect()
}

/// Renders rankings as CSV with header `Resume,Score`, scores to two
/// decimal places. Names are quoted RFC-4180 style when they contain a
/// comma, quote, or newline.
pub fn to_csv(rankings: &[ScoredResume]) -> String {
    let mut out = String::from("Resume,Score\n");
    for ranked in rankings {
        out.push_str(&csv_field(&ranked.resume));
        out.push(',');
        out.push_str(&format!("{:.2}", ranked.score));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
