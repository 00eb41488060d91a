//! Ranker — pluggable, trait-based scorer that measures resumes against a
//! job description.
//!
//! Default: `TfidfRanker` (pure-Rust, fast, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn Ranker>`, so a different backend can be
//! swapped in without touching handlers.

use crate::ranking::tfidf::{cosine, vectorize};
use crate::ranking::tokenizer::tokenize;

/// The ranking trait. One score per resume, in input order.
///
/// Implementations must be pure: no randomness, no external state, no
/// mutation of inputs. Any textual input is valid — the contract is that
/// `rank` never fails, it only scores low.
pub trait Ranker: Send + Sync {
    /// Scores each resume against the job description. Guarantees:
    /// output length equals `resumes.len()`, every score lies in [0, 1],
    /// and identical inputs produce bit-identical output.
    fn rank(&self, job_description: &str, resumes: &[String]) -> Vec<f64>;
}

/// TF-IDF + cosine-similarity ranker.
///
/// Algorithm:
/// 1. Pool the job description (index 0) and resumes into one corpus.
/// 2. Tokenize, build the vocabulary and smoothed-IDF weights from that
///    corpus alone, L2-normalize each document vector.
/// 3. Score each resume as the cosine of its vector against the job
///    description's vector; zero-norm vectors score 0.0.
pub struct TfidfRanker {
    filter_stop_words: bool,
}

impl TfidfRanker {
    pub fn new(filter_stop_words: bool) -> Self {
        Self { filter_stop_words }
    }
}

impl Ranker for TfidfRanker {
    fn rank(&self, job_description: &str, resumes: &[String]) -> Vec<f64> {
        if resumes.is_empty() {
            return Vec::new();
        }

        let mut corpus = Vec::with_capacity(resumes.len() + 1);
        corpus.push(tokenize(job_description, self.filter_stop_words));
        corpus.extend(resumes.iter().map(|r| tokenize(r, self.filter_stop_words)));

        let vectors = vectorize(&corpus);
        let jd_vector = &vectors[0];

        vectors[1..].iter().map(|v| cosine(jd_vector, v)).collect()
    }
}
