//! TF-IDF vectorization over a pooled corpus, plus sparse-vector cosine.
//!
//! Semantics follow the standard smoothed-IDF convention:
//! `idf(t) = ln((1 + n_docs) / (1 + df(t))) + 1`, raw term counts scaled by
//! IDF, then L2-normalized per document. Vectors are sparse (term index →
//! weight) but the numbers match the dense computation exactly.
//!
//! Vocabulary indices are assigned in sorted term order and vectors keep
//! their entries sorted, so float accumulation order is fixed and identical
//! inputs produce bit-identical scores.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// One document's TF-IDF vector: (term index, weight) pairs sorted by index,
/// L2-normalized. A document with no tokens has no entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVector {
    terms: Vec<(usize, f64)>,
}

impl DocumentVector {
    /// True when the document contributed no tokens (empty text, or all
    /// tokens filtered). Cosine against a zero vector is defined as 0.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Vectorizes a tokenized corpus. The vocabulary and IDF weights are derived
/// from this corpus alone — nothing is cached across calls.
pub fn vectorize(corpus: &[Vec<String>]) -> Vec<DocumentVector> {
    // Vocabulary: distinct terms, indexed in sorted order.
    let vocabulary: BTreeMap<&str, usize> = corpus
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .enumerate()
        .map(|(index, term)| (term, index))
        .collect();

    // Document frequency: number of documents containing each term at least once.
    let mut df = vec![0usize; vocabulary.len()];
    for doc in corpus {
        for term in doc.iter().map(String::as_str).collect::<BTreeSet<&str>>() {
            df[vocabulary[term]] += 1;
        }
    }

    let n_docs = corpus.len() as f64;
    let idf: Vec<f64> = df
        .iter()
        .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
        .collect();

    corpus
        .iter()
        .map(|doc| {
            let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
            for term in doc {
                *counts.entry(vocabulary[term.as_str()]).or_insert(0.0) += 1.0;
            }

            let mut terms: Vec<(usize, f64)> = counts
                .into_iter()
                .map(|(index, tf)| (index, tf * idf[index]))
                .collect();

            let norm = terms.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in &mut terms {
                    *w /= norm;
                }
            }

            DocumentVector { terms }
        })
        .collect()
}

/// Cosine similarity of two L2-normalized sparse vectors (their dot product),
/// clamped to [0, 1] against float rounding. Zero-norm vectors score 0.0.
pub fn cosine(a: &DocumentVector, b: &DocumentVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }

    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.terms.len() && j < b.terms.len() {
        match a.terms[i].0.cmp(&b.terms[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += a.terms[i].1 * b.terms[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    dot.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_documents_have_cosine_one() {
        let corpus = vec![tokens(&["rust", "engineer"]), tokens(&["rust", "engineer"])];
        let vectors = vectorize(&corpus);
        let similarity = cosine(&vectors[0], &vectors[1]);
        assert!((similarity - 1.0).abs() < 1e-9, "got {similarity}");
    }

    #[test]
    fn test_disjoint_documents_have_cosine_zero() {
        let corpus = vec![tokens(&["alpha", "beta"]), tokens(&["gamma", "delta"])];
        let vectors = vectorize(&corpus);
        assert_eq!(cosine(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let corpus = vec![tokens(&["rust"]), vec![]];
        let vectors = vectorize(&corpus);
        assert!(!vectors[0].is_zero());
        assert!(vectors[1].is_zero());
        assert_eq!(cosine(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_vectors_are_l2_normalized() {
        let corpus = vec![
            tokens(&["rust", "rust", "sql", "kafka"]),
            tokens(&["rust", "python"]),
        ];
        for vector in vectorize(&corpus) {
            let norm: f64 = vector.terms.iter().map(|(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_smoothed_idf_values() {
        // Corpus of 2 docs: "rust" appears in both (df=2), "sql" in one (df=1).
        let corpus = vec![tokens(&["rust", "sql"]), tokens(&["rust"])];
        let vectors = vectorize(&corpus);

        // Terms sorted: rust=0, sql=1.
        let idf_rust = ((1.0 + 2.0_f64) / (1.0 + 2.0)).ln() + 1.0; // = 1.0
        let idf_sql = ((1.0 + 2.0_f64) / (1.0 + 1.0)).ln() + 1.0;
        let norm = (idf_rust * idf_rust + idf_sql * idf_sql).sqrt();

        let expected = vec![(0, idf_rust / norm), (1, idf_sql / norm)];
        assert_eq!(vectors[0].terms, expected);
        assert_eq!(vectors[1].terms, vec![(0, 1.0)]);
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        // "rust" is everywhere, "kafka" only in two docs; the doc sharing the
        // rare term should be closer to the query doc.
        let corpus = vec![
            tokens(&["rust", "kafka"]),
            tokens(&["rust", "kafka", "postgres"]),
            tokens(&["rust", "python", "django"]),
        ];
        let vectors = vectorize(&corpus);
        let with_rare = cosine(&vectors[0], &vectors[1]);
        let without_rare = cosine(&vectors[0], &vectors[2]);
        assert!(with_rare > without_rare);
    }

    #[test]
    fn test_term_frequency_matters() {
        let corpus = vec![
            tokens(&["rust", "java"]),
            tokens(&["rust", "rust", "rust", "cobol"]),
            tokens(&["rust", "ada", "ada", "ada"]),
        ];
        let vectors = vectorize(&corpus);
        // More "rust" mass should mean more similarity to the rust-heavy query.
        assert!(cosine(&vectors[0], &vectors[1]) > cosine(&vectors[0], &vectors[2]));
    }

    #[test]
    fn test_vectorize_is_deterministic() {
        let corpus = vec![
            tokens(&["zebra", "apple", "mango", "apple"]),
            tokens(&["mango", "zebra", "kiwi"]),
        ];
        assert_eq!(vectorize(&corpus), vectorize(&corpus));
    }
}
