//! TF-IDF similarity strategy.
//!
//! The two documents being compared form the whole corpus. Terms are word
//! n-grams from `tokenize`, optionally with English stop words removed first.
//! Weights are raw counts times a smoothed IDF:
//!
//!   idf(t) = ln((1 + n_docs) / (1 + df(t))) + 1
//!
//! so a term found in both documents weighs 1.0 and a term found in one weighs
//! ln(1.5) + 1. The score is the cosine between the two weighted vectors.

use crate::similarity::stopwords::is_stop_word;
use crate::similarity::strategy::{SimilarityStrategy, StrategyKind};
use crate::similarity::tokenizer::tokenize;
use crate::similarity::vector::{build_term_frequency, TermFrequency};

const CORPUS_SIZE: u32 = 2;

#[derive(Debug, Clone)]
pub struct TfIdfStrategy {
    /// Longest word n-gram emitted; 1 means unigrams only.
    pub max_ngram: usize,
    pub remove_stop_words: bool,
}

impl TfIdfStrategy {
    pub fn unigram() -> Self {
        Self {
            max_ngram: 1,
            remove_stop_words: true,
        }
    }

    /// Unigrams plus bigrams.
    pub fn with_bigrams() -> Self {
        Self {
            max_ngram: 2,
            remove_stop_words: true,
        }
    }

    /// Terms of `text`: all word n-grams for n in 1..=max_ngram, joined by a space.
    fn terms(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|t| !(self.remove_stop_words && is_stop_word(t)))
            .collect();

        let mut terms = Vec::with_capacity(tokens.len() * self.max_ngram.max(1));
        for n in 1..=self.max_ngram.max(1) {
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        terms
    }
}

impl SimilarityStrategy for TfIdfStrategy {
    fn kind(&self) -> StrategyKind {
        if self.max_ngram > 1 {
            StrategyKind::TfIdfNgram
        } else {
            StrategyKind::TfIdf
        }
    }

    fn score(&self, document_a: &str, document_b: &str) -> f64 {
        let a = build_term_frequency(&self.terms(document_a));
        let b = build_term_frequency(&self.terms(document_b));
        weighted_cosine(&a, &b)
    }
}

fn smooth_idf(document_frequency: u32) -> f64 {
    (f64::from(1 + CORPUS_SIZE) / f64::from(1 + document_frequency)).ln() + 1.0
}

fn document_frequency(term: &str, a: &TermFrequency, b: &TermFrequency) -> u32 {
    u32::from(a.get(term) > 0) + u32::from(b.get(term) > 0)
}

fn weighted_norm(tf: &TermFrequency, a: &TermFrequency, b: &TermFrequency) -> f64 {
    tf.iter()
        .map(|(term, count)| {
            let w = f64::from(count) * smooth_idf(document_frequency(term, a, b));
            w * w
        })
        .sum::<f64>()
        .sqrt()
}

fn weighted_cosine(a: &TermFrequency, b: &TermFrequency) -> f64 {
    let denominator = weighted_norm(a, a, b) * weighted_norm(b, a, b);
    if denominator == 0.0 {
        return 0.0;
    }

    // Shared terms have df = 2; visit them in sorted order so the sum does not
    // depend on which document came first.
    let shared_idf = smooth_idf(CORPUS_SIZE);
    let dot: f64 = a
        .iter()
        .filter_map(|(term, count_a)| {
            let count_b = b.get(term);
            (count_b > 0).then(|| {
                (f64::from(count_a) * shared_idf) * (f64::from(count_b) * shared_idf)
            })
        })
        .sum();

    (dot / denominator).clamp(0.0, 1.0)
}
