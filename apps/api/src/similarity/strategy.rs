//! Similarity strategies — one trait, several interchangeable backends.
//!
//! Default: `TermFrequencyStrategy` (raw term-frequency cosine).
//! Also built: `TfIdfStrategy` in unigram and 1–2-gram flavours.
//! Named but never available: word-vector and sentence-embedding similarity,
//! which need pretrained model weights this service does not ship.
//!
//! `AppState` holds a `StrategyRegistry`; requests pick a strategy by name.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::similarity::cosine::cosine_similarity;
use crate::similarity::tfidf::TfIdfStrategy;
use crate::similarity::tokenizer::tokenize;
use crate::similarity::vector::build_term_frequency;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A document similarity backend. Implement this to add a scoring technique
/// without touching the handlers or the comparison pipeline.
///
/// Implementations must be pure: the same inputs always give the same score,
/// the result lies in [0, 1], and degenerate input scores 0.0.
pub trait SimilarityStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn score(&self, document_a: &str, document_b: &str) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrategyKind {
    #[serde(rename = "term_frequency")]
    TermFrequency,
    #[serde(rename = "tfidf")]
    TfIdf,
    #[serde(rename = "tfidf_ngram")]
    TfIdfNgram,
    #[serde(rename = "word_vectors")]
    WordVectors,
    #[serde(rename = "sentence_embedding")]
    SentenceEmbedding,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::TermFrequency,
        StrategyKind::TfIdf,
        StrategyKind::TfIdfNgram,
        StrategyKind::WordVectors,
        StrategyKind::SentenceEmbedding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::TermFrequency => "term_frequency",
            StrategyKind::TfIdf => "tfidf",
            StrategyKind::TfIdfNgram => "tfidf_ngram",
            StrategyKind::WordVectors => "word_vectors",
            StrategyKind::SentenceEmbedding => "sentence_embedding",
        }
    }

    /// Embedding-backed strategies need model weights and are never available.
    pub fn is_available(&self) -> bool {
        !matches!(
            self,
            StrategyKind::WordVectors | StrategyKind::SentenceEmbedding
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| StrategyError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("Unknown similarity strategy '{0}'")]
    Unknown(String),

    #[error("Similarity strategy '{0}' is not available: it requires pretrained model weights")]
    Unavailable(StrategyKind),
}

// ────────────────────────────────────────────────────────────────────────────
// TermFrequencyStrategy — default
// ────────────────────────────────────────────────────────────────────────────

/// Raw term-frequency cosine similarity: tokenize, count, cosine.
pub struct TermFrequencyStrategy;

impl SimilarityStrategy for TermFrequencyStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TermFrequency
    }

    fn score(&self, document_a: &str, document_b: &str) -> f64 {
        let a = build_term_frequency(&tokenize(document_a));
        let b = build_term_frequency(&tokenize(document_b));
        cosine_similarity(&a, &b)
    }
}

/// Constructs the backend for `kind`. No fallback: an unavailable kind is an error.
pub fn build_strategy(kind: StrategyKind) -> Result<Arc<dyn SimilarityStrategy>, StrategyError> {
    match kind {
        StrategyKind::TermFrequency => Ok(Arc::new(TermFrequencyStrategy)),
        StrategyKind::TfIdf => Ok(Arc::new(TfIdfStrategy::unigram())),
        StrategyKind::TfIdfNgram => Ok(Arc::new(TfIdfStrategy::with_bigrams())),
        StrategyKind::WordVectors | StrategyKind::SentenceEmbedding => {
            Err(StrategyError::Unavailable(kind))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StrategyInfo {
    pub name: StrategyKind,
    pub available: bool,
    pub is_default: bool,
}

/// All available strategies, built once at startup, plus the configured default.
#[derive(Clone)]
pub struct StrategyRegistry {
    default: StrategyKind,
    strategies: HashMap<StrategyKind, Arc<dyn SimilarityStrategy>>,
}

impl StrategyRegistry {
    /// Fails if the configured default cannot be built.
    pub fn new(default: StrategyKind) -> Result<Self, StrategyError> {
        if !default.is_available() {
            return Err(StrategyError::Unavailable(default));
        }

        let strategies = StrategyKind::ALL
            .into_iter()
            .filter(|kind| kind.is_available())
            .map(|kind| build_strategy(kind).map(|s| (kind, s)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            default,
            strategies,
        })
    }

    pub fn default_kind(&self) -> StrategyKind {
        self.default
    }

    /// Looks up a strategy by name, or the default when `name` is `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<Arc<dyn SimilarityStrategy>, StrategyError> {
        let kind = match name {
            Some(n) => n.parse::<StrategyKind>()?,
            None => self.default,
        };
        self.strategies
            .get(&kind)
            .cloned()
            .ok_or(StrategyError::Unavailable(kind))
    }

    pub fn describe(&self) -> Vec<StrategyInfo> {
        StrategyKind::ALL
            .into_iter()
            .map(|kind| StrategyInfo {
                name: kind,
                available: self.strategies.contains_key(&kind),
                is_default: kind == self.default,
            })
            .collect()
    }
}
