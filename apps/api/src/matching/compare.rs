//! The comparison pipeline: resume text + JD text → score, tier, keyword report.
//!
//! Stateless. Every call builds its own vectors, so concurrent requests share
//! nothing but the read-only strategy.

use serde::Serialize;

use crate::matching::keywords::{keyword_report, KeywordReport};
use crate::matching::tier::{classify, Tier, TierThresholds};
use crate::similarity::cosine::to_percent;
use crate::similarity::strategy::{SimilarityStrategy, StrategyKind};
use crate::similarity::tokenizer::tokenize;

/// Score and tier for one resume / JD pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// 0.0 – 100.0, rounded to 2 decimals
    pub score_percent: f64,
    pub tier: Tier,
    pub strategy: StrategyKind,
}

/// Comparison plus the context a caller renders next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    #[serde(flatten)]
    pub comparison: Comparison,
    pub message: &'static str,
    pub keywords: KeywordReport,
    pub resume_tokens: usize,
    pub jd_tokens: usize,
}

/// Scores `resume_text` against `jd_text`. Degenerate input scores 0.0 (tier Low).
pub fn compare(
    resume_text: &str,
    jd_text: &str,
    strategy: &dyn SimilarityStrategy,
    thresholds: &TierThresholds,
) -> Comparison {
    let score_percent = to_percent(strategy.score(resume_text, jd_text));
    Comparison {
        score_percent,
        tier: classify(score_percent, thresholds),
        strategy: strategy.kind(),
    }
}

/// Full report: comparison, tier message, keyword coverage, token counts.
pub fn analyze(
    resume_text: &str,
    jd_text: &str,
    strategy: &dyn SimilarityStrategy,
    thresholds: &TierThresholds,
    keyword_limit: usize,
) -> MatchReport {
    let comparison = compare(resume_text, jd_text, strategy, thresholds);
    MatchReport {
        comparison,
        message: comparison.tier.message(),
        keywords: keyword_report(resume_text, jd_text, keyword_limit),
        resume_tokens: tokenize(resume_text).len(),
        jd_tokens: tokenize(jd_text).len(),
    }
}
