//! JD keyword extraction and the matched / missing report shown beside a score.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::similarity::stopwords::is_stop_word;
use crate::similarity::tokenizer::tokenize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordReport {
    /// JD keywords that also occur in the resume.
    pub matched: Vec<String>,
    /// JD keywords the resume never mentions.
    pub missing: Vec<String>,
}

/// Top `limit` keywords of a job description.
///
/// Tokens that are not stop words, ranked by frequency descending; ties keep
/// first-appearance order.
pub fn extract_keywords(jd_text: &str, limit: usize) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for token in tokenize(jd_text) {
        if is_stop_word(&token) {
            continue;
        }
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // sort_by is stable, so equal counts stay in appearance order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(limit);
    order
}

/// Splits the JD's top keywords into those the resume covers and those it lacks.
pub fn keyword_report(resume_text: &str, jd_text: &str, limit: usize) -> KeywordReport {
    let resume_tokens: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let (matched, missing) = extract_keywords(jd_text, limit)
        .into_iter()
        .partition(|kw| resume_tokens.contains(kw));

    KeywordReport { matched, missing }
}
