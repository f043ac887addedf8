use anyhow::{Context, Result};

use crate::matching::tier::TierThresholds;
use crate::similarity::strategy::StrategyKind;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub strategy: StrategyKind,
    pub tier_thresholds: TierThresholds,
    pub max_upload_bytes: usize,
    pub keyword_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = lookup("SIMILARITY_STRATEGY")
            .unwrap_or_else(|| StrategyKind::TermFrequency.as_str().to_string())
            .parse::<StrategyKind>()
            .context("SIMILARITY_STRATEGY must name a known similarity strategy")?;

        let high = parse_or(&lookup, "TIER_HIGH_THRESHOLD", 70.0_f64)?;
        let moderate = parse_or(&lookup, "TIER_MODERATE_THRESHOLD", 40.0_f64)?;
        let tier_thresholds = TierThresholds::new(high, moderate)?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080_u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            strategy,
            tier_thresholds,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024_usize)?,
            keyword_limit: parse_or(&lookup, "KEYWORD_LIMIT", 20_usize)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.strategy, StrategyKind::TermFrequency);
        assert_eq!(config.tier_thresholds, TierThresholds::default());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.keyword_limit, 20);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("SIMILARITY_STRATEGY", "tfidf_ngram"),
            ("TIER_HIGH_THRESHOLD", "80"),
            ("TIER_MODERATE_THRESHOLD", "50.5"),
            ("KEYWORD_LIMIT", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.strategy, StrategyKind::TfIdfNgram);
        assert_eq!(config.tier_thresholds.high, 80.0);
        assert_eq!(config.tier_thresholds.moderate, 50.5);
        assert_eq!(config.keyword_limit, 5);
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_strategy_fails() {
        assert!(config_from(&[("SIMILARITY_STRATEGY", "bm25")]).is_err());
    }

    #[test]
    fn test_inverted_thresholds_fail() {
        assert!(config_from(&[
            ("TIER_HIGH_THRESHOLD", "30"),
            ("TIER_MODERATE_THRESHOLD", "60"),
        ])
        .is_err());
    }
}
