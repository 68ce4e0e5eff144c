//! Financial signal detection.
//!
//! A line is a candidate when it carries a dollar amount and at least one
//! financial-intent keyword. Both predicates are configurable: the keyword
//! list is the main recall/precision lever, the amount pattern can be
//! overridden for corpora with unusual formatting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dollar sign, optional space, digits with optional thousands separators and
/// cents, then an optional scale suffix. The suffix must end on a word
/// boundary so "$5 make" records "$5", not "$5 m".
pub const DEFAULT_AMOUNT_PATTERN: &str =
    r"(?i)\$\s?[0-9]{1,3}(?:,?[0-9]{3})*(?:\.[0-9]{2})?(?:\s?(?:million|billion|k|m)\b)?";

static DEFAULT_AMOUNT_RE: Lazy<Result<Regex>> = Lazy::new(|| {
    Regex::new(DEFAULT_AMOUNT_PATTERN).map_err(|e| Error::InvalidConfig(e.to_string()))
});

/// Default financial-intent keywords.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    ["wire", "transfer", "grant", "donation", "payment", "fee", "retainer"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Configuration for the signal detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Financial-intent keywords, matched as case-insensitive substrings.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Override for the amount regex. `None` uses [`DEFAULT_AMOUNT_PATTERN`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_pattern: Option<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            amount_pattern: None,
        }
    }
}

/// A detected candidate signal on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    /// Verbatim text of the first amount match, suffix included.
    pub amount: String,
}

/// Compiled detector. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct SignalDetector {
    amount: Regex,
    keywords: Vec<String>,
}

impl SignalDetector {
    /// Compile a detector from configuration.
    ///
    /// Keywords are lower-cased and blank entries dropped. An empty keyword
    /// list or an amount pattern that fails to compile is rejected.
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let keywords: Vec<String> = config
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(Error::InvalidConfig(
                "detector.keywords must contain at least one keyword".to_string(),
            ));
        }

        let amount = match &config.amount_pattern {
            Some(pattern) => Regex::new(pattern).map_err(|e| {
                Error::InvalidConfig(format!("detector.amount_pattern does not compile: {e}"))
            })?,
            None => match &*DEFAULT_AMOUNT_RE {
                Ok(re) => re.clone(),
                Err(e) => return Err(Error::InvalidConfig(e.to_string())),
            },
        };

        Ok(Self { amount, keywords })
    }

    /// Detector with the default amount pattern and keyword set.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&DetectorConfig::default())
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First amount match on the line, if any.
    #[must_use]
    pub fn find_amount<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.amount.find(line).map(|m| m.as_str())
    }

    /// Whether the lower-cased line contains any configured keyword.
    #[must_use]
    pub fn has_intent(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Evaluate both predicates. `None` is the normal outcome for most lines.
    #[must_use]
    pub fn detect(&self, line: &str) -> Option<Signal> {
        let amount = self.find_amount(line)?;
        if !self.has_intent(line) {
            return None;
        }
        Some(Signal {
            amount: amount.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn detector() -> SignalDetector {
        SignalDetector::with_defaults().expect("default detector should build")
    }

    #[test]
    fn test_wire_transfer_candidate() {
        let signal = detector().detect(
            "Wire transfer of $50,000 to Harvard University approved by J. Epstein.",
        );
        assert_eq!(
            signal,
            Some(Signal {
                amount: "$50,000".to_string()
            })
        );
    }

    #[test]
    fn test_amount_without_keyword() {
        assert!(detector().detect("The weather was $50 today.").is_none());
    }

    #[test]
    fn test_keyword_without_amount() {
        assert!(
            detector()
                .detect("He requested a retainer fee but no amount was specified.")
                .is_none()
        );
    }

    #[test]
    fn test_scale_suffixes() {
        let d = detector();
        assert_eq!(d.find_amount("a $2 million grant"), Some("$2 million"));
        // a one-digit fraction is not cents, and "M" directly after "." is not a suffix
        assert_eq!(d.find_amount("grant of $1.5M"), Some("$1"));
        assert_eq!(d.find_amount("fee $250k paid"), Some("$250k"));
        assert_eq!(d.find_amount("payment $ 3 Billion"), Some("$ 3 Billion"));
        assert_eq!(d.find_amount("fee $1,250.00 due"), Some("$1,250.00"));
    }

    #[test]
    fn test_suffix_requires_word_boundary() {
        assert_eq!(detector().find_amount("fee $5 make good"), Some("$5"));
    }

    #[test]
    fn test_only_first_amount_used() {
        let signal = detector().detect("payment of $10 and then $20");
        assert_eq!(signal.map(|s| s.amount), Some("$10".to_string()));
    }

    #[test]
    fn test_keyword_case_insensitive() {
        assert!(detector().detect("DONATION: $500").is_some());
    }

    #[test]
    fn test_keyword_substring_match() {
        // "transferred" contains "transfer"
        assert!(detector().detect("transferred $900 yesterday").is_some());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_custom_keywords() {
        let config = DetectorConfig {
            keywords: vec!["Invoice".to_string()],
            amount_pattern: None,
        };
        let d = SignalDetector::new(&config).expect("custom detector should build");
        assert_eq!(d.keywords(), ["invoice".to_string()]);
        assert!(d.detect("invoice for $300").is_some());
        assert!(d.detect("wire $300").is_none());
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let config = DetectorConfig {
            keywords: vec!["  ".to_string()],
            amount_pattern: None,
        };
        assert!(matches!(
            SignalDetector::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_amount_pattern_rejected() {
        let config = DetectorConfig {
            keywords: default_keywords(),
            amount_pattern: Some("[unclosed".to_string()),
        };
        assert!(matches!(
            SignalDetector::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_config_serialization() {
        let config = DetectorConfig::default();
        let json = serde_json::to_string(&config).expect("config should serialize");
        assert!(!json.contains("amount_pattern"));
        let back: DetectorConfig =
            serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(back, config);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_config_uses_default_keywords() {
        let config: DetectorConfig = serde_json::from_str("{}").expect("empty object is valid");
        assert_eq!(config.keywords, default_keywords());
    }
}
