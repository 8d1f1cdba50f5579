//! Knowledge-key derivation: configurable query normalization + blake3.
//!
//! Two queries share a cache entry iff they normalize to the same string.
//! Normalization never drops letters, digits, or CJK ideographs — only
//! case, punctuation, and spacing variants merge.

use crate::config::KeyConfig;

/// CJK punctuation treated like ASCII punctuation when stripping.
const CJK_PUNCTUATION: &str = "，。！？、：；“”‘’（）【】《》〈〉…—～·";

/// Derive the deterministic knowledge key for a query.
pub fn knowledge_key(query: &str, config: &KeyConfig) -> String {
    let normalized = normalize_query(query, config);
    blake3::hash(normalized.as_bytes()).to_hex().to_string()
}

/// Apply the configured normalization steps to a query.
pub fn normalize_query(query: &str, config: &KeyConfig) -> String {
    let mut out = String::with_capacity(query.len());
    for ch in query.chars() {
        let stripped = config.strip_punctuation && is_punctuation(ch);
        if stripped {
            // Punctuation becomes a separator so "a,b" and "a b" merge
            // while "ab" stays distinct.
            out.push(' ');
        } else if config.case_fold {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            out.push(ch);
        }
    }

    if config.collapse_whitespace {
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        out.trim().to_string()
    }
}

fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation() || CJK_PUNCTUATION.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_and_case_variants_share_a_key() {
        let config = KeyConfig::default();
        let a = knowledge_key("What causes  Fever?", &config);
        let b = knowledge_key("what causes fever", &config);
        assert_eq!(a, b);
    }

    #[test]
    fn cjk_punctuation_variants_share_a_key() {
        let config = KeyConfig::default();
        let a = knowledge_key("咳嗽，发烧", &config);
        let b = knowledge_key("咳嗽 发烧", &config);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_queries_get_distinct_keys() {
        let config = KeyConfig::default();
        let a = knowledge_key("咳嗽发烧", &config);
        let b = knowledge_key("头痛", &config);
        assert_ne!(a, b);
    }

    #[test]
    fn normalization_is_idempotent() {
        let config = KeyConfig::default();
        let once = normalize_query("  Hello,  WORLD！ ", &config);
        let twice = normalize_query(&once, &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn punctuation_stripping_can_be_disabled() {
        let config = KeyConfig {
            strip_punctuation: false,
            ..KeyConfig::default()
        };
        let a = knowledge_key("a,b", &config);
        let b = knowledge_key("a b", &config);
        assert_ne!(a, b);
    }
}
