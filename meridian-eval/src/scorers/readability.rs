use meridian_core::intent::IntentData;
use meridian_core::traits::DimensionScorer;

use super::char_len;

const SENTENCE_TERMINATORS: &[char] = &['。', '！', '？', '.', '!', '?'];

const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '、', '：', '；', '（', '）', '【', '】', '《', '》',
    '“', '”', '‘', '’', ',', '.', '!', '?', ':', ';', '\'', '"', '(', ')', '[',
    ']', '<', '>',
];

/// Prefixes that mark a numbered list item ("1、", "一、", "2.", ...).
fn starts_numbered(paragraph: &str) -> bool {
    let trimmed = paragraph.trim_start();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_numeral = first.is_ascii_digit()
        || matches!(
            first,
            '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十'
        );
    is_numeral && matches!(chars.next(), Some('、') | Some('.') | Some('．'))
}

/// Short paragraphs, short sentences, a sane punctuation ratio, and a
/// numbered-list bonus, mixed 0.3 / 0.3 / 0.3 / 0.1.
pub struct ReadabilityScorer;

impl DimensionScorer for ReadabilityScorer {
    fn dimension(&self) -> &str {
        "readability"
    }

    fn score(&self, _query: &str, response: &str, _intent: &IntentData) -> f64 {
        let total_chars = char_len(response).max(1);

        let paragraphs: Vec<&str> = response.split("\n\n").collect();
        let avg_paragraph = paragraphs.iter().map(|p| char_len(p)).sum::<usize>() as f64
            / paragraphs.len().max(1) as f64;
        let paragraph_score = (200.0 / avg_paragraph.max(1.0)).min(1.0);

        let sentences: Vec<&str> = response
            .split(SENTENCE_TERMINATORS)
            .filter(|s| !s.trim().is_empty())
            .collect();
        let avg_sentence = sentences.iter().map(|s| char_len(s)).sum::<usize>() as f64
            / sentences.len().max(1) as f64;
        let sentence_score = (50.0 / avg_sentence.max(1.0)).min(1.0);

        let punctuation_count = response.chars().filter(|c| PUNCTUATION.contains(c)).count();
        let ratio = punctuation_count as f64 / total_chars as f64;
        let punctuation_score = if (0.05..=0.15).contains(&ratio) {
            1.0
        } else {
            (1.0 - (ratio - 0.1).abs() * 10.0).max(0.0)
        };

        let list_score = if paragraphs.iter().any(|p| starts_numbered(p)) {
            0.2
        } else {
            0.0
        };

        0.3 * paragraph_score + 0.3 * sentence_score + 0.3 * punctuation_score + 0.1 * list_score
    }
}
