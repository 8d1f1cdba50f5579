use std::collections::HashMap;

use meridian_core::intent::IntentData;
use meridian_core::traits::DimensionScorer;

use super::char_len;

/// Checklist items per intent kind, each with its synonym expansion. A
/// checklist item counts as covered when any synonym appears in the answer.
fn checklist_for(intent_kind: &str) -> Vec<Vec<&'static str>> {
    match intent_kind {
        "diagnosis" => vec![
            vec!["症状", "表现", "临床表现", "症候"],
            vec!["病因", "病理", "发病原因", "致病因素"],
            vec!["建议", "措施", "方法", "处理", "应对"],
            vec!["注意", "提示", "警告", "禁忌", "慎用"],
        ],
        "medication" => vec![
            vec!["作用", "功效", "药效", "药理", "机制", "适应症"],
            vec!["用法", "用量", "服法", "服用方法", "剂量", "给药"],
            vec!["副作用", "不良反应", "毒副作用", "不良事件"],
            vec!["禁忌", "慎用", "忌用", "不宜", "禁用"],
        ],
        "treatment" => vec![
            vec!["目标", "目的", "预期", "治疗目的"],
            vec!["方法", "手段", "疗法", "治疗手段", "治疗措施"],
            vec!["效果", "疗效", "结果", "预后"],
            vec!["风险", "危险", "副作用", "并发症", "后遗症"],
        ],
        "lifestyle" => vec![
            vec!["生活", "习惯", "日常", "起居", "作息"],
            vec!["饮食", "饮食指导", "饮食调理"],
            vec!["运动", "锻炼", "活动", "健身"],
            vec!["预防", "防治", "防范", "防护"],
        ],
        // Generic checklist for unclassified intents.
        _ => vec![
            vec!["建议", "措施", "方法", "处理"],
            vec!["原因", "解释", "说明"],
            vec!["注意", "提示", "警告"],
        ],
    }
}

/// Chinese function words excluded from query keyword extraction.
const STOPWORDS: &[&str] = &[
    "的", "了", "是", "在", "我", "有", "和", "就", "不", "人", "都", "一个", "很",
    "说", "要", "你", "没有", "自己", "这",
];

/// Checklist coverage 0.5 + answer length 0.3 + query keyword coverage 0.2.
pub struct CompletenessScorer;

impl CompletenessScorer {
    /// Top query tokens by frequency: alphanumeric runs, stopwords and
    /// single characters dropped. CJK runs between punctation marks come
    /// out whole, which is as fine-grained as containment matching needs.
    fn query_keywords(query: &str) -> Vec<String> {
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for token in query.split(|c: char| !c.is_alphanumeric()) {
            if char_len(token) < 2 || STOPWORDS.contains(&token) {
                continue;
            }
            *frequency.entry(token).or_insert(0) += 1;
        }
        let mut tokens: Vec<(&str, usize)> = frequency.into_iter().collect();
        tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tokens
            .into_iter()
            .take(5)
            .map(|(token, _)| token.to_string())
            .collect()
    }
}

impl DimensionScorer for CompletenessScorer {
    fn dimension(&self) -> &str {
        "completeness"
    }

    fn score(&self, query: &str, response: &str, intent: &IntentData) -> f64 {
        let checklist = checklist_for(&intent.intent_kind);
        let covered = checklist
            .iter()
            .filter(|synonyms| synonyms.iter().any(|s| response.contains(s)))
            .count();
        let coverage_score = covered as f64 / checklist.len() as f64;

        let length_score = (char_len(response) as f64 / 500.0).min(1.0);

        let keywords = Self::query_keywords(query);
        let keyword_coverage = if keywords.is_empty() {
            1.0
        } else {
            keywords.iter().filter(|k| response.contains(k.as_str())).count() as f64
                / keywords.len() as f64
        };

        0.5 * coverage_score + 0.3 * length_score + 0.2 * keyword_coverage
    }
}
