//! Built-in Chinese medical lexicons.
//!
//! Four domains and four intent kinds cover the initial deployment; callers
//! that serve other specialties register their own lexicons instead.

use crate::lexicon::Lexicon;

/// Traditional Chinese medicine.
const TCM_KEYWORDS: &[&str] = &[
    "经络", "气血", "阴阳", "五行", "辨证", "脉象", "舌诊", "中药", "方剂", "针灸",
    "艾灸", "推拿", "刮痧", "拔罐", "膏方", "汤剂", "丸剂", "散剂", "膏剂", "丹剂",
    "中成药",
];

/// Western clinical medicine.
const WESTERN_KEYWORDS: &[&str] = &[
    "检查", "化验", "CT", "核磁", "抗生素", "手术", "西药", "输液", "注射", "X光",
    "B超", "血常规", "尿常规", "心电图", "造影", "活检", "病理", "诊断", "预后",
];

const PHARMACOLOGY_KEYWORDS: &[&str] = &[
    "药效", "药代动力学", "不良反应", "禁忌症", "适应症", "用药指导", "药物相互作用",
    "药物过敏", "剂量", "给药途径", "半衰期", "血药浓度",
];

const NUTRITION_KEYWORDS: &[&str] = &[
    "营养", "饮食", "热量", "蛋白质", "脂肪", "碳水化合物", "维生素", "矿物质",
    "膳食纤维", "食谱", "饮食指导", "营养不良", "营养过剩",
];

const DIAGNOSIS_KEYWORDS: &[&str] = &[
    "是什么病", "怎么回事", "什么原因", "为什么会", "诊断", "检查", "症状", "表现",
    "怎么确诊", "需要做什么检查", "是否患有", "可能是",
];

const MEDICATION_KEYWORDS: &[&str] = &[
    "用什么药", "吃什么药", "用药", "药效", "副作用", "禁忌", "能吃", "能用",
    "如何服用", "用量", "用法", "药物相互作用",
];

const TREATMENT_KEYWORDS: &[&str] = &[
    "怎么治疗", "如何治疗", "治疗方法", "治疗方案", "怎么办", "如何缓解",
    "如何改善", "治愈率", "疗程", "手术", "保守治疗",
];

const LIFESTYLE_KEYWORDS: &[&str] = &[
    "如何预防", "怎样保养", "日常注意", "生活方式", "饮食建议", "运动建议",
    "调理", "保健", "养生", "护理",
];

/// Urgency markers. Any emergency hit outweighs elevated hits.
const EMERGENCY_MARKERS: &[&str] = &[
    "立即", "马上", "急", "紧急", "危险", "生命危险", "剧烈", "严重", "不能忍受",
    "晕倒", "昏迷", "休克", "抢救", "窒息", "大出血",
];

const ELEVATED_MARKERS: &[&str] = &[
    "尽快", "较严重", "持续", "加重", "恶化", "反复", "频繁", "影响生活",
    "影响工作", "影响睡眠",
];

/// Domain lexicons in registration (tie-break) order.
pub fn domain_lexicons() -> Vec<Lexicon> {
    vec![
        Lexicon::new("tcm", TCM_KEYWORDS),
        Lexicon::new("western", WESTERN_KEYWORDS),
        Lexicon::new("pharmacology", PHARMACOLOGY_KEYWORDS),
        Lexicon::new("nutrition", NUTRITION_KEYWORDS),
    ]
}

/// Intent-kind lexicons in registration (tie-break) order.
pub fn intent_lexicons() -> Vec<Lexicon> {
    vec![
        Lexicon::new("diagnosis", DIAGNOSIS_KEYWORDS),
        Lexicon::new("medication", MEDICATION_KEYWORDS),
        Lexicon::new("treatment", TREATMENT_KEYWORDS),
        Lexicon::new("lifestyle", LIFESTYLE_KEYWORDS),
    ]
}

pub fn emergency_markers() -> Vec<String> {
    EMERGENCY_MARKERS.iter().map(|m| (*m).to_string()).collect()
}

pub fn elevated_markers() -> Vec<String> {
    ELEVATED_MARKERS.iter().map(|m| (*m).to_string()).collect()
}
