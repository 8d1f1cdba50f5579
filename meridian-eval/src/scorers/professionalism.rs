use meridian_core::intent::IntentData;
use meridian_core::traits::DimensionScorer;

use super::{char_len, count_occurrences};

/// General medical vocabulary, counted for every domain.
const MEDICAL_TERMS: &[&str] = &[
    "诊断", "症状", "病因", "治疗", "预后", "并发症", "适应症", "禁忌症", "用药",
    "剂量", "副作用", "不良反应", "检查", "化验", "影像", "手术", "病理", "生理",
    "解剖", "免疫", "微生物", "病毒", "细菌", "真菌", "寄生虫", "遗传", "代谢",
    "内分泌", "神经", "心血管", "呼吸", "消化", "泌尿", "生殖", "血液", "骨骼",
    "肌肉", "皮肤", "口腔", "精神", "心理", "营养", "康复", "预防", "流行病学",
];

/// Extra vocabulary counted when the query classified into tcm.
const TCM_TERMS: &[&str] = &[
    "辨证", "论治", "气血", "阴阳", "五行", "脏腑", "经络", "气机", "津液", "痰湿",
    "瘀血", "虚证", "实证", "寒证", "热证", "表证", "里证", "望闻问切", "舌诊",
    "脉诊", "君臣佐使", "升降浮沉", "温补", "清热", "祛湿", "活血", "化瘀", "补气",
    "养血", "滋阴", "解表", "和解",
];

/// Extra vocabulary counted when the query classified into pharmacology.
const PHARMACOLOGY_TERMS: &[&str] = &[
    "药效", "药代动力学", "药物相互作用", "半衰期", "血药浓度", "分布容积", "清除率",
    "生物利用度", "首过效应", "受体", "激动剂", "拮抗剂", "药物代谢", "药物排泄",
    "药物吸收", "药物分布", "药物耐受", "药物过敏", "药物毒性",
];

/// Citation markers worth a reference bonus.
const REFERENCE_MARKERS: &[&str] = &["参考", "引用", "来源", "依据", "指南", "共识"];

/// Structured-section headers (e.g. "诊断：…") worth a structure bonus.
const SECTION_HEADERS: &[&str] = &[
    "诊断：", "诊断:", "治疗：", "治疗:", "用法：", "用法:", "用量：", "用量:",
    "适应症：", "适应症:", "禁忌症：", "禁忌症:", "不良反应：", "不良反应:",
    "注意事项：", "注意事项:", "预后：", "预后:", "病因：", "病因:", "辨证：", "辨证:",
];

/// Domain term density through a logistic squash, plus a structured-section
/// bonus and a reference bonus.
pub struct ProfessionalismScorer;

impl DimensionScorer for ProfessionalismScorer {
    fn dimension(&self) -> &str {
        "professionalism"
    }

    fn score(&self, _query: &str, response: &str, intent: &IntentData) -> f64 {
        let length = char_len(response);
        if length == 0 {
            return 0.0;
        }

        let mut term_count = 0;
        for term in MEDICAL_TERMS {
            term_count += count_occurrences(response, term);
        }
        let domain_terms: &[&str] = match intent.domain.as_str() {
            "tcm" => TCM_TERMS,
            "pharmacology" => PHARMACOLOGY_TERMS,
            _ => &[],
        };
        for term in domain_terms {
            term_count += count_occurrences(response, term);
        }

        // Terms per 100 characters, squashed so density ~3 scores ~0.5 and
        // the curve saturates instead of rewarding keyword stuffing.
        let density = term_count as f64 / (length as f64 / 100.0);
        let density_score = (2.0 / (1.0 + (-(density - 3.0)).exp()) - 1.0).max(0.0);

        let reference_score = if REFERENCE_MARKERS.iter().any(|m| response.contains(m)) {
            0.2
        } else {
            0.0
        };

        let section_count = SECTION_HEADERS
            .iter()
            .filter(|h| response.contains(*h))
            .count();
        let structure_score = (section_count as f64 * 0.1).min(0.3);

        (density_score + reference_score + structure_score).min(1.0)
    }
}
