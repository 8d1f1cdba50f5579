//! Demo backends with simulated inference, and the confidence cells the
//! daemon seeds for them.
//!
//! Real deployments register their own [`ModelBackend`] implementations;
//! these exist so the daemon answers end to end out of the box.

use std::sync::Arc;

use async_trait::async_trait;

use meridian_core::errors::MeridianResult;
use meridian_core::intent::IntentData;
use meridian_core::knowledge::Score;
use meridian_core::traits::ModelBackend;
use meridian_dispatch::matrix::CellKey;

/// Canned-response backend. Output is deterministic in (query, intent)
/// so pipeline behavior is reproducible.
pub struct SimulatedBackend {
    name: &'static str,
    style: AnswerStyle,
}

enum AnswerStyle {
    /// TCM specialist: constitution analysis and herbal guidance.
    TcmSpecialist,
    /// Conversational TCM assistant.
    TcmChat,
    /// General-purpose western medicine answers.
    GeneralMedicine,
}

impl SimulatedBackend {
    pub fn zhongjing() -> Self {
        Self {
            name: "zhongjing",
            style: AnswerStyle::TcmSpecialist,
        }
    }

    pub fn tcm_chat() -> Self {
        Self {
            name: "tcm-chat",
            style: AnswerStyle::TcmChat,
        }
    }

    pub fn general_med() -> Self {
        Self {
            name: "general-med",
            style: AnswerStyle::GeneralMedicine,
        }
    }

    fn compose(&self, query: &str, intent: &IntentData) -> String {
        match self.style {
            AnswerStyle::TcmSpecialist => format!(
                "针对「{query}」，从中医角度分析：此类情况多与脏腑失调相关，建议辨证论治。\n\
                 1、饮食宜清淡，忌生冷油腻。\n\
                 2、可在医师指导下配合中药调理。\n\
                 3、保持作息规律，适度运动。"
            ),
            AnswerStyle::TcmChat => format!(
                "关于「{query}」：中医认为应先辨明体质再行调理，常见思路包括食疗与经络保健，\
                 建议咨询执业中医师制定个体化方案。"
            ),
            AnswerStyle::GeneralMedicine => format!(
                "关于「{query}」（{domain}领域）：\n\
                 1、先观察症状变化，记录持续时间。\n\
                 2、注意休息与补水。\n\
                 3、若症状持续或加重，请及时就医检查。",
                domain = intent.domain
            ),
        }
    }
}

#[async_trait]
impl ModelBackend for SimulatedBackend {
    fn name(&self) -> &str {
        self.name
    }

    async fn infer(&self, query: &str, intent: &IntentData) -> MeridianResult<String> {
        Ok(self.compose(query, intent))
    }
}

/// The three backends the daemon registers by default.
pub fn demo_backends() -> Vec<Arc<dyn ModelBackend>> {
    vec![
        Arc::new(SimulatedBackend::zhongjing()),
        Arc::new(SimulatedBackend::tcm_chat()),
        Arc::new(SimulatedBackend::general_med()),
    ]
}

/// Initial confidence cells for the demo backends.
///
/// TCM cells favor the specialists; everything else starts on the general
/// backend. Feedback reweights all of these at runtime.
pub fn demo_matrix_cells() -> Vec<(CellKey, Score)> {
    let cell = |domain: &str, kind: &str, model: &str, score: f64| {
        (
            (domain.to_string(), kind.to_string(), model.to_string()),
            Score::new(score),
        )
    };

    let mut cells = Vec::new();
    for kind in ["diagnosis", "medication", "treatment", "lifestyle"] {
        cells.push(cell("tcm", kind, "zhongjing", 0.85));
        cells.push(cell("tcm", kind, "tcm-chat", 0.65));
        cells.push(cell("western", kind, "general-med", 0.80));
        cells.push(cell("general", kind, "general-med", 0.75));
    }
    cells.push(cell("pharmacology", "medication", "general-med", 0.80));
    cells.push(cell("nutrition", "lifestyle", "general-med", 0.75));
    cells.push(cell("nutrition", "lifestyle", "tcm-chat", 0.55));
    cells
}
