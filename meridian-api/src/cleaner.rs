//! Default response cleaning: format normalization plus an
//! intent-appropriate medical disclaimer.
//!
//! Every step is idempotent, so cleaning already-clean text is a no-op
//! and the disclaimer is never appended twice.

use meridian_core::intent::{IntentData, Urgency};
use meridian_core::traits::ResponseCleaner;

const GENERAL_DISCLAIMER: &str =
    "免责声明：本回答仅供参考，不构成医疗建议。如有健康问题，请咨询专业医生。";
const EMERGENCY_DISCLAIMER: &str =
    "警告：如果您正在经历紧急医疗情况，请立即拨打急救电话或前往最近的急诊室。";
const MEDICATION_DISCLAIMER: &str =
    "用药提示：药物使用请遵医嘱，不同个体可能有不同反应。";
const TCM_DISCLAIMER: &str =
    "中医提示：中医诊疗应当由专业中医师进行辨证论治，本回答仅供参考。";

/// Chinese punctuation that collapses when repeated.
const COLLAPSIBLE_PUNCTUATION: &[char] = &['。', '，', '！', '？'];

/// Format-normalizing, disclaimer-appending cleaner.
#[derive(Debug, Default)]
pub struct DisclaimerCleaner;

impl DisclaimerCleaner {
    pub fn new() -> Self {
        Self
    }

    fn disclaimer_for(intent: &IntentData) -> String {
        let mut disclaimer = GENERAL_DISCLAIMER.to_string();
        if intent.urgency == Urgency::Emergency {
            disclaimer = format!("{EMERGENCY_DISCLAIMER} {disclaimer}");
        }
        if intent.intent_kind == "medication" {
            disclaimer = format!("{MEDICATION_DISCLAIMER} {disclaimer}");
        }
        if intent.domain == "tcm" {
            disclaimer = format!("{TCM_DISCLAIMER} {disclaimer}");
        }
        disclaimer
    }
}

impl ResponseCleaner for DisclaimerCleaner {
    fn clean(&self, raw: &str, intent: &IntentData) -> String {
        let mut text = strip_html_tags(raw);
        text = standardize_punctuation(&text);
        text = collapse_spacing(&text);
        let mut text = text.trim().to_string();

        if !text.contains("免责声明") {
            let disclaimer = Self::disclaimer_for(intent);
            if text.is_empty() {
                text = disclaimer;
            } else {
                text = format!("{text}\n\n{disclaimer}");
            }
        }
        text
    }
}

/// Remove `<...>` tag spans. An unclosed `<` is kept as literal text.
fn strip_html_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Replace halfwidth sentence punctuation with fullwidth and collapse
/// repeated runs of the fullwidth marks.
fn standardize_punctuation(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        let ch = match ch {
            ',' => '，',
            '!' => '！',
            '?' => '？',
            ';' => '；',
            ':' => '：',
            other => other,
        };
        if COLLAPSIBLE_PUNCTUATION.contains(&ch) && out.ends_with(ch) {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Collapse runs of spaces and tabs to one space, and runs of three or
/// more newlines to a blank line. Single newlines survive so paragraph
/// structure reaches the readability scorer intact.
fn collapse_spacing(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut newlines = 0usize;
    let mut pending_space = false;
    for ch in input.chars() {
        match ch {
            '\n' => {
                newlines += 1;
                pending_space = false;
            }
            ' ' | '\t' | '\r' => pending_space = true,
            other => {
                if newlines > 0 {
                    out.push_str(if newlines >= 3 { "\n\n" } else { &"\n\n"[..newlines] });
                    newlines = 0;
                } else if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(other);
            }
        }
    }
    out
}
