use serde::{Deserialize, Serialize};

/// Query-normalization configuration for key derivation.
/// All steps default on; disabling one makes the corresponding textual
/// variants hash to distinct keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub case_fold: bool,
    pub strip_punctuation: bool,
    pub collapse_whitespace: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            case_fold: true,
            strip_punctuation: true,
            collapse_whitespace: true,
        }
    }
}
