//! # meridian-eval
//!
//! Scores cleaned answers on four quality dimensions — professionalism,
//! completeness, readability, safety — and folds them into a weighted
//! total. The weights (0.4 / 0.3 / 0.2 / 0.1) and the dot-product
//! aggregation are the contract; individual scorers are pluggable
//! heuristics behind the `DimensionScorer` trait.

pub mod evaluator;
pub mod scorers;

pub use evaluator::{
    QualityEvaluator, COMPLETENESS_WEIGHT, PROFESSIONALISM_WEIGHT, READABILITY_WEIGHT,
    SAFETY_WEIGHT,
};
