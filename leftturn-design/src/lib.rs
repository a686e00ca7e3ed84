pub mod attention;
pub mod config;
pub mod designer;
pub mod scoring;
pub mod summary;
pub mod validator;

pub use attention::{ATTENTION_CHECK_COUNT, attention_check_scenes};
pub use config::{DesignConfig, ScoringConfig};
pub use designer::{Designer, design_sequence};
pub use scoring::{
    AccuracySummary, AttentionCheckResult, DEFAULT_MIN_PASS_RATE, score_attention_checks,
    score_attention_checks_with, summarize_accuracy,
};
pub use summary::{DesignSummary, summarize_design, summarize_design_with};
pub use validator::{ValidationResult, validate_design, validate_design_with};
