//! Evaluation metrics for ranking, regression and classification outputs.
//!
//! Pure, stateless functions with no shared state and no I/O; every call
//! is independent and safe for unrestricted concurrent invocation. The
//! suite is not wired into the sentiment pipeline; it is invoked offline
//! with ground-truth/predicted sequences.

pub mod classification;
pub mod ranking;
pub mod regression;

pub use classification::{accuracy, confusion_matrix, precision_recall_f1, ClassMetrics};
pub use ranking::{f1_score, map_at_k, precision_at_k, recall_at_k};
pub use regression::{mae, mape, rmse};

/// Errors surfaced by the metrics suite.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// A class label falls outside `[0, num_classes)`
    #[error("class label {label} out of range for {num_classes} classes")]
    InvalidClassIndex { label: usize, num_classes: usize },
    /// A true value of exactly zero makes MAPE undefined
    #[error("true value at index {index} is zero; MAPE is undefined")]
    ZeroTrueValue { index: usize },
}
