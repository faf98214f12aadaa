/// Represents the different types of errors that can occur in the sentiment classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The vectorizer or model was used before being fitted
    #[error("Not fitted: {0}")]
    NotFitted(String),
    /// A feature vector's dimensionality disagrees with the fitted model
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// Error occurred during the build/training phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
}
