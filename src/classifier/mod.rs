use std::collections::HashMap;

mod error;
mod model;
mod normalize;
mod pipeline;
mod utils;
mod vectorizer;

pub use error::ClassifierError;
pub use model::LogisticRegression;
pub use normalize::normalize;
pub use pipeline::{PipelineBuilder, Sentiment, SentimentPipeline, SentimentResult};
pub use vectorizer::TfidfVectorizer;

/// Information about the current state and configuration of a pipeline
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    /// Number of sentiment classes the pipeline is trained on
    pub num_classes: usize,
    /// Labels of the classes
    pub class_labels: Vec<String>,
    /// Number of training examples per class label
    pub examples_per_class: HashMap<String, usize>,
    /// Size of the fitted vocabulary (unigrams + bigrams)
    pub vocabulary_size: usize,
}
