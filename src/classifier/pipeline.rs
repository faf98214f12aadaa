use log::{debug, info, warn};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::error::ClassifierError;
use super::model::LogisticRegression;
use super::normalize::normalize;
use super::vectorizer::TfidfVectorizer;
use super::PipelineInfo;
use crate::corpus;

/// The three sentiment classes, with the class ids the model is trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Positive,
    Neutral,
}

impl Sentiment {
    /// All classes in class-id order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Positive, Sentiment::Neutral];

    /// The numeric class id: negative=0, positive=1, neutral=2.
    pub fn class_id(self) -> usize {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Positive => 1,
            Sentiment::Neutral => 2,
        }
    }

    /// Maps a class id back to its sentiment label.
    pub fn from_class_id(id: usize) -> Option<Self> {
        match id {
            0 => Some(Sentiment::Negative),
            1 => Some(Sentiment::Positive),
            2 => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one [`SentimentPipeline::analyze`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// The predicted sentiment label
    pub sentiment: Sentiment,
    /// The raw numeric class id echoed as a float. This is a display
    /// artifact inherited from the original API, not an intensity score.
    pub score: f32,
    /// Probability of the predicted class, in `[0, 1]`
    pub confidence: f32,
}

/// A thread-safe sentiment analysis pipeline: text normalization, TF-IDF
/// feature extraction and a multinomial logistic-regression classifier.
///
/// The pipeline trains eagerly at construction against its corpus and is
/// immutable afterwards. An untrained pipeline cannot be observed, so no
/// call path ever re-fits. Sharing across threads needs no locking.
///
/// # Example
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use limbic::{Sentiment, SentimentPipeline};
///
/// let pipeline = SentimentPipeline::new()?;
/// let result = pipeline.analyze("fantastic stay, friendly staff")?;
/// assert_eq!(result.sentiment, Sentiment::Positive);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SentimentPipeline {
    vectorizer: TfidfVectorizer,
    model: LogisticRegression,
    examples_per_class: HashMap<String, usize>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<SentimentPipeline>();
    }
};

impl SentimentPipeline {
    /// Builds a pipeline trained on the built-in 24-example corpus.
    pub fn new() -> Result<Self, ClassifierError> {
        Self::builder().build()
    }

    /// Creates a new [`PipelineBuilder`] for fluent construction.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Returns information about the pipeline's fitted state.
    pub fn info(&self) -> PipelineInfo {
        PipelineInfo {
            num_classes: self.model.num_classes(),
            class_labels: Sentiment::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            examples_per_class: self.examples_per_class.clone(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
        }
    }

    /// Analyzes the sentiment of one text.
    ///
    /// Runs normalize → transform → predict and maps the predicted class id
    /// to its label. `confidence` is the predicted class's probability from
    /// the softmax distribution. Empty and all-stopword inputs are analyzed
    /// from the zero feature vector, never rejected.
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # use limbic::SentimentPipeline;
    /// # let pipeline = SentimentPipeline::new()?;
    /// let result = pipeline.analyze("worst hotel ever")?;
    /// println!("{}: {:.1}%", result.sentiment, result.confidence * 100.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn analyze(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        let normalized = normalize(text);
        debug!("normalized {:?} -> {:?}", text, normalized);

        let vector = self.vectorizer.transform(&normalized)?;
        let (class_id, probabilities) = self.model.predict(&vector)?;

        let sentiment = Sentiment::from_class_id(class_id).ok_or_else(|| {
            ClassifierError::ValidationError(format!("Predicted class id {class_id} out of range"))
        })?;

        let confidence = match probabilities.get(class_id) {
            Some(&p) => p,
            // Unreachable with a correctly fitted 3-class model: the
            // distribution always covers every class. Kept as an explicit
            // fallback mirroring the original API, and logged so it stays
            // observable if the invariant is ever broken.
            None => {
                warn!(
                    "probability vector of length {} is missing class {}; using fallback confidence",
                    probabilities.len(),
                    class_id
                );
                match sentiment {
                    Sentiment::Positive | Sentiment::Negative => 0.9,
                    Sentiment::Neutral => 0.85,
                }
            }
        };

        Ok(SentimentResult {
            sentiment,
            score: class_id as f32,
            confidence,
        })
    }
}

/// A builder for constructing a [`SentimentPipeline`] with a fluent interface.
///
/// With no examples added, [`build`](PipelineBuilder::build) trains on the
/// built-in corpus. Added examples replace the built-in corpus entirely.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    class_examples: HashMap<Sentiment, Vec<String>>,
    max_features: Option<usize>,
    learning_rate: Option<f32>,
    max_iter: Option<usize>,
    l2_penalty: Option<f32>,
    tolerance: Option<f32>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds training examples for one sentiment class.
    ///
    /// # Errors
    /// * `ValidationError` if `examples` is empty or contains an empty text
    pub fn add_examples(
        mut self,
        sentiment: Sentiment,
        examples: Vec<impl Into<String>>,
    ) -> Result<Self, ClassifierError> {
        let examples: Vec<String> = examples.into_iter().map(Into::into).collect();
        if examples.is_empty() {
            return Err(ClassifierError::ValidationError(format!(
                "Class '{sentiment}' must have at least one example"
            )));
        }
        if let Some(pos) = examples.iter().position(|e| e.is_empty()) {
            return Err(ClassifierError::ValidationError(format!(
                "Example {} for class '{sentiment}' cannot be empty",
                pos + 1
            )));
        }
        self.class_examples.entry(sentiment).or_default().extend(examples);
        Ok(self)
    }

    /// Sets the maximum TF-IDF vocabulary size (default 1000).
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Sets the optimizer learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    /// Sets the maximum number of optimizer iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Sets the L2 regularization strength.
    pub fn with_l2_penalty(mut self, l2_penalty: f32) -> Self {
        self.l2_penalty = Some(l2_penalty);
        self
    }

    /// Sets the optimizer convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Trains and returns the pipeline.
    ///
    /// The vectorizer and the model are fitted against the exact same
    /// normalized corpus, so their dimensionalities agree by construction.
    ///
    /// # Errors
    /// * `BuildError` if any sentiment class ends up without examples
    /// * any error surfaced by vectorizer or model fitting
    pub fn build(self) -> Result<SentimentPipeline, ClassifierError> {
        let class_examples = if self.class_examples.is_empty() {
            let mut map: HashMap<Sentiment, Vec<String>> = HashMap::new();
            for (text, sentiment) in corpus::builtin() {
                map.entry(sentiment).or_default().push(text.to_string());
            }
            map
        } else {
            self.class_examples
        };

        for sentiment in Sentiment::ALL {
            if !class_examples.contains_key(&sentiment) {
                return Err(ClassifierError::BuildError(format!(
                    "Class '{sentiment}' has no training examples"
                )));
            }
        }

        let mut texts: Vec<String> = Vec::new();
        let mut labels: Vec<usize> = Vec::new();
        let mut examples_per_class = HashMap::new();
        for sentiment in Sentiment::ALL {
            let examples = &class_examples[&sentiment];
            examples_per_class.insert(sentiment.as_str().to_string(), examples.len());
            for text in examples {
                texts.push(normalize(text));
                labels.push(sentiment.class_id());
            }
        }

        info!(
            "Training sentiment pipeline on {} examples across {} classes",
            texts.len(),
            Sentiment::ALL.len()
        );

        let mut vectorizer = TfidfVectorizer::new();
        if let Some(max_features) = self.max_features {
            vectorizer = vectorizer.with_max_features(max_features);
        }
        vectorizer.fit(&texts)?;

        let n_features = vectorizer.vocabulary_size();
        let mut x = Array2::zeros((texts.len(), n_features));
        for (i, text) in texts.iter().enumerate() {
            x.row_mut(i).assign(&vectorizer.transform(text)?);
        }

        let mut model = LogisticRegression::new();
        if let Some(learning_rate) = self.learning_rate {
            model = model.with_learning_rate(learning_rate);
        }
        if let Some(max_iter) = self.max_iter {
            model = model.with_max_iter(max_iter);
        }
        if let Some(l2_penalty) = self.l2_penalty {
            model = model.with_l2_penalty(l2_penalty);
        }
        if let Some(tolerance) = self.tolerance {
            model = model.with_tolerance(tolerance);
        }
        model.fit(&x, &labels)?;

        info!(
            "Pipeline trained: vocabulary size {}, {} classes",
            n_features,
            model.num_classes()
        );

        Ok(SentimentPipeline {
            vectorizer,
            model,
            examples_per_class,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> SentimentPipeline {
        SentimentPipeline::new().expect("Failed to build pipeline")
    }

    #[test]
    fn test_builtin_corpus_classification() {
        let pipeline = pipeline();
        let cases = [
            ("amazing hotel, excellent service", Sentiment::Positive),
            ("terrible experience, never again", Sentiment::Negative),
            ("it was okay, nothing special", Sentiment::Neutral),
        ];
        for (text, expected) in cases {
            let result = pipeline.analyze(text).unwrap();
            assert_eq!(result.sentiment, expected, "for {text:?}");
        }
    }

    #[test]
    fn test_score_echoes_class_id() {
        let pipeline = pipeline();
        let result = pipeline.analyze("wonderful experience, highly recommend").unwrap();
        assert_eq!(result.score, result.sentiment.class_id() as f32);
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        let pipeline = pipeline();
        for text in ["loved it", "worst hotel ever", "average place", "xyzzy"] {
            let result = pipeline.analyze(text).unwrap();
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence {} out of range for {text:?}",
                result.confidence
            );
        }
    }

    #[test]
    fn test_empty_input_is_analyzed() {
        let pipeline = pipeline();
        assert!(pipeline.analyze("").is_ok());
        assert!(pipeline.analyze("the of and").is_ok());
    }

    #[test]
    fn test_info() {
        let pipeline = pipeline();
        let info = pipeline.info();
        assert_eq!(info.num_classes, 3);
        assert_eq!(info.class_labels, vec!["negative", "positive", "neutral"]);
        assert_eq!(info.examples_per_class["positive"], 8);
        assert!(info.vocabulary_size > 0);
        assert!(info.vocabulary_size <= 1000);
    }

    #[test]
    fn test_builder_rejects_empty_example() {
        let result = SentimentPipeline::builder()
            .add_examples(Sentiment::Positive, vec![""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_requires_all_classes() {
        let result = SentimentPipeline::builder()
            .add_examples(Sentiment::Positive, vec!["good"])
            .unwrap()
            .build();
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_custom_corpus() {
        let pipeline = SentimentPipeline::builder()
            .add_examples(Sentiment::Positive, vec!["brilliant show", "superb acting"])
            .unwrap()
            .add_examples(Sentiment::Negative, vec!["dreadful plot", "boring script"])
            .unwrap()
            .add_examples(Sentiment::Neutral, vec!["watchable film", "ordinary drama"])
            .unwrap()
            .build()
            .unwrap();
        let result = pipeline.analyze("superb show").unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_roundtrip() {
        for sentiment in Sentiment::ALL {
            assert_eq!(Sentiment::from_class_id(sentiment.class_id()), Some(sentiment));
        }
        assert_eq!(Sentiment::from_class_id(3), None);
    }

    #[test]
    fn test_sentiment_display() {
        assert_eq!(Sentiment::Negative.to_string(), "negative");
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
    }
}
