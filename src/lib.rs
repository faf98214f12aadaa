//! A thread-safe TF-IDF sentiment classifier and evaluation metrics library.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use limbic::SentimentPipeline;
//!
//! let pipeline = SentimentPipeline::new()?;
//!
//! let result = pipeline.analyze("amazing hotel, excellent service")?;
//! println!("Sentiment: {} ({:.2})", result.sentiment, result.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluation Metrics
//!
//! The [`metrics`] module is an independent suite of pure functions for
//! scoring rankings, regressions and classifications:
//!
//! ```rust
//! use limbic::metrics::{precision_at_k, rmse};
//!
//! let p = precision_at_k(&[1, 2, 3], &[1, 2, 3, 4, 5], 3);
//! assert_eq!(p, 1.0);
//!
//! let err = rmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
//! assert_eq!(err, 0.0);
//! ```
//!
//! # Thread Safety
//!
//! The pipeline is trained once at construction and immutable afterwards,
//! so it can be shared across threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use limbic::SentimentPipeline;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let pipeline = Arc::new(SentimentPipeline::new()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let pipeline = Arc::clone(&pipeline);
//!     handles.push(thread::spawn(move || {
//!         pipeline.analyze("decent stay").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod corpus;
pub mod metrics;

pub use classifier::{
    ClassifierError, LogisticRegression, PipelineBuilder, PipelineInfo, Sentiment,
    SentimentPipeline, SentimentResult, TfidfVectorizer,
};
pub use metrics::MetricsError;

pub fn init_logger() {
    env_logger::init();
}
