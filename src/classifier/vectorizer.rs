use ndarray::Array1;
use std::collections::{HashMap, HashSet};

use super::error::ClassifierError;
use super::utils::l2_normalize;

const DEFAULT_MAX_FEATURES: usize = 1000;

/// TF-IDF vectorizer over unigrams and bigrams.
///
/// Builds a fixed vocabulary from a training corpus with [`fit`] and then
/// projects arbitrary text onto it with [`transform`]. The vocabulary is
/// read-only after fitting.
///
/// Weighting follows the smoothed TF-IDF formula:
///
/// ```text
/// tfidf(t, d) = count(t, d) × idf(t)
/// idf(t) = ln((1 + N) / (1 + df(t))) + 1
/// ```
///
/// where `N` is the corpus size and `df(t)` the number of training
/// documents containing `t`. Each output vector is L2-normalized, so
/// [`transform`] returns a unit-norm vector (or the zero vector for
/// empty/out-of-vocabulary input).
///
/// Input is expected to already be normalized (see
/// [`normalize`](super::normalize)); tokens are split on whitespace.
///
/// [`fit`]: TfidfVectorizer::fit
/// [`transform`]: TfidfVectorizer::transform
///
/// # Example
/// ```
/// use limbic::TfidfVectorizer;
///
/// let corpus = vec!["great clean room".to_string(), "dirty room".to_string()];
/// let mut vectorizer = TfidfVectorizer::new();
/// vectorizer.fit(&corpus)?;
///
/// let vector = vectorizer.transform("great room")?;
/// assert_eq!(vector.len(), vectorizer.vocabulary_size());
/// # Ok::<(), limbic::ClassifierError>(())
/// ```
#[derive(Debug)]
pub struct TfidfVectorizer {
    /// Term -> column index, assigned in first-seen corpus order
    vocabulary: HashMap<String, usize>,
    /// Per-index inverse document frequencies, aligned with `vocabulary`
    idf: Vec<f32>,
    max_features: usize,
    fitted: bool,
}

impl TfidfVectorizer {
    /// Creates a vectorizer with the default vocabulary cap of 1000 terms.
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            max_features: DEFAULT_MAX_FEATURES,
            fitted: false,
        }
    }

    /// Sets the maximum vocabulary size.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Returns true once [`fit`](Self::fit) has been called.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Returns the number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Learns the vocabulary and IDF weights from the training corpus.
    ///
    /// The vocabulary is capped at `max_features` terms ranked by aggregate
    /// corpus TF-IDF weight; ties are broken by first appearance in the
    /// corpus. Must be called exactly once, before any
    /// [`transform`](Self::transform) call.
    ///
    /// # Errors
    /// * `ValidationError` if the corpus is empty
    /// * `BuildError` if called on an already fitted vectorizer
    pub fn fit(&mut self, corpus: &[String]) -> Result<(), ClassifierError> {
        if corpus.is_empty() {
            return Err(ClassifierError::ValidationError(
                "Cannot fit on an empty corpus".into(),
            ));
        }
        if self.is_fitted() {
            return Err(ClassifierError::BuildError(
                "Vectorizer is already fitted".into(),
            ));
        }

        let n_docs = corpus.len();
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for doc in corpus {
            let mut doc_terms: HashSet<String> = HashSet::new();
            for term in ngrams(doc) {
                let order = first_seen.len();
                first_seen.entry(term.clone()).or_insert(order);
                *term_counts.entry(term.clone()).or_insert(0) += 1;
                doc_terms.insert(term);
            }
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Rank by aggregate corpus weight (total count × idf) and keep the
        // top max_features terms, ties resolved by first-seen order.
        let mut ranked: Vec<(String, f32, usize)> = term_counts
            .into_iter()
            .map(|(term, count)| {
                let df = doc_freq[&term];
                let idf = smoothed_idf(n_docs, df);
                let seen = first_seen[&term];
                (term, count as f32 * idf, seen)
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.2.cmp(&b.2))
        });
        ranked.truncate(self.max_features);

        // Column indices follow first-seen order so they are stable across
        // runs regardless of the ranking pass above.
        ranked.sort_by_key(|(_, _, seen)| *seen);

        self.idf = Vec::with_capacity(ranked.len());
        for (idx, (term, _, _)) in ranked.into_iter().enumerate() {
            let df = doc_freq[&term];
            self.idf.push(smoothed_idf(n_docs, df));
            self.vocabulary.insert(term, idx);
        }

        self.fitted = true;
        Ok(())
    }

    /// Projects one normalized text onto the fitted vocabulary.
    ///
    /// Out-of-vocabulary terms contribute nothing. The returned vector is
    /// L2-normalized; empty or fully out-of-vocabulary input yields the
    /// zero vector rather than an error.
    ///
    /// # Errors
    /// * `NotFitted` if called before [`fit`](Self::fit)
    pub fn transform(&self, text: &str) -> Result<Array1<f32>, ClassifierError> {
        if !self.is_fitted() {
            return Err(ClassifierError::NotFitted(
                "TfidfVectorizer::transform called before fit".into(),
            ));
        }

        let mut vector = Array1::zeros(self.vocabulary.len());
        for term in ngrams(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                vector[idx] += self.idf[idx];
            }
        }

        Ok(l2_normalize(&vector))
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothed inverse document frequency: `ln((1+N)/(1+df)) + 1`.
fn smoothed_idf(n_docs: usize, df: usize) -> f32 {
    ((1.0 + n_docs as f32) / (1.0 + df as f32)).ln() + 1.0
}

/// Yields unigrams and bigrams of the whitespace tokens in `text`.
fn ngrams(text: &str) -> impl Iterator<Item = String> + '_ {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let unigrams: Vec<String> = tokens.iter().map(|t| (*t).to_string()).collect();
    let bigrams: Vec<String> = tokens.windows(2).map(|w| w.join(" ")).collect();
    unigrams.into_iter().chain(bigrams)
}
