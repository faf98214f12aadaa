//! The built-in sentiment training corpus.
//!
//! A fixed set of 24 short lodging-review snippets, 8 per class. The
//! corpus is immutable for the process lifetime; the default pipeline is
//! trained on it eagerly at construction.

use crate::classifier::Sentiment;

const POSITIVE_TEXTS: [&str; 8] = [
    "amazing hotel, excellent service",
    "wonderful experience, highly recommend",
    "beautiful place, very clean",
    "fantastic stay, friendly staff",
    "loved it, will come back",
    "perfect location, great amenities",
    "exceptional service, worth every penny",
    "outstanding experience",
];

const NEGATIVE_TEXTS: [&str; 8] = [
    "terrible experience, never again",
    "awful place, very dirty",
    "rude staff, poor service",
    "waste of money",
    "horrible experience, disappointed",
    "dirty rooms, bad maintenance",
    "worst hotel ever",
    "completely unsatisfied",
];

const NEUTRAL_TEXTS: [&str; 8] = [
    "it was okay, nothing special",
    "average place",
    "fine for the price",
    "standard hotel",
    "decent stay",
    "acceptable service",
    "moderate experience",
    "typical hotel",
];

/// Returns the built-in labeled training corpus.
pub fn builtin() -> Vec<(&'static str, Sentiment)> {
    POSITIVE_TEXTS
        .iter()
        .map(|&t| (t, Sentiment::Positive))
        .chain(NEGATIVE_TEXTS.iter().map(|&t| (t, Sentiment::Negative)))
        .chain(NEUTRAL_TEXTS.iter().map(|&t| (t, Sentiment::Neutral)))
        .collect()
}
