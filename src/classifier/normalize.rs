use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Fixed English stopword set applied during normalization.
    static ref STOP_WORDS: HashSet<&'static str> = [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "her", "hers", "herself", "it", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
        "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during",
        "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further",
        "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other",
        "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "s", "t", "can", "will", "just", "don",
        "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
        "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn",
        "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
        "weren", "won", "wouldn",
    ]
    .iter()
    .copied()
    .collect();
}

/// Normalizes raw text into the token-string form the vectorizer consumes.
///
/// The transformation is deterministic and pure:
/// 1. URL-like runs (`http...`, `https...`, `www...` up to the next
///    whitespace) are removed.
/// 2. Every character that is not an ASCII letter or whitespace is dropped.
/// 3. The remainder is lowercased.
/// 4. Tokens found in the English stopword set are removed and the rest are
///    rejoined with single spaces.
///
/// Empty and all-stopword inputs normalize to an empty string. The function
/// is idempotent: `normalize(normalize(t)) == normalize(t)`.
///
/// # Example
/// ```
/// use limbic::classifier::normalize;
///
/// assert_eq!(
///     normalize("Amazing hotel!!! see http://example.com"),
///     "amazing hotel see"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    let stripped = strip_urls(text);

    // Non-letter characters are deleted outright, not replaced with spaces,
    // so "don't" becomes "dont" rather than splitting into two tokens.
    let letters: String = stripped
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    letters
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes every run starting with `http` or `www` up to the next whitespace.
fn strip_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut skipping = false;
    for (i, ch) in text.char_indices() {
        if skipping {
            // Drop characters until the run ends at whitespace.
            if ch.is_whitespace() {
                skipping = false;
                out.push(ch);
            }
        } else if text[i..].starts_with("http") || text[i..].starts_with("www") {
            skipping = true;
        } else {
            out.push(ch);
        }
    }
    out
}
