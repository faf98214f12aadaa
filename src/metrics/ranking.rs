//! Ranking metrics for recommendation lists.
//!
//! These metrics evaluate how many of the top-K items in an ordered
//! recommendation list are relevant. `relevant` is treated as a set;
//! `recommended` is an ordered list truncated to its first `k` items.

use std::collections::HashSet;
use std::hash::Hash;

/// Precision@K: fraction of the top-K recommended items that are relevant.
///
/// The denominator is the number of distinct items actually present in the
/// truncated list, not a fixed `k`: a recommendation list shorter than
/// `k` shrinks the denominator accordingly. Returns 0.0 when `k` is 0 or
/// the truncated list is empty.
///
/// # Examples
///
/// ```
/// use limbic::metrics::precision_at_k;
///
/// assert_eq!(precision_at_k(&[1, 2, 3], &[1, 2, 3, 4, 5], 3), 1.0);
/// assert_eq!(precision_at_k(&[1, 2, 3], &[1, 2, 3, 4, 5], 5), 0.6);
/// assert_eq!(precision_at_k(&[1, 2, 3], &[4, 5, 6, 1, 2], 5), 0.4);
/// ```
#[must_use]
pub fn precision_at_k<T: Eq + Hash>(relevant: &[T], recommended: &[T], k: usize) -> f32 {
    if k == 0 {
        return 0.0;
    }
    let top_k: HashSet<&T> = recommended.iter().take(k).collect();
    if top_k.is_empty() {
        return 0.0;
    }
    let relevant_set: HashSet<&T> = relevant.iter().collect();
    let hits = top_k.intersection(&relevant_set).count();
    hits as f32 / top_k.len() as f32
}

/// Recall@K: fraction of the relevant items found in the top-K recommended.
///
/// Returns 0.0 when `relevant` is empty.
///
/// # Examples
///
/// ```
/// use limbic::metrics::recall_at_k;
///
/// assert_eq!(recall_at_k(&[1, 2, 3, 4], &[1, 5, 6], 3), 0.25);
/// ```
#[must_use]
pub fn recall_at_k<T: Eq + Hash>(relevant: &[T], recommended: &[T], k: usize) -> f32 {
    let relevant_set: HashSet<&T> = relevant.iter().collect();
    if relevant_set.is_empty() {
        return 0.0;
    }
    let top_k: HashSet<&T> = recommended.iter().take(k).collect();
    let hits = top_k.intersection(&relevant_set).count();
    hits as f32 / relevant_set.len() as f32
}

/// F1 score: harmonic mean of precision and recall.
///
/// Returns 0.0 when both inputs are 0.
///
/// # Examples
///
/// ```
/// use limbic::metrics::f1_score;
///
/// assert_eq!(f1_score(1.0, 1.0), 1.0);
/// assert_eq!(f1_score(1.0, 0.0), 0.0);
/// assert_eq!(f1_score(0.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn f1_score(precision: f32, recall: f32) -> f32 {
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * (precision * recall) / (precision + recall)
}

/// Mean Average Precision@K over paired relevant/recommended lists.
///
/// The average precision of one pair is the mean of precision@i taken at
/// every 1-indexed rank `i ≤ k` where the i-th recommended item is
/// relevant; a pair with no relevant hits in the top-K contributes 0.
/// Returns 0.0 when there are no pairs.
///
/// # Panics
///
/// Panics if the two outer lists have different lengths.
///
/// # Examples
///
/// ```
/// use limbic::metrics::map_at_k;
///
/// let relevant = vec![vec![1, 2], vec![3]];
/// let recommended = vec![vec![1, 2, 4], vec![4, 5, 6]];
/// // First pair: AP = (1/1 + 2/2) / 2 = 1.0; second pair: no hits, 0.0.
/// assert_eq!(map_at_k(&relevant, &recommended, 3), 0.5);
/// ```
#[must_use]
pub fn map_at_k<T: Eq + Hash>(
    relevant_lists: &[Vec<T>],
    recommended_lists: &[Vec<T>],
    k: usize,
) -> f32 {
    assert_eq!(
        relevant_lists.len(),
        recommended_lists.len(),
        "Paired lists must have same length"
    );
    if relevant_lists.is_empty() {
        return 0.0;
    }

    let total: f32 = relevant_lists
        .iter()
        .zip(recommended_lists.iter())
        .map(|(relevant, recommended)| average_precision_at_k(relevant, recommended, k))
        .sum();
    total / relevant_lists.len() as f32
}

fn average_precision_at_k<T: Eq + Hash>(relevant: &[T], recommended: &[T], k: usize) -> f32 {
    let top_k = &recommended[..recommended.len().min(k)];
    let relevant_set: HashSet<&T> = relevant.iter().collect();

    let mut precisions: Vec<f32> = Vec::new();
    for (i, item) in top_k.iter().enumerate() {
        if relevant_set.contains(item) {
            precisions.push(precision_at_k(relevant, top_k, i + 1));
        }
    }

    if precisions.is_empty() {
        return 0.0;
    }
    precisions.iter().sum::<f32>() / precisions.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_at_k_perfect() {
        assert_eq!(precision_at_k(&[1, 2, 3], &[1, 2, 3, 4, 5], 3), 1.0);
    }

    #[test]
    fn test_precision_at_k_partial() {
        assert_eq!(precision_at_k(&[1, 2, 3], &[4, 5, 6, 1, 2], 5), 0.4);
        assert_eq!(precision_at_k(&[1, 2, 3], &[1, 2, 3, 4, 5], 5), 0.6);
    }

    #[test]
    fn test_precision_at_k_short_list_shrinks_denominator() {
        // Only 2 items survive truncation, both relevant.
        assert_eq!(precision_at_k(&[1, 2], &[1, 2], 10), 1.0);
    }

    #[test]
    fn test_precision_at_k_zero_k() {
        assert_eq!(precision_at_k(&[1], &[1, 2], 0), 0.0);
        assert_eq!(precision_at_k::<u32>(&[1], &[], 5), 0.0);
    }

    #[test]
    fn test_recall_at_k() {
        assert_eq!(recall_at_k(&[1, 2, 3, 4], &[1, 5, 6], 3), 0.25);
        assert_eq!(recall_at_k::<u32>(&[], &[1, 2], 2), 0.0);
    }

    #[test]
    fn test_f1_score_edges() {
        assert_eq!(f1_score(1.0, 0.0), 0.0);
        assert_eq!(f1_score(0.0, 0.0), 0.0);
        assert_eq!(f1_score(1.0, 1.0), 1.0);
        let f1 = f1_score(0.5, 1.0);
        assert!((f1 - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_at_k_no_hits_is_zero() {
        let relevant = vec![vec![9]];
        let recommended = vec![vec![1, 2, 3]];
        assert_eq!(map_at_k(&relevant, &recommended, 3), 0.0);
    }

    #[test]
    fn test_map_at_k_hit_ranks() {
        // Hits at ranks 1 and 3: AP = (1/1 + 2/3) / 2
        let relevant = vec![vec![1, 3]];
        let recommended = vec![vec![1, 2, 3]];
        let expected = (1.0 + 2.0 / 3.0) / 2.0;
        assert!((map_at_k(&relevant, &recommended, 3) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_map_at_k_empty() {
        assert_eq!(map_at_k::<u32>(&[], &[], 5), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_map_at_k_length_mismatch_panics() {
        let _ = map_at_k(&[vec![1]], &[], 3);
    }
}
