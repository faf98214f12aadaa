//! Classification metrics built on the confusion matrix.

use ndarray::Array2;

use super::MetricsError;

/// Per-class precision, recall and F1, derived one-vs-rest from the
/// confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub precision: f32,
    pub recall: f32,
    pub f1: f32,
}

/// Classification accuracy: fraction of equal pairs.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use limbic::metrics::accuracy;
///
/// let acc = accuracy(&[1, 1, 0], &[1, 0, 0]);
/// assert!((acc - 2.0 / 3.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> f32 {
    assert_eq!(y_true.len(), y_pred.len(), "Slices must have same length");
    assert!(!y_true.is_empty(), "Slices must be non-empty");

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    correct as f32 / y_true.len() as f32
}

/// Confusion matrix of `(true, predicted)` label counts.
///
/// The result is a `num_classes` × `num_classes` matrix indexed by
/// `[true_class, predicted_class]`. Labels outside `[0, num_classes)`
/// are a hard error, not silently ignored.
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// # Examples
///
/// ```
/// use limbic::metrics::confusion_matrix;
///
/// let matrix = confusion_matrix(&[0, 1, 2], &[0, 1, 1], 3)?;
/// assert_eq!(matrix[[0, 0]], 1);
/// assert_eq!(matrix[[1, 1]], 1);
/// assert_eq!(matrix[[2, 1]], 1);
/// assert_eq!(matrix[[2, 2]], 0);
/// # Ok::<(), limbic::MetricsError>(())
/// ```
pub fn confusion_matrix(
    y_true: &[usize],
    y_pred: &[usize],
    num_classes: usize,
) -> Result<Array2<u32>, MetricsError> {
    assert_eq!(y_true.len(), y_pred.len(), "Slices must have same length");

    let mut matrix = Array2::zeros((num_classes, num_classes));
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        for label in [t, p] {
            if label >= num_classes {
                return Err(MetricsError::InvalidClassIndex { label, num_classes });
            }
        }
        matrix[[t, p]] += 1;
    }
    Ok(matrix)
}

/// Per-class precision, recall and F1 from the confusion matrix.
///
/// Standard one-vs-rest TP/FP/FN; any zero denominator yields 0 for that
/// component. The returned vector is indexed by class id.
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// # Examples
///
/// ```
/// use limbic::metrics::precision_recall_f1;
///
/// let per_class = precision_recall_f1(&[0, 0, 1, 1], &[0, 1, 1, 1], 2)?;
/// assert_eq!(per_class[0].precision, 1.0);
/// assert_eq!(per_class[0].recall, 0.5);
/// # Ok::<(), limbic::MetricsError>(())
/// ```
pub fn precision_recall_f1(
    y_true: &[usize],
    y_pred: &[usize],
    num_classes: usize,
) -> Result<Vec<ClassMetrics>, MetricsError> {
    let matrix = confusion_matrix(y_true, y_pred, num_classes)?;

    let mut per_class = Vec::with_capacity(num_classes);
    for i in 0..num_classes {
        let tp = matrix[[i, i]] as f32;
        let fp = matrix.column(i).sum() as f32 - tp;
        let fn_ = matrix.row(i).sum() as f32 - tp;

        let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
        let recall = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        per_class.push(ClassMetrics { precision, recall, f1 });
    }
    Ok(per_class)
}
