//! Regression metrics for paired true/predicted value sequences.

use super::MetricsError;

/// Root Mean Squared Error: `sqrt(mean((y_true - y_pred)^2))`.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use limbic::metrics::rmse;
///
/// assert_eq!(rmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
/// ```
#[must_use]
pub fn rmse(y_true: &[f32], y_pred: &[f32]) -> f32 {
    assert_eq!(y_true.len(), y_pred.len(), "Slices must have same length");
    assert!(!y_true.is_empty(), "Slices must be non-empty");

    let mse: f32 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f32>()
        / y_true.len() as f32;
    mse.sqrt()
}

/// Mean Absolute Error: `mean(|y_true - y_pred|)`.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use limbic::metrics::mae;
///
/// assert_eq!(mae(&[0.0, 0.0], &[3.0, 4.0]), 3.5);
/// ```
#[must_use]
pub fn mae(y_true: &[f32], y_pred: &[f32]) -> f32 {
    assert_eq!(y_true.len(), y_pred.len(), "Slices must have same length");
    assert!(!y_true.is_empty(), "Slices must be non-empty");

    y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum::<f32>()
        / y_true.len() as f32
}

/// Mean Absolute Percentage Error: `mean(|y_true - y_pred| / y_true) * 100`.
///
/// A true value of exactly zero makes the metric undefined; this surfaces
/// as [`MetricsError::ZeroTrueValue`] rather than propagating `inf`/`NaN`.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use limbic::metrics::mape;
///
/// let err = mape(&[100.0, 200.0], &[110.0, 180.0])?;
/// assert!((err - 10.0).abs() < 1e-4);
///
/// assert!(mape(&[0.0], &[1.0]).is_err());
/// # Ok::<(), limbic::MetricsError>(())
/// ```
pub fn mape(y_true: &[f32], y_pred: &[f32]) -> Result<f32, MetricsError> {
    assert_eq!(y_true.len(), y_pred.len(), "Slices must have same length");
    assert!(!y_true.is_empty(), "Slices must be non-empty");

    let mut total = 0.0;
    for (index, (t, p)) in y_true.iter().zip(y_pred.iter()).enumerate() {
        if *t == 0.0 {
            return Err(MetricsError::ZeroTrueValue { index });
        }
        total += ((t - p) / t).abs();
    }
    Ok(total / y_true.len() as f32 * 100.0)
}
