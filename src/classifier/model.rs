use ndarray::{Array1, Array2};

use super::error::ClassifierError;
use super::utils::softmax;

/// Multinomial logistic regression trained by batch gradient descent.
///
/// Minimizes L2-regularized cross-entropy over the full training set.
/// Weights are zero-initialized, so training is fully deterministic: the
/// optimizer has no stochastic elements. Training runs to convergence
/// (gradient-norm tolerance) or `max_iter`; there is no cross-validation
/// and no early stopping. On the tiny fixed corpus this model overfits;
/// it is a toy classifier, not a production model.
///
/// # Example
/// ```
/// use limbic::LogisticRegression;
/// use ndarray::{arr1, arr2};
///
/// let x = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
/// let y = vec![0, 1];
///
/// let mut model = LogisticRegression::new();
/// model.fit(&x, &y)?;
///
/// let (class, probabilities) = model.predict(&arr1(&[1.0, 0.0]))?;
/// assert_eq!(class, 0);
/// assert_eq!(probabilities.len(), 2);
/// # Ok::<(), limbic::ClassifierError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Per-class weight rows (n_classes × n_features), `None` until fitted
    weights: Option<Array2<f32>>,
    /// Per-class bias terms
    bias: Array1<f32>,
    learning_rate: f32,
    max_iter: usize,
    /// L2 penalty on the weights
    l2_penalty: f32,
    /// Convergence tolerance on the max absolute gradient component
    tol: f32,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: Array1::zeros(0),
            learning_rate: 1.0,
            max_iter: 2000,
            l2_penalty: 1e-4,
            tol: 1e-5,
        }
    }

    /// Sets the gradient descent learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of gradient descent iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the L2 regularization strength.
    pub fn with_l2_penalty(mut self, l2_penalty: f32) -> Self {
        self.l2_penalty = l2_penalty;
        self
    }

    /// Sets the convergence tolerance on the gradient.
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Returns true once [`fit`](Self::fit) has completed.
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Returns the number of classes the model was fitted on.
    pub fn num_classes(&self) -> usize {
        self.bias.len()
    }

    /// Fits the model on a feature matrix (`n_samples` × `n_features`) and
    /// class labels in `[0, n_classes)`.
    ///
    /// # Errors
    /// * `ValidationError` if `x` and `y` disagree in length, the input is
    ///   empty, or fewer than two classes are present
    /// * `BuildError` if called on an already fitted model
    pub fn fit(&mut self, x: &Array2<f32>, y: &[usize]) -> Result<(), ClassifierError> {
        let (n_samples, n_features) = x.dim();

        if n_samples == 0 {
            return Err(ClassifierError::ValidationError(
                "Cannot fit with zero samples".into(),
            ));
        }
        if n_samples != y.len() {
            return Err(ClassifierError::ValidationError(format!(
                "Sample count mismatch: {} rows but {} labels",
                n_samples,
                y.len()
            )));
        }
        if self.is_fitted() {
            return Err(ClassifierError::BuildError("Model is already fitted".into()));
        }

        let n_classes = y.iter().max().map_or(0, |&m| m + 1);
        if n_classes < 2 {
            return Err(ClassifierError::ValidationError(
                "Need at least two classes to fit".into(),
            ));
        }

        let mut weights: Array2<f32> = Array2::zeros((n_classes, n_features));
        let mut bias: Array1<f32> = Array1::zeros(n_classes);
        let n = n_samples as f32;

        for _ in 0..self.max_iter {
            let mut weight_grad: Array2<f32> = Array2::zeros((n_classes, n_features));
            let mut bias_grad: Array1<f32> = Array1::zeros(n_classes);

            for (i, &label) in y.iter().enumerate() {
                let row = x.row(i);
                let logits: Vec<f32> = (0..n_classes)
                    .map(|c| weights.row(c).dot(&row) + bias[c])
                    .collect();
                let probs = softmax(&logits);

                for c in 0..n_classes {
                    let error = probs[c] - if c == label { 1.0 } else { 0.0 };
                    bias_grad[c] += error;
                    weight_grad.row_mut(c).scaled_add(error, &row);
                }
            }

            weight_grad /= n;
            bias_grad /= n;
            // L2 penalty applies to the weights only, not the bias.
            weight_grad.scaled_add(self.l2_penalty, &weights);

            weights.scaled_add(-self.learning_rate, &weight_grad);
            bias.scaled_add(-self.learning_rate, &bias_grad);

            let max_grad = weight_grad
                .iter()
                .chain(bias_grad.iter())
                .fold(0.0f32, |acc, &g| acc.max(g.abs()));
            if max_grad < self.tol {
                break;
            }
        }

        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }

    /// Predicts the class of one feature vector and returns the full
    /// softmax probability distribution (sums to 1).
    ///
    /// # Errors
    /// * `NotFitted` if called before [`fit`](Self::fit)
    /// * `DimensionMismatch` if the vector width disagrees with the model
    pub fn predict(&self, x: &Array1<f32>) -> Result<(usize, Vec<f32>), ClassifierError> {
        let weights = self.weights.as_ref().ok_or_else(|| {
            ClassifierError::NotFitted("LogisticRegression::predict called before fit".into())
        })?;

        let (n_classes, n_features) = weights.dim();
        if x.len() != n_features {
            return Err(ClassifierError::DimensionMismatch {
                expected: n_features,
                actual: x.len(),
            });
        }

        let logits: Vec<f32> = (0..n_classes)
            .map(|c| weights.row(c).dot(x) + self.bias[c])
            .collect();
        let probs = softmax(&logits);

        let best_class = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| c)
            .unwrap_or(0);

        Ok((best_class, probs))
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    fn fitted_three_class() -> LogisticRegression {
        let x = arr2(&[
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.9, 0.1, 0.0],
            [0.1, 0.9, 0.0],
            [0.0, 0.1, 0.9],
        ]);
        let y = vec![0, 1, 2, 0, 1, 2];
        let mut model = LogisticRegression::new();
        model.fit(&x, &y).unwrap();
        model
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = LogisticRegression::new();
        assert!(matches!(
            model.predict(&arr1(&[1.0, 0.0])),
            Err(ClassifierError::NotFitted(_))
        ));
    }

    #[test]
    fn test_fit_length_mismatch_fails() {
        let x = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let mut model = LogisticRegression::new();
        assert!(model.fit(&x, &[0]).is_err());
    }

    #[test]
    fn test_separable_classes_learned() {
        let model = fitted_three_class();
        let (class, _) = model.predict(&arr1(&[1.0, 0.0, 0.0])).unwrap();
        assert_eq!(class, 0);
        let (class, _) = model.predict(&arr1(&[0.0, 1.0, 0.0])).unwrap();
        assert_eq!(class, 1);
        let (class, _) = model.predict(&arr1(&[0.0, 0.0, 1.0])).unwrap();
        assert_eq!(class, 2);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = fitted_three_class();
        let (_, probs) = model.predict(&arr1(&[0.2, 0.3, 0.5])).unwrap();
        assert_eq!(probs.len(), 3);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let model = fitted_three_class();
        let result = model.predict(&arr1(&[1.0, 0.0]));
        assert!(matches!(
            result,
            Err(ClassifierError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_tolerance_controls_convergence() {
        let x = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let y = vec![0, 1];

        let mut coarse = LogisticRegression::new().with_tolerance(10.0);
        coarse.fit(&x, &y).unwrap();
        let mut fine = LogisticRegression::new().with_tolerance(1e-5);
        fine.fit(&x, &y).unwrap();

        // The coarse tolerance stops after a single step, leaving the
        // distribution closer to uniform than the fully converged fit.
        let (_, coarse_probs) = coarse.predict(&arr1(&[1.0, 0.0])).unwrap();
        let (_, fine_probs) = fine.predict(&arr1(&[1.0, 0.0])).unwrap();
        assert!(coarse_probs[0] < fine_probs[0]);
    }

    #[test]
    fn test_training_is_deterministic() {
        let a = fitted_three_class();
        let b = fitted_three_class();
        let input = arr1(&[0.4, 0.4, 0.2]);
        let (_, pa) = a.predict(&input).unwrap();
        let (_, pb) = b.predict(&input).unwrap();
        assert_eq!(pa, pb);
    }
}
