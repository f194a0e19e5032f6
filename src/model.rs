//! Scoring backend behind a two-operation capability: probability estimate
//! and hard decision over a single ordered row.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::encode::{EncodedRecord, KNOWN_FIELDS};
use crate::types::{ChurnLabel, PredictionResult};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("feature length mismatch: got {got}, expected {expected}")]
    LengthMismatch { got: usize, expected: usize },
    #[error("scoring backend failed: {0}")]
    Backend(String),
}

/// What the rest of the system knows about the classifier. Backends are
/// swappable behind this; nothing outside this module depends on the
/// artifact format.
pub trait Scorer: Send + Sync {
    /// Estimated probability of the positive (churn) class for one row.
    fn predict_proba(&self, row: &[f64]) -> Result<f64, ScoringError>;

    /// Hard binary decision for one row: 1 = churn, 0 = no churn.
    fn predict(&self, row: &[f64]) -> Result<u8, ScoringError>;
}

/// On-disk artifact layout: the trained coefficients plus the column order
/// the model was fit on. Fixed contract with the training pipeline.
#[derive(Debug, Deserialize)]
pub struct ModelBundle {
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

/// Logistic-regression scorer deserialized from a [`ModelBundle`].
pub struct LogisticModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    fn decision_value(&self, row: &[f64]) -> Result<f64, ScoringError> {
        if row.len() != self.weights.len() {
            return Err(ScoringError::LengthMismatch {
                got: row.len(),
                expected: self.weights.len(),
            });
        }
        let dot: f64 = self.weights.iter().zip(row).map(|(w, x)| w * x).sum();
        Ok(self.intercept + dot)
    }
}

impl Scorer for LogisticModel {
    fn predict_proba(&self, row: &[f64]) -> Result<f64, ScoringError> {
        let z = self.decision_value(row)?;
        let p = 1.0 / (1.0 + (-z).exp());
        if !p.is_finite() {
            return Err(ScoringError::Backend(format!(
                "non-finite probability from decision value {z}"
            )));
        }
        Ok(p)
    }

    fn predict(&self, row: &[f64]) -> Result<u8, ScoringError> {
        // Same 0.5 threshold the training pipeline's predict used; exact
        // ties resolve to the positive class.
        Ok(if self.predict_proba(row)? >= 0.5 { 1 } else { 0 })
    }
}

/// Wraps the scorer so the request path only ever sees
/// `score(record) -> PredictionResult`.
pub struct Predictor {
    scorer: Box<dyn Scorer>,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor").finish_non_exhaustive()
    }
}

impl Predictor {
    pub fn new(scorer: Box<dyn Scorer>) -> Self {
        Self { scorer }
    }

    /// Run one throwaway forward pass on an all-zeros row. Called at
    /// startup so backend trouble shows up before the first real request.
    pub fn warmup(&self, n_features: usize) -> Result<(), ScoringError> {
        let zeros = vec![0.0; n_features];
        self.scorer.predict_proba(&zeros)?;
        Ok(())
    }

    pub fn score(&self, record: &EncodedRecord) -> Result<PredictionResult, ScoringError> {
        let row = record.values();
        let probability = self.scorer.predict_proba(row)?;
        let label = if self.scorer.predict(row)? == 1 {
            ChurnLabel::Churn
        } else {
            ChurnLabel::NoChurn
        };
        Ok(PredictionResult { label, probability })
    }
}

/// Load the model artifact and build the predictor. Runs once at startup;
/// any failure here is fatal so a broken deployment never serves a wrong
/// prediction.
///
/// Besides parsing, this cross-checks the contract between training and
/// serving: every name in `feature_names` must be a column the encoder can
/// produce, and the weight vector must match it in length.
pub fn load_bundle(path: &Path) -> Result<(Predictor, Vec<String>)> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("failed to read model artifact at {}", path.display()))?;
    let bundle: ModelBundle = serde_json::from_str(&txt)
        .with_context(|| format!("failed to parse model artifact at {}", path.display()))?;

    if bundle.feature_names.is_empty() {
        bail!("model artifact declares no features");
    }
    if bundle.weights.len() != bundle.feature_names.len() {
        bail!(
            "model artifact is inconsistent: {} weights for {} feature names",
            bundle.weights.len(),
            bundle.feature_names.len()
        );
    }
    for name in &bundle.feature_names {
        if !KNOWN_FIELDS.contains(&name.as_str()) {
            bail!("model expects feature {name:?} which the encoder cannot produce");
        }
    }

    let scorer = LogisticModel::new(bundle.weights, bundle.intercept);
    Ok((Predictor::new(Box::new(scorer)), bundle.feature_names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use crate::types::RawInput;

    /// Canned scorer for adapter tests.
    struct FixedScorer {
        probability: f64,
        label: u8,
        fail: bool,
    }

    impl Scorer for FixedScorer {
        fn predict_proba(&self, _row: &[f64]) -> Result<f64, ScoringError> {
            if self.fail {
                return Err(ScoringError::Backend("boom".into()));
            }
            Ok(self.probability)
        }

        fn predict(&self, _row: &[f64]) -> Result<u8, ScoringError> {
            if self.fail {
                return Err(ScoringError::Backend("boom".into()));
            }
            Ok(self.label)
        }
    }

    fn any_record() -> encode::EncodedRecord {
        let raw: RawInput = serde_json::from_value(serde_json::json!({
            "gender": "Male",
            "SeniorCitizen": "Yes",
            "Partner": "No",
            "Dependents": "No",
            "tenure": 3,
            "PhoneService": "Yes",
            "MultipleLines": "Yes",
            "InternetService": "Fiber optic",
            "OnlineSecurity": "No",
            "OnlineBackup": "No",
            "DeviceProtection": "No",
            "TechSupport": "No",
            "StreamingTV": "Yes",
            "StreamingMovies": "Yes",
            "Contract": "Month-to-month",
            "PaperlessBilling": "Yes",
            "PaymentMethod": "Electronic check",
            "MonthlyCharges": 95.0,
            "TotalCharges": 280.0
        }))
        .unwrap();
        let order: Vec<String> = KNOWN_FIELDS.iter().map(|s| s.to_string()).collect();
        encode::encode(&raw, &order).unwrap()
    }

    #[test]
    fn positive_decision_maps_to_churn() {
        let predictor = Predictor::new(Box::new(FixedScorer {
            probability: 0.73,
            label: 1,
            fail: false,
        }));
        let result = predictor.score(&any_record()).unwrap();
        assert_eq!(result.label, ChurnLabel::Churn);
        assert_eq!(result.probability, 0.73);
    }

    #[test]
    fn negative_decision_maps_to_no_churn() {
        let predictor = Predictor::new(Box::new(FixedScorer {
            probability: 0.10,
            label: 0,
            fail: false,
        }));
        let result = predictor.score(&any_record()).unwrap();
        assert_eq!(result.label, ChurnLabel::NoChurn);
        assert_eq!(result.probability, 0.10);
    }

    #[test]
    fn backend_failure_surfaces_as_scoring_error() {
        let predictor = Predictor::new(Box::new(FixedScorer {
            probability: 0.0,
            label: 0,
            fail: true,
        }));
        let err = predictor.score(&any_record()).unwrap_err();
        assert!(matches!(err, ScoringError::Backend(_)));
    }

    #[test]
    fn zero_model_sits_on_the_fence() {
        let model = LogisticModel::new(vec![0.0; 19], 0.0);
        let row = vec![1.0; 19];
        assert_eq!(model.predict_proba(&row).unwrap(), 0.5);
        // Exact tie resolves to the positive class.
        assert_eq!(model.predict(&row).unwrap(), 1);
    }

    #[test]
    fn decision_sign_drives_hard_label() {
        let mut weights = vec![0.0; 19];
        weights[0] = 2.0;
        let model = LogisticModel::new(weights, -1.0);

        let mut row = vec![0.0; 19];
        row[0] = 1.0; // z = 1.0
        assert_eq!(model.predict(&row).unwrap(), 1);
        assert!(model.predict_proba(&row).unwrap() > 0.5);

        row[0] = 0.0; // z = -1.0
        assert_eq!(model.predict(&row).unwrap(), 0);
        assert!(model.predict_proba(&row).unwrap() < 0.5);
    }

    #[test]
    fn wrong_row_length_is_rejected() {
        let model = LogisticModel::new(vec![0.0; 19], 0.0);
        let err = model.predict_proba(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::LengthMismatch { got: 2, expected: 19 }
        ));
    }
}
