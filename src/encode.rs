//! Ordinal encoding of form inputs into the row layout the classifier was
//! trained on.
//!
//! The tables below are frozen copies of what the training-time label
//! encoder produced: distinct string labels sorted lexicographically and
//! numbered 0, 1, 2, ... in that order. They must never be re-derived at
//! runtime; the deployed model's weights are positionally bound to these
//! exact codes.

use thiserror::Error;

use crate::types::RawInput;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// The raw value is not in the field's known domain. Indicates the UI's
    /// choice list and the encoder table have drifted apart.
    #[error("value {value:?} is outside the domain of field {field:?}")]
    UnknownValue { field: &'static str, value: String },
    /// The model's feature list names a column this encoder cannot produce.
    #[error("feature {0:?} is not produced by this encoder")]
    UnknownFeature(String),
}

/// One encoded row, laid out positionally in the feature order it was
/// assembled against. The model never sees names, only positions.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRecord {
    names: Vec<String>,
    values: Vec<f64>,
}

impl EncodedRecord {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }
}

/// Every column this encoder can produce. Used at startup to verify the
/// deployed model's feature list is covered before serving anything.
pub const KNOWN_FIELDS: [&str; 19] = [
    "gender",
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "PhoneService",
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
    "MonthlyCharges",
    "TotalCharges",
];

// LabelEncoder on ['No','Yes']
fn yes_no(value: &str) -> Option<f64> {
    match value {
        "No" => Some(0.0),
        "Yes" => Some(1.0),
        _ => None,
    }
}

// LabelEncoder on ['Female','Male']
fn gender(value: &str) -> Option<f64> {
    match value {
        "Female" => Some(0.0),
        "Male" => Some(1.0),
        _ => None,
    }
}

// ['No', 'No phone service', 'Yes'] sorted
fn multiple_lines(value: &str) -> Option<f64> {
    match value {
        "No" => Some(0.0),
        "No phone service" => Some(1.0),
        "Yes" => Some(2.0),
        _ => None,
    }
}

// ['DSL', 'Fiber optic', 'No'] sorted
fn internet_service(value: &str) -> Option<f64> {
    match value {
        "DSL" => Some(0.0),
        "Fiber optic" => Some(1.0),
        "No" => Some(2.0),
        _ => None,
    }
}

// Shared by the six internet add-on fields: ['No', 'No internet service', 'Yes']
fn internet_addon(value: &str) -> Option<f64> {
    match value {
        "No" => Some(0.0),
        "No internet service" => Some(1.0),
        "Yes" => Some(2.0),
        _ => None,
    }
}

// ['Month-to-month', 'One year', 'Two year'] sorted
fn contract(value: &str) -> Option<f64> {
    match value {
        "Month-to-month" => Some(0.0),
        "One year" => Some(1.0),
        "Two year" => Some(2.0),
        _ => None,
    }
}

// ['Bank transfer (automatic)', 'Credit card (automatic)',
//  'Electronic check', 'Mailed check'] sorted
fn payment_method(value: &str) -> Option<f64> {
    match value {
        "Bank transfer (automatic)" => Some(0.0),
        "Credit card (automatic)" => Some(1.0),
        "Electronic check" => Some(2.0),
        "Mailed check" => Some(3.0),
        _ => None,
    }
}

/// Encode one customer into the model's row layout.
///
/// Categorical fields are mapped through their frozen tables; `tenure`,
/// `MonthlyCharges` and `TotalCharges` pass through unchanged. The result
/// holds exactly one entry per name in `feature_order`, in that order.
///
/// Pure and deterministic; fails loudly rather than emit a wrong code, and
/// never returns a partial record.
pub fn encode(raw: &RawInput, feature_order: &[String]) -> Result<EncodedRecord, EncodingError> {
    let code = |field: &'static str, value: &str, table: fn(&str) -> Option<f64>| {
        table(value).ok_or_else(|| EncodingError::UnknownValue {
            field,
            value: value.to_string(),
        })
    };

    let encoded: [(&'static str, f64); 19] = [
        ("gender", code("gender", &raw.gender, gender)?),
        ("SeniorCitizen", code("SeniorCitizen", &raw.senior_citizen, yes_no)?),
        ("Partner", code("Partner", &raw.partner, yes_no)?),
        ("Dependents", code("Dependents", &raw.dependents, yes_no)?),
        ("tenure", raw.tenure as f64),
        ("PhoneService", code("PhoneService", &raw.phone_service, yes_no)?),
        (
            "MultipleLines",
            code("MultipleLines", &raw.multiple_lines, multiple_lines)?,
        ),
        (
            "InternetService",
            code("InternetService", &raw.internet_service, internet_service)?,
        ),
        (
            "OnlineSecurity",
            code("OnlineSecurity", &raw.online_security, internet_addon)?,
        ),
        (
            "OnlineBackup",
            code("OnlineBackup", &raw.online_backup, internet_addon)?,
        ),
        (
            "DeviceProtection",
            code("DeviceProtection", &raw.device_protection, internet_addon)?,
        ),
        (
            "TechSupport",
            code("TechSupport", &raw.tech_support, internet_addon)?,
        ),
        (
            "StreamingTV",
            code("StreamingTV", &raw.streaming_tv, internet_addon)?,
        ),
        (
            "StreamingMovies",
            code("StreamingMovies", &raw.streaming_movies, internet_addon)?,
        ),
        ("Contract", code("Contract", &raw.contract, contract)?),
        (
            "PaperlessBilling",
            code("PaperlessBilling", &raw.paperless_billing, yes_no)?,
        ),
        (
            "PaymentMethod",
            code("PaymentMethod", &raw.payment_method, payment_method)?,
        ),
        ("MonthlyCharges", raw.monthly_charges),
        ("TotalCharges", raw.total_charges),
    ];

    // Re-order into the model's column order; an unknown name here means the
    // deployed artifact and this encoder were built against different schemas.
    let mut names = Vec::with_capacity(feature_order.len());
    let mut values = Vec::with_capacity(feature_order.len());
    for name in feature_order {
        let value = encoded
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| EncodingError::UnknownFeature(name.clone()))?;
        names.push(name.clone());
        values.push(value);
    }

    Ok(EncodedRecord { names, values })
}
