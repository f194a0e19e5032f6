use serde::{Deserialize, Serialize};

/// One customer as entered in the form. Field names mirror the training
/// data's column names so payloads and feature lists line up without
/// translation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInput {
    pub gender: String,
    #[serde(rename = "SeniorCitizen")]
    pub senior_citizen: String,
    #[serde(rename = "Partner")]
    pub partner: String,
    #[serde(rename = "Dependents")]
    pub dependents: String,
    pub tenure: i64,
    #[serde(rename = "PhoneService")]
    pub phone_service: String,
    #[serde(rename = "MultipleLines")]
    pub multiple_lines: String,
    #[serde(rename = "InternetService")]
    pub internet_service: String,
    #[serde(rename = "OnlineSecurity")]
    pub online_security: String,
    #[serde(rename = "OnlineBackup")]
    pub online_backup: String,
    #[serde(rename = "DeviceProtection")]
    pub device_protection: String,
    #[serde(rename = "TechSupport")]
    pub tech_support: String,
    #[serde(rename = "StreamingTV")]
    pub streaming_tv: String,
    #[serde(rename = "StreamingMovies")]
    pub streaming_movies: String,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: String,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
    #[serde(rename = "TotalCharges")]
    pub total_charges: f64,
}

/// Hard decision of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChurnLabel {
    Churn,
    NoChurn,
}

/// Verdict for one scored customer. Probability is the model's estimated
/// mass on the churn class, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: ChurnLabel,
    pub probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_kebab_case() {
        assert_eq!(serde_json::to_string(&ChurnLabel::Churn).unwrap(), "\"churn\"");
        assert_eq!(
            serde_json::to_string(&ChurnLabel::NoChurn).unwrap(),
            "\"no-churn\""
        );
    }

    #[test]
    fn raw_input_accepts_training_column_names() {
        let raw: RawInput = serde_json::from_str(
            r#"{
                "gender": "Female",
                "SeniorCitizen": "No",
                "Partner": "Yes",
                "Dependents": "No",
                "tenure": 24,
                "PhoneService": "Yes",
                "MultipleLines": "No",
                "InternetService": "DSL",
                "OnlineSecurity": "Yes",
                "OnlineBackup": "No",
                "DeviceProtection": "No",
                "TechSupport": "Yes",
                "StreamingTV": "No",
                "StreamingMovies": "No",
                "Contract": "One year",
                "PaperlessBilling": "Yes",
                "PaymentMethod": "Mailed check",
                "MonthlyCharges": 55.5,
                "TotalCharges": 1320.0
            }"#,
        )
        .unwrap();
        assert_eq!(raw.tenure, 24);
        assert_eq!(raw.payment_method, "Mailed check");
    }
}
