use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::outreach::EmailResult;

/// One row of the batch candidates file. Unknown fields are preserved and
/// written back untouched; the optional tail is filled in by the batch runner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outreach_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_result: Option<EmailResult>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateRecord {
    /// Plain-text rendering handed to the fit scorer: the input fields as JSON,
    /// without any previous scoring output.
    pub fn summary(&self) -> String {
        let undecorated = CandidateRecord {
            fit_score: None,
            evaluation: None,
            outreach_message: None,
            email_result: None,
            ..self.clone()
        };
        serde_json::to_string_pretty(&undecorated).unwrap_or_else(|_| self.name.clone())
    }
}
