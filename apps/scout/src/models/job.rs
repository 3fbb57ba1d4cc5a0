use serde::{Deserialize, Serialize};

/// One posting in the batch jobs file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Shared background worth mentioning in outreach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commonalities: Option<String>,
}

impl JobPosting {
    /// `top_candidates_<role>.json`, spaces in the role replaced by underscores.
    pub fn output_file_name(&self) -> String {
        format!("top_candidates_{}.json", self.role.replace(' ', "_"))
    }

    pub fn email_subject(&self) -> String {
        format!("Opportunity: {} at {}", self.role, self.organization)
    }
}
