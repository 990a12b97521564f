use serde::{Deserialize, Serialize};

use crate::Doctor;

/// Body posted to the analysis endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchRequest {
    pub symptoms: String,
    pub district: String,
    pub language: String,
}

/// What the analysis endpoint sends back.
///
/// A response that carries `error` is a failed search even when it arrived with a 200.
/// Every other field may be missing from such a response, so they all decode to empty.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// The server supplied error message, ignoring blank ones.
    pub fn domain_error(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|error| !error.is_empty())
    }
}
