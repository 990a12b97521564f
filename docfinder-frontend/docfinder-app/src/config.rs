//! Page configuration. Everything here has a default so the page works without any
//! configuration document; a JSON document may override any subset of it.
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const DEFAULT_ENDPOINT: &str = "/api/analyze";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where search requests get posted.
    pub endpoint: String,
    pub districts: Vec<String>,
    pub languages: Vec<SelectOption>,
    pub suggestions: SuggestionTable,
    pub labels: Labels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            districts: [
                "Dhaka",
                "Chattogram",
                "Khulna",
                "Rajshahi",
                "Sylhet",
                "Barishal",
                "Rangpur",
                "Mymensingh",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            languages: vec![
                SelectOption::new("en", "English"),
                SelectOption::new("bn", "বাংলা (Bengali)"),
            ],
            suggestions: SuggestionTable::default(),
            labels: Labels::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON that is safe to drop inside a `<script>` element.
    pub fn to_page_json(&self) -> String {
        serde_json::to_string(self)
            .map(|json| json.replace("</", "<\\/"))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Button captions. The submit and suggest labels are only the initial captions,
/// whatever a button shows right before it goes busy is what it gets back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub submit: String,
    pub submitting: String,
    pub suggest: String,
    pub suggesting: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            submit: "Find Specialists".to_string(),
            submitting: "Analyzing Symptoms...".to_string(),
            suggest: "AI Suggestions".to_string(),
            suggesting: "Thinking...".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRule {
    pub keyword: String,
    pub question: String,
}

/// Keyword to follow-up question lookup used by the suggestion button. Rules are checked in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionTable {
    pub header: String,
    pub fallback: String,
    pub rules: Vec<SuggestionRule>,
}

impl Default for SuggestionTable {
    fn default() -> Self {
        let rules = [
            (
                "headache",
                "Are you also experiencing sensitivity to light or sound?",
            ),
            (
                "fever",
                "Do you have any cough or difficulty breathing with the fever?",
            ),
            (
                "stomach pain",
                "Is the pain accompanied by nausea or vomiting?",
            ),
        ]
        .into_iter()
        .map(|(keyword, question)| SuggestionRule {
            keyword: keyword.to_string(),
            question: question.to_string(),
        })
        .collect();
        Self {
            header: "Some common related symptoms you might want to mention:".to_string(),
            fallback: "Try to describe: duration, severity, and any other associated symptoms."
                .to_string(),
            rules,
        }
    }
}
