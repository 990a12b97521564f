use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Doctor {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub specialization: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub hospital: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub district: String,
    /// Ratings come over the wire as either `4.5` or `"4.5"`, we keep the text.
    #[serde(
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<String>,
    #[serde(
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience: Option<String>,
    /// Comma separated, e.g. `"Bengali, English"`.
    #[serde(
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub languages: Option<String>,
    /// Spreadsheet exports tend to send phone numbers as plain integers.
    #[serde(
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
}

/// Strings and numbers are kept as text, a list is joined with commas, anything else is absent.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_text))
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_text(deserializer)?.unwrap_or_default())
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(value_text).collect();
            Some(parts.join(", "))
        }
        _ => None,
    }
}

impl Doctor {
    pub fn language_list(&self) -> Vec<String> {
        self.languages
            .as_deref()
            .map(|languages| {
                languages
                    .split(',')
                    .map(str::trim)
                    .filter(|language| !language.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
