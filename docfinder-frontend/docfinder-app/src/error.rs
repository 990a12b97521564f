use std::{error, fmt::Display, rc::Rc};

use serde::{de::Visitor, Deserialize, Serialize};
use thiserror::Error;

/// Shown for anything that went wrong between us and the analysis server.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The server answered, but with an `error` field instead of results.
    #[error("Analysis failed: {0}")]
    Domain(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
}

impl AppError {
    /// Text for the notification the user sees.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(validation) => validation.to_string(),
            AppError::Domain(message) => message.clone(),
            AppError::SystemError(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please describe your symptoms")]
    EmptySymptoms,
    #[error("Please select your district")]
    MissingDistrict,
    #[error("Please describe some symptoms first")]
    NothingToSuggestFrom,
}

/// This error type implements From's for the non cloneable error types and keeps them behind an Rc
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(not(feature = "hydrate"))]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(feature = "hydrate")]
    GlooError(Rc<gloo_net::Error>),
    Json(Rc<serde_json::Error>),
}

#[cfg(not(feature = "hydrate"))]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(not(feature = "hydrate"))]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for SystemError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(Rc::new(value))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(not(feature = "hydrate"))]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(feature = "hydrate")]
            SystemError::GlooError(g) => write!(f, "{}", g),
            SystemError::Json(json) => write!(f, "{}", json),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(not(feature = "hydrate"))]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(feature = "hydrate")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::Json(json) => Some(json.as_ref()),
        }
    }
}

impl Serialize for SystemError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "Expecting a string type")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.to_string())
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v)
    }
}

/// Whatever the original source was, it comes back as a message.
impl<'de> Deserialize<'de> for SystemError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let string = deserializer.deserialize_string(StringVisitor)?;
        Ok(Self::Message(string))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_hide_details_from_the_user() {
        let err = AppError::from(SystemError::Message("connection refused".to_string()));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn decode_failures_are_system_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = AppError::from(json_err);
        assert!(matches!(err, AppError::SystemError(SystemError::Json(_))));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn system_errors_serialize_as_their_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let text = json_err.to_string();
        let encoded = serde_json::to_string(&SystemError::from(json_err)).unwrap();
        assert_eq!(encoded, serde_json::to_string(&text).unwrap());
        let decoded: SystemError = serde_json::from_str(&encoded).unwrap();
        assert!(matches!(decoded, SystemError::Message(message) if message == text));
    }

    #[test]
    fn domain_and_validation_errors_show_their_text() {
        assert_eq!(
            AppError::Domain("District not supported".to_string()).user_message(),
            "District not supported"
        );
        assert_eq!(
            AppError::from(ValidationError::MissingDistrict).user_message(),
            "Please select your district"
        );
    }
}
