use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::validate_question_id;
use crate::domain::AppError;

/// A validated question identifier.
///
/// Guarantees:
/// - Non-empty
/// - ASCII digits only, of any width
///
/// Ordering is numeric: `789` sorts before `1234`. Identifiers with the same
/// numeric value but different zero padding order by their literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    /// Validate and create a new instance.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_question_id(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidQuestionId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn significant_digits(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}

impl Ord for QuestionId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant_digits(), other.significant_digits());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b)).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for QuestionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::Deref for QuestionId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<QuestionId> for String {
    fn from(val: QuestionId) -> Self {
        val.0
    }
}

impl Serialize for QuestionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        QuestionId::new(&s).map_err(serde::de::Error::custom)
    }
}
