//! Types for the tasks API (richer schema, `/tasks`).
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 512;

/// Task priority. Serialized on the wire as its numeric value
/// (HIGH=1, MEDIUM=2, LOW=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Priority {
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::High),
            2 => Some(Self::Medium),
            3 => Some(Self::Low),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Low
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Priority::from_value(value)
            .ok_or_else(|| de::Error::custom(format!("invalid priority value: {value}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Partial update. Each field tracks presence explicitly, so a supplied
/// `is_complete: false` is applied rather than treated as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub is_complete: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    pub first_n: Option<usize>,
}

pub fn validate_title(title: &str) -> Result<(), ApiError> {
    let len = title.chars().count();
    if len < TITLE_MIN_LEN || len > TITLE_MAX_LEN {
        return Err(ApiError::InvalidInput(format!(
            "title must be between {TITLE_MIN_LEN} and {TITLE_MAX_LEN} characters"
        )));
    }
    Ok(())
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_title(&self.title)
    }
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}
