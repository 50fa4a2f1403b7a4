use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Reason {
    Required,
    InvalidFormat,
    InvalidChoice,
}

/// A single field-level defect in a submitted contact form.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: Reason,
}

impl FieldError {
    pub fn new(field: &'static str, reason: Reason) -> Self {
        Self { field, reason }
    }
}

/// Every field error found in one submission, in form field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid contact submission: {}", summary(.errors))]
pub struct InvalidSubmission {
    pub errors: Vec<FieldError>,
}

impl InvalidSubmission {
    pub fn contains(&self, field: &str, reason: Reason) -> bool {
        self.errors.iter().any(|e| e.field == field && e.reason == reason)
    }

    pub fn reason_for(&self, field: &str) -> Option<Reason> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.reason)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}={}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join(", ")
}
