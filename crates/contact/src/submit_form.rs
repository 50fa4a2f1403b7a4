use std::{collections::HashMap, str::FromStr, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidateEmail, ValidationErrors};

use crate::{ContactRules, ContactSubmission, FieldError, InvalidSubmission, Reason};

static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9+\-() ]+$").unwrap());

/// Form field names in the order errors are reported.
pub const FIELDS: [&str; 5] = ["name", "phone", "email", "service", "message"];

#[derive(Validate, Debug, Default, Clone)]
pub struct SubmitFormInput {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[validate(
        length(min = 1, code = "required"),
        regex(path = *RE_PHONE, code = "invalid_format")
    )]
    pub phone: String,
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_email_shape")
    )]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub service: String,
    #[validate(length(min = 1, code = "required"))]
    pub message: String,
}

impl SubmitFormInput {
    /// Pulls the five form fields out of a raw mapping, trimming each value.
    /// Absent keys become empty strings; unknown keys are ignored.
    pub fn from_fields(raw: &HashMap<String, String>) -> Self {
        let field = |key: &str| {
            raw.get(key)
                .map(|value| value.trim().to_owned())
                .unwrap_or_default()
        };

        Self {
            name: field("name"),
            phone: field("phone"),
            email: field("email"),
            service: field("service"),
            message: field("message"),
        }
    }

    /// Checks every field and reports at most one reason per field.
    ///
    /// `required` wins over any other reason. Rules that depend on
    /// configuration (phone digit count, service list) only run on fields
    /// that already have the right shape.
    pub fn check(self, rules: &ContactRules) -> Result<ContactSubmission, InvalidSubmission> {
        let shape = self.validate().err();

        let errors = FIELDS
            .into_iter()
            .filter_map(|field| {
                let reason = shape
                    .as_ref()
                    .and_then(|errors| shape_reason(errors, field))
                    .or_else(|| self.rule_reason(field, rules))?;

                Some(FieldError::new(field, reason))
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(InvalidSubmission { errors });
        }

        Ok(ContactSubmission::new(
            self.name,
            self.phone,
            self.email,
            self.service,
            self.message,
        ))
    }

    fn rule_reason(&self, field: &str, rules: &ContactRules) -> Option<Reason> {
        match field {
            "phone" if count_digits(&self.phone) < rules.min_phone_digits => {
                Some(Reason::InvalidFormat)
            }
            "service" if !rules.is_valid_service(&self.service) => Some(Reason::InvalidChoice),
            _ => None,
        }
    }
}

/// Validates a raw contact form mapping into a [`ContactSubmission`].
pub fn validate(
    raw: &HashMap<String, String>,
    rules: &ContactRules,
) -> Result<ContactSubmission, InvalidSubmission> {
    SubmitFormInput::from_fields(raw).check(rules)
}

fn shape_reason(errors: &ValidationErrors, field: &str) -> Option<Reason> {
    let field_errors = errors.field_errors();
    let codes = field_errors.get(field)?;

    let reasons = codes
        .iter()
        .filter_map(|e| Reason::from_str(&e.code).ok())
        .collect::<Vec<_>>();

    if reasons.contains(&Reason::Required) {
        return Some(Reason::Required);
    }

    reasons.first().copied().or(Some(Reason::InvalidFormat))
}

fn validate_email_shape(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(validator::ValidationError::new("invalid_format"));
    };

    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || !value.validate_email()
    {
        return Err(validator::ValidationError::new("invalid_format"));
    }

    Ok(())
}

fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}
