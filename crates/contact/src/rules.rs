use serde::Deserialize;

pub const DEFAULT_SERVICES: [&str; 4] = ["Consulting", "Penetration Testing", "Audit", "Other"];

pub const DEFAULT_MIN_PHONE_DIGITS: usize = 7;

/// Tunable parts of contact form validation.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactRules {
    #[serde(default = "default_valid_services")]
    pub valid_services: Vec<String>,
    #[serde(default = "default_min_phone_digits")]
    pub min_phone_digits: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            valid_services: default_valid_services(),
            min_phone_digits: default_min_phone_digits(),
        }
    }
}

impl ContactRules {
    pub fn with_services<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid_services: services.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn is_valid_service(&self, service: &str) -> bool {
        self.valid_services.iter().any(|s| s.trim() == service)
    }
}

fn default_valid_services() -> Vec<String> {
    DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect()
}

fn default_min_phone_digits() -> usize {
    DEFAULT_MIN_PHONE_DIGITS
}
