use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use dssgroup_contact::ContactRules;
use dssgroup_notification::NotificationConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub contact: ContactRules,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Unprefixed environment variables and the config keys they override.
const LEGACY_VARS: [(&str, &str); 7] = [
    ("NOTIFICATION_ENABLED", "notification.enabled"),
    ("NOTIFICATION_DESTINATION", "notification.destination"),
    ("SMTP_HOST", "notification.smtp_host"),
    ("SMTP_PORT", "notification.smtp_port"),
    ("SMTP_USERNAME", "notification.smtp_username"),
    ("SMTP_PASSWORD", "notification.smtp_password"),
    ("PORT", "server.port"),
];

impl Config {
    /// Load configuration from file and process environment
    ///
    /// Priority (highest to lowest):
    /// 1. Unprefixed variables (NOTIFICATION_ENABLED, VALID_SERVICES, ...)
    /// 2. Prefixed variables (DSSGROUP__NOTIFICATION__DESTINATION, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_from(config_path, std::env::vars().collect())
    }

    /// Same as [`Config::load`] but reads variables from `vars` instead of
    /// the process environment.
    pub fn load_from(
        config_path: Option<String>,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DSSGROUP")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (var, key) in LEGACY_VARS {
            if let Some(value) = vars.get(var) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        if let Some(services) = vars.get("VALID_SERVICES") {
            let services = services
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>();
            builder = builder.set_override("contact.valid_services", services)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.valid_services.is_empty() {
            return Err("At least one valid service must be configured".to_string());
        }
        if self.contact.min_phone_digits < 1 {
            return Err("Contact min_phone_digits must be at least 1".to_string());
        }
        if self.notification.enabled {
            let destination = self.notification.destination.trim();
            if destination.is_empty() {
                return Err(
                    "NOTIFICATION_DESTINATION is required when notifications are enabled"
                        .to_string(),
                );
            }
            if !destination.contains('@') {
                return Err(format!(
                    "Notification destination `{destination}` is not an email address"
                ));
            }
        }
        Ok(())
    }
}
