use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use perksplus_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
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
    /// Structured JSON logs instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (EMAIL_USER, EMAIL_PASS, EMAIL_TO, PORT)
    /// 2. Environment variables (PERKSPLUS__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PERKSPLUS")
                .separator("__")
                .try_parsing(true),
        );

        // Variables the site was first deployed with
        if let Ok(user) = env::var("EMAIL_USER") {
            builder = builder
                .set_override("email.smtp_username", user.clone())?
                .set_override("email.from_address", user)?;
        }
        if let Ok(pass) = env::var("EMAIL_PASS") {
            builder = builder.set_override("email.smtp_password", pass)?;
        }
        if let Ok(to) = env::var("EMAIL_TO") {
            builder = builder.set_override("email.contact_address", to)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_host.is_empty() {
            return Err("SMTP host must be set".to_string());
        }
        if self.email.contact_address.is_empty() {
            return Err("Destination inbox (email.contact_address / EMAIL_TO) must be set".to_string());
        }
        if self.email.sender().is_empty() {
            return Err(
                "Sender address (email.from_address / EMAIL_USER) must be set".to_string(),
            );
        }
        Ok(())
    }
}
