use std::{env, path, time};

use config::{Config, ConfigError, Environment, File};
use lettre::message::Mailbox;
use secrecy::SecretString;

use crate::email_client::{EmailClient, MailError};

/// Name of the environment variable holding the mailbox credential
pub const SENDER_PASSWORD_VAR: &str = "senderPassword";

/// Settings
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

impl Settings {
    /// Get settings from configuration files and environment variables
    pub fn get_config() -> Result<Self, ConfigError> {
        let base_path = env::current_dir().map_err(|e| {
            ConfigError::Message(format!("Failed to determine the current directory: {e}"))
        })?;
        let config_dir = base_path.join("config");

        // Detect the running environment (default: `dev`)
        let env: Env = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "dev".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        // Read the configuration from files and environment variables
        Config::builder()
            // Base configuration file
            .add_source(File::from(config_dir.join("base.yaml")).required(true))
            // Environment-specific configuration file
            .add_source(File::from(config_dir.join(env.as_str())).required(true))
            // Environment variables (e.g., `UCO__APPLICATION__APP_PORT=8888`
            // would set Settings.application.app_port to 8888)
            .add_source(Environment::with_prefix("UCO").separator("__"))
            // The mailbox credential keeps its historical variable name
            .set_override_option(
                "email_client.sender_password",
                env::var(SENDER_PASSWORD_VAR).ok(),
            )?
            .build()?
            .try_deserialize()
    }
}

/// Application settings
#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub app_host: String,
    pub app_port: u16,
    pub static_dir: path::PathBuf,
}

/// Email client settings
#[derive(Clone, serde::Deserialize)]
pub struct EmailClientSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub mailbox: String,
    #[serde(default)]
    pub sender_password: Option<SecretString>,
    pub timeout_millis: u64,
}

impl EmailClientSettings {
    /// Build the email client
    pub fn client(self) -> Result<EmailClient, MailError> {
        let mailbox = self.mailbox()?;
        let timeout = self.timeout();
        match self.sender_password {
            Some(password) => {
                EmailClient::smtps(&self.smtp_host, self.smtp_port, mailbox, password, timeout)
            }
            None => {
                tracing::warn!(
                    "`{SENDER_PASSWORD_VAR}` is not set, every outbound email will fail to send"
                );
                Ok(EmailClient::without_credential(mailbox))
            }
        }
    }

    /// Parse the fixed mailbox used as both sender and recipient
    pub fn mailbox(&self) -> Result<Mailbox, MailError> {
        Ok(self.mailbox.parse()?)
    }

    /// Get configured timeout
    pub const fn timeout(&self) -> time::Duration {
        time::Duration::from_millis(self.timeout_millis)
    }
}

/// Available runtime environments
#[derive(Debug)]
pub enum Env {
    Development,
    Production,
}

impl Env {
    /// Represent environment as a configuration file name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev.yaml",
            Self::Production => "prd.yaml",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "dev" => Ok(Self::Development),
            "prd" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `dev` or `prd`"
            )),
        }
    }
}
