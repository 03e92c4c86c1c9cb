//! Bot configuration
//!
//! Controls which command tokens the bot answers to and how verbose its
//! diagnostics are. Loaded from TOML; every field has a default so an empty
//! file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::core::error::{BotError, Result};

/// Configuration for command handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Command tokens the bot knows how to act on
    ///
    /// Directives naming anything else still parse, but are reported as
    /// unsupported.
    pub supported_commands: Vec<String>,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            supported_commands: vec![
                "help".into(),
                "build".into(),
                "show_config".into(),
                "status".into(),
            ],
            log_filter: "bot_commands=info".into(),
        }
    }
}

impl BotConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.supported_commands.is_empty() {
            return Err(BotError::InvalidConfig(
                "supported_commands must name at least one command".into(),
            ));
        }

        // Each entry has to be something `BotCommand::parse` could produce
        for command in &self.supported_commands {
            if command.is_empty() || command.chars().any(char::is_whitespace) {
                return Err(BotError::InvalidConfig(format!(
                    "supported command '{}' must be a single non-empty token",
                    command
                )));
            }
        }

        if self.log_filter.trim().is_empty() {
            return Err(BotError::InvalidConfig("log_filter must not be empty".into()));
        }
        self.env_filter()?;

        Ok(())
    }

    /// Build the tracing filter described by `log_filter`
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            BotError::InvalidConfig(format!("invalid log_filter '{}': {}", self.log_filter, e))
        })
    }

    /// Whether the bot acts on this command token
    pub fn is_supported(&self, command: &str) -> bool {
        self.supported_commands.iter().any(|c| c == command)
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<BotConfig> = OnceLock::new();

/// Get the global bot config (initializes with defaults if not set)
pub fn config() -> &'static BotConfig {
    CONFIG.get_or_init(BotConfig::default)
}

/// Set the global bot config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: BotConfig) -> std::result::Result<(), BotConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BotConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_supported("build"));
        assert!(config.is_supported("help"));
        assert!(!config.is_supported("deploy"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = BotConfig::parse_toml("").unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_parse_toml_overrides() {
        let config = BotConfig::parse_toml(
            r#"
supported_commands = ["build", "cancel"]
log_filter = "bot_commands=trace"
"#,
        )
        .unwrap();

        assert!(config.is_supported("cancel"));
        assert!(!config.is_supported("help"));
        assert_eq!(config.log_filter, "bot_commands=trace");
    }

    #[test]
    fn test_rejects_empty_command_list() {
        let result = BotConfig::parse_toml("supported_commands = []");
        assert!(matches!(result, Err(BotError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_command_with_whitespace() {
        let result = BotConfig::parse_toml(r#"supported_commands = ["show config"]"#);
        assert!(matches!(result, Err(BotError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_log_filter() {
        let result = BotConfig::parse_toml(r#"log_filter = "bot_commands=loudest""#);
        match result {
            Err(BotError::InvalidConfig(msg)) => assert!(msg.contains("bot_commands=loudest")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_default_log_filter_builds() {
        assert!(BotConfig::default().env_filter().is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = BotConfig::parse_toml("supported_commands = [");
        assert!(matches!(result, Err(BotError::ConfigParse(_))));
    }

    #[test]
    fn test_global_config_defaults() {
        assert!(config().validate().is_ok());
    }
}
