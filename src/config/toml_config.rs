use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_single_line, Validate,
};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_ABSENT_SENTINEL: &str = "none";
pub const DEFAULT_INDEX: usize = 10;
pub const DEFAULT_RUNTIME_MESSAGE: &str = "A runtime exception occurred";
pub const DEFAULT_GENERAL_MESSAGE: &str = "An exception occurred";
pub const DEFAULT_CLEANUP_MESSAGE: &str = "Finally!";

const MAX_INDEX: usize = 1_000_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrillConfig {
    pub uppercase: UppercaseConfig,
    pub failure_order: FailureOrderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UppercaseConfig {
    pub absent_sentinel: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FailureOrderConfig {
    pub index: Option<usize>,
    pub runtime_message: Option<String>,
    pub general_message: Option<String>,
    pub cleanup_message: Option<String>,
}

impl DrillConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DrillError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DrillConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn absent_sentinel(&self) -> &str {
        self.uppercase
            .absent_sentinel
            .as_deref()
            .unwrap_or(DEFAULT_ABSENT_SENTINEL)
    }

    pub fn index(&self) -> usize {
        self.failure_order.index.unwrap_or(DEFAULT_INDEX)
    }

    pub fn runtime_message(&self) -> &str {
        self.failure_order
            .runtime_message
            .as_deref()
            .unwrap_or(DEFAULT_RUNTIME_MESSAGE)
    }

    pub fn general_message(&self) -> &str {
        self.failure_order
            .general_message
            .as_deref()
            .unwrap_or(DEFAULT_GENERAL_MESSAGE)
    }

    pub fn cleanup_message(&self) -> &str {
        self.failure_order
            .cleanup_message
            .as_deref()
            .unwrap_or(DEFAULT_CLEANUP_MESSAGE)
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("uppercase.absent_sentinel", self.absent_sentinel())?;
        validate_single_line("uppercase.absent_sentinel", self.absent_sentinel())?;

        validate_range("failure_order.index", self.index(), 0, MAX_INDEX)?;

        for (field, message) in [
            ("failure_order.runtime_message", self.runtime_message()),
            ("failure_order.general_message", self.general_message()),
            ("failure_order.cleanup_message", self.cleanup_message()),
        ] {
            validate_non_empty_string(field, message)?;
            validate_single_line(field, message)?;
        }

        Ok(())
    }
}
