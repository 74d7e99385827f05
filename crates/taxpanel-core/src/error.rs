//! Error types for the panel rule engine

/// Result type alias using the engine's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for panel rule operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A collaborator reported that a business rule could not be evaluated
    #[error("business rule failure: {0}")]
    BusinessRule(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// File IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new business rule failure
    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from a failing business rule collaborator
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::BusinessRule(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_rule_display() {
        let err = Error::business_rule("legal basis lookup failed");
        assert_eq!(
            err.to_string(),
            "business rule failure: legal basis lookup failed"
        );
        assert!(err.is_business_rule());
    }

    #[test]
    fn test_config_is_not_business_rule() {
        assert!(!Error::config("missing label").is_business_rule());
    }
}
