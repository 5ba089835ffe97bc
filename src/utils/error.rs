use thiserror::Error;

#[derive(Error, Debug)]
pub enum TownError {
    #[error("Person not found: {id}")]
    PersonNotFound { id: usize },

    #[error("Building not found: {id}")]
    BuildingNotFound { id: usize },

    #[error("Ownership invariant broken: building {building} is not listed by its owner {owner}")]
    OwnershipInvariant { building: usize, owner: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TownError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfigValueError { .. } | Self::TomlError(_)
        )
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::PersonNotFound { id } => format!("Unknown person #{}", id),
            Self::BuildingNotFound { id } => format!("Unknown building #{}", id),
            Self::OwnershipInvariant { .. } => {
                "Internal error: the ownership registry is inconsistent".to_string()
            }
            Self::IoError(e) => format!("Could not read a file: {}", e),
            Self::SerializationError(e) => format!("Could not serialize the report: {}", e),
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::PersonNotFound { .. } | Self::BuildingNotFound { .. } => {
                "Use the identifiers returned by the cadastre when the entity was registered"
            }
            Self::OwnershipInvariant { .. } => "This is a bug, please report it",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Retry without --json",
            Self::TomlError(_) => "Make sure the configuration file is valid TOML",
            Self::InvalidConfigValueError { .. } => "Fix the configuration value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, TownError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_classified() {
        let err = TownError::InvalidConfigValueError {
            field: "taxes.living_area_rate".to_string(),
            value: "-1".to_string(),
            reason: "Rate must not be negative".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(
            err.to_string(),
            "Invalid value '-1' for taxes.living_area_rate: Rate must not be negative"
        );

        let err = TownError::PersonNotFound { id: 3 };
        assert!(!err.is_config_error());
        assert_eq!(err.user_friendly_message(), "Unknown person #3");
    }
}
