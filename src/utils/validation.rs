use crate::utils::error::{Result, TownError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(TownError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(TownError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate must not be negative".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(TownError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TownError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
