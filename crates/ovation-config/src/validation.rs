//! Configuration validation

use crate::schema::RawPromptConfig;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("'{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid product id {value:?}: {message}")]
    InvalidProductId { value: String, message: String },
}

/// Validate a raw configuration
pub fn validate_config(config: &RawPromptConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.manifest_path.is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "manifest_path",
        });
    }

    if let Some(id) = &config.product_id {
        errors.extend(validate_product_id(id));
    }

    if let Some(icon) = &config.icon
        && icon.is_empty()
    {
        errors.push(ValidationError::EmptyField { field: "icon" });
    }

    if let Some(name) = &config.display_name
        && name.is_empty()
    {
        errors.push(ValidationError::EmptyField {
            field: "display_name",
        });
    }

    errors
}

/// The product id ends up in a store deep link, so it must be non-empty and
/// free of whitespace.
fn validate_product_id(id: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if id.is_empty() {
        errors.push(ValidationError::EmptyField { field: "product_id" });
        return errors;
    }

    if id.chars().any(|c| c.is_whitespace()) {
        errors.push(ValidationError::InvalidProductId {
            value: id.to_string(),
            message: "must not contain whitespace".into(),
        });
    }

    errors
}
