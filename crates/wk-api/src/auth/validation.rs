use validator::ValidateLength;

use crate::error::ApiError;

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if !password.validate_length(Some(8), Some(128), None) {
        return Err(ApiError::Validation(
            "Password must be between 8 and 128 characters long".to_string(),
        ));
    }

    // Check for at least one letter and one number
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_number = password.chars().any(|c| c.is_numeric());

    if !has_letter || !has_number {
        return Err(ApiError::Validation(
            "Password must contain at least one letter and one number".to_string(),
        ));
    }

    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.is_empty() {
        return Err(ApiError::Validation("Username cannot be empty".to_string()));
    }

    if !username.validate_length(Some(3), Some(30), None) {
        return Err(ApiError::Validation(
            "Username must be between 3 and 30 characters long".to_string(),
        ));
    }

    // Check for valid characters (alphanumeric, underscore, hyphen)
    // This prevents XSS by rejecting any HTML/script characters
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ApiError::Validation(
            "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
        ));
    }

    Ok(())
}
