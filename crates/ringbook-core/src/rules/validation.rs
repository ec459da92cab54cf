use crate::domain::phone::is_valid_mobile;
use crate::error::CoreError;

pub fn validate_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyName);
    }
    Ok(trimmed.to_string())
}

pub fn validate_mobile(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyMobile);
    }
    if !is_valid_mobile(trimmed) {
        return Err(CoreError::InvalidMobile(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_list_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyListName);
    }
    Ok(trimmed.to_string())
}
