//! Validation of operator-entered vocabulary entries and configuration keys.

/// Longest accepted category entry, in characters.
pub const MAX_ENTRY_LEN: usize = 40;

/// Longest accepted configuration key.
pub const MAX_KEY_LEN: usize = 32;

/// Entry validation errors with operator-facing messages
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry is empty")]
    Empty,

    #[error("entry is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("entry contains control characters")]
    ControlCharacters,

    #[error("configuration key may only contain letters, digits, '-' and '_'")]
    InvalidKey,
}

/// Trim and check a category entry typed by an operator.
///
/// Returns the trimmed entry. Interior spaces are allowed ("cold iron").
pub fn validate_category_entry(entry: &str) -> Result<String, EntryError> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return Err(EntryError::Empty);
    }
    if trimmed.chars().count() > MAX_ENTRY_LEN {
        return Err(EntryError::TooLong { max: MAX_ENTRY_LEN });
    }
    if trimmed.chars().any(char::is_control) {
        return Err(EntryError::ControlCharacters);
    }
    Ok(trimmed.to_string())
}

/// Check a configuration key given on the command line or in `config.toml`.
pub fn validate_config_key(key: &str) -> Result<String, EntryError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(EntryError::Empty);
    }
    if trimmed.len() > MAX_KEY_LEN {
        return Err(EntryError::TooLong { max: MAX_KEY_LEN });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(EntryError::InvalidKey);
    }
    Ok(trimmed.to_string())
}
