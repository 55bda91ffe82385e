use crate::utils::error::{DrillError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A printed message must stay on one output line.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}']) {
        return Err(DrillError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DrillError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("absent_sentinel", "none").is_ok());
        assert!(validate_non_empty_string("absent_sentinel", "").is_err());
        assert!(validate_non_empty_string("absent_sentinel", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("cleanup_message", "Finally!").is_ok());
        assert!(validate_single_line("cleanup_message", "Finally!\nagain").is_err());
        assert!(validate_single_line("cleanup_message", "Finally!\r").is_err());
        assert!(validate_single_line("cleanup_message", "Finally!\u{2028}").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("index", 10usize, 0, 1_000_000).is_ok());
        assert!(validate_range("index", 1_000_001usize, 0, 1_000_000).is_err());
    }
}
