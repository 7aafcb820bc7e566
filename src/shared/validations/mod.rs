use rust_decimal::Decimal;

use crate::shared::types::DomainError;

pub fn validate_pagination(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}

/// Trim a user-supplied name and enforce a character ceiling.
pub fn validate_name(raw: &str, max_len: usize, what: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{what} is required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(DomainError::Validation(format!(
            "{what} must be {max_len} characters or less"
        )));
    }
    Ok(trimmed.to_string())
}

/// Reject negative money or quantity values.
pub fn validate_non_negative(value: Decimal, what: &str) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        return Err(DomainError::Validation(format!("{what} cannot be negative")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_clamps() {
        assert_eq!(validate_pagination(None, None), (1, 20));
        assert_eq!(validate_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(validate_pagination(Some(3), Some(500)), (3, 100));
    }

    #[test]
    fn names_are_trimmed_and_bounded() {
        assert_eq!(validate_name("  Milk  ", 200, "Item name").unwrap(), "Milk");

        let err = validate_name("   ", 200, "Item name").unwrap_err();
        assert!(err.to_string().contains("Item name is required"));

        let long = "x".repeat(101);
        let err = validate_name(&long, 100, "List name").unwrap_err();
        assert!(err.to_string().contains("100 characters or less"));
    }
}
