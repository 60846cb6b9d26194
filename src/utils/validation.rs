//! Input validation utilities

use rust_decimal::Decimal;
use validator::ValidationError;

/// Reject values that are empty or whitespace-only
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Reject negative winner scores
pub fn validate_score(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        Err(ValidationError::new("negative_score"))
    } else {
        Ok(())
    }
}

/// Split a newline-separated form list into trimmed, non-empty entries
pub fn parse_newline_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Alpha").is_ok());
        assert!(validate_not_blank(" padded ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_validate_score() {
        assert!(validate_score(&Decimal::ZERO).is_ok());
        assert!(validate_score(&Decimal::new(125, 1)).is_ok()); // 12.5
        assert!(validate_score(&Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_parse_newline_list() {
        let parsed = parse_newline_list("Alpha\nBeta\nGamma");
        assert_eq!(parsed, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_parse_newline_list_skips_blank_lines() {
        let parsed = parse_newline_list("  Alpha  \r\n\r\n   \nBeta\n\n");
        assert_eq!(parsed, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_parse_newline_list_empty_input() {
        assert!(parse_newline_list("").is_empty());
        assert!(parse_newline_list(" \n \n ").is_empty());
    }
}
