//! Named validation rules attached to form fields

use alloc::format;
use alloc::string::{String, ToString};

use crate::string::is_blank;

/// Rule name for the required-value check
pub const NOT_EMPTY: &str = "notEmpty";

/// A validation rule as named in a field descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace
    NotEmpty,
    /// Any rule name this crate does not know; always passes
    Unknown(String),
}

/// Result of checking a value against a [`Rule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Fail(String),
    /// The rule is not recognised, the field's error state is left alone
    Skipped,
}

impl Rule {
    /// Parse a rule name (case-sensitive, like the descriptor format)
    pub fn parse(name: &str) -> Self {
        match name {
            NOT_EMPTY => Rule::NotEmpty,
            other => Rule::Unknown(other.to_string()),
        }
    }

    /// Check `value`, using `display_name` in the failure message
    pub fn check(&self, value: &str, display_name: &str) -> RuleOutcome {
        match self {
            Rule::NotEmpty => match validate_not_empty(value, display_name) {
                Ok(()) => RuleOutcome::Pass,
                Err(message) => RuleOutcome::Fail(message),
            },
            Rule::Unknown(_) => RuleOutcome::Skipped,
        }
    }
}

/// Validates that a value is not blank
pub fn validate_not_empty(value: &str, display_name: &str) -> Result<(), String> {
    if is_blank(value) {
        Err(format!("{} can't be empty", display_name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_names() {
        assert_eq!(Rule::parse("notEmpty"), Rule::NotEmpty);
        assert_eq!(Rule::parse("email"), Rule::Unknown("email".to_string()));
        assert_eq!(Rule::parse("NotEmpty"), Rule::Unknown("NotEmpty".to_string()));
    }

    #[test]
    fn test_not_empty_message() {
        assert_eq!(
            validate_not_empty("   ", "Email"),
            Err("Email can't be empty".to_string())
        );
        assert!(validate_not_empty("a@b.c", "Email").is_ok());
    }

    #[test]
    fn test_check_outcomes() {
        assert_eq!(Rule::NotEmpty.check("x", "Name"), RuleOutcome::Pass);
        assert_eq!(
            Rule::NotEmpty.check("", "Name"),
            RuleOutcome::Fail("Name can't be empty".to_string())
        );
        assert_eq!(
            Rule::parse("minLength").check("", "Name"),
            RuleOutcome::Skipped
        );
    }
}
