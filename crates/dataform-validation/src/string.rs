//! String validation functions

/// Options for [`is_empty_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsEmptyOptions {
    /// Treat strings made only of whitespace as empty
    pub ignore_whitespace: bool,
}

/// Checks whether a string has zero length
pub fn is_empty(s: &str) -> bool {
    is_empty_with(s, IsEmptyOptions::default())
}

/// Checks whether a string is empty, optionally ignoring surrounding whitespace
pub fn is_empty_with(s: &str, options: IsEmptyOptions) -> bool {
    if options.ignore_whitespace {
        s.trim().is_empty()
    } else {
        s.is_empty()
    }
}

/// Checks whether a string is blank (empty once trimmed)
pub fn is_blank(s: &str) -> bool {
    is_empty_with(
        s,
        IsEmptyOptions {
            ignore_whitespace: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(!is_empty(" "));
        assert!(!is_empty("a"));
    }

    #[test]
    fn test_is_empty_ignoring_whitespace() {
        let options = IsEmptyOptions {
            ignore_whitespace: true,
        };
        assert!(is_empty_with("   ", options));
        assert!(is_empty_with("\t\n", options));
        assert!(!is_empty_with("  x  ", options));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  "));
        assert!(!is_blank(" hi "));
    }
}
