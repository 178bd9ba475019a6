//! Search bar submission rules.

/// Query to emit for a submitted input buffer.
///
/// Returns the trimmed text, or `None` for empty and whitespace-only input.
/// The buffer itself is left to the caller and is not cleared.
pub fn submitted_query(buffer: &str) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            submitted_query("  behavioural finance \n"),
            Some("behavioural finance".to_string())
        );
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(
            submitted_query("asset  pricing"),
            Some("asset  pricing".to_string())
        );
    }

    #[test]
    fn test_blank_input_is_ignored() {
        for blank in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(submitted_query(blank), None, "input {:?}", blank);
        }
    }
}
