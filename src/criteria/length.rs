//! Length criterion - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is measured in UTF-16 code units, so characters outside the
/// Basic Multilingual Plane (most emoji) count twice.
pub fn meets_min_length(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_too_short() {
        assert!(!meets_min_length("Short1!"));
        assert!(!meets_min_length(""));
    }

    #[test]
    fn test_length_exactly_minimum() {
        assert!(meets_min_length("12345678"));
    }

    #[test]
    fn test_length_counts_whitespace() {
        assert!(meets_min_length("        "));
    }

    #[test]
    fn test_length_non_ascii() {
        // 7 code units, although 14 bytes
        assert!(!meets_min_length("ééééééé"));
        assert!(meets_min_length("éééééééé"));
        // 4 emoji = 8 code units
        assert!(meets_min_length("😀😀😀😀"));
        assert!(!meets_min_length("😀😀😀"));
    }
}
