//! Name validation
//!
//! Decides whether a single base name breaks the NTFS naming conventions.
//! Only the final path segment is ever inspected: `/` and `\` are part of
//! the forbidden set, so feeding a full path here would flag every separator.

/// Printable characters that NTFS refuses in a name.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Returns true for ASCII control characters (0-31) and the reserved set.
pub fn is_forbidden_char(c: char) -> bool {
    (c as u32) < 0x20 || RESERVED_CHARS.contains(&c)
}

/// Check whether the name contains at least one forbidden character
pub fn contains_invalid_chars(name: &str) -> bool {
    name.chars().any(is_forbidden_char)
}

/// Check whether the name ends with a space or a period
pub fn has_invalid_ending(name: &str) -> bool {
    name.ends_with(' ') || name.ends_with('.')
}

/// Validate a base name against the NTFS rules.
///
/// A name is invalid when it contains a forbidden character or when it ends
/// with a trailing space or period.
pub fn is_invalid_name(name: &str) -> bool {
    has_invalid_ending(name) || contains_invalid_chars(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_control_char_is_invalid() {
        for code in 0u8..32 {
            let name = format!("file{}name.txt", code as char);
            assert!(is_invalid_name(&name), "control char {code} not flagged");
        }
    }

    #[test]
    fn test_reserved_chars_are_invalid() {
        for c in RESERVED_CHARS {
            let name = format!("a{c}b");
            assert!(is_invalid_name(&name), "{c:?} not flagged");
        }
    }

    #[test]
    fn test_trailing_space_and_period() {
        assert!(is_invalid_name("report "));
        assert!(is_invalid_name("report."));
        assert!(is_invalid_name("trailing.space. "));
        assert!(is_invalid_name("..."));
    }

    #[test]
    fn test_valid_names() {
        assert!(!is_invalid_name("report.txt"));
        assert!(!is_invalid_name(" leading space"));
        assert!(!is_invalid_name(".hidden"));
        assert!(!is_invalid_name("spaces in the middle"));
        assert!(!is_invalid_name("ünïcödé, ok"));
        assert!(!is_invalid_name("DEL\u{7f}char"));
    }

    #[test]
    fn test_empty_name_is_valid() {
        assert!(!is_invalid_name(""));
    }
}
