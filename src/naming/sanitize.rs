//! Name sanitization
//!
//! Computes the curated name for an entry that failed validation.

use crate::naming::validation::is_forbidden_char;

/// Build the curated name for `name`.
///
/// Leading and trailing whitespace is stripped, every forbidden character is
/// replaced independently by `replacement` (which may be empty or span several
/// characters), and any trailing spaces or periods left behind are trimmed.
///
/// The result can be empty, e.g. for `"..."`; callers must not use an empty
/// curated name as a base name.
pub fn curated_name(name: &str, replacement: &str) -> String {
    let stripped = name.trim();

    let mut curated = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        if is_forbidden_char(c) {
            curated.push_str(replacement);
        } else {
            curated.push(c);
        }
    }

    // Substitution may leave a period or space at the end
    let keep = curated.trim_end_matches([' ', '.']).len();
    curated.truncate(keep);
    curated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::validation::{RESERVED_CHARS, is_invalid_name};

    #[test]
    fn test_replaces_each_forbidden_char() {
        assert_eq!(curated_name("file<name>.txt", "_"), "file_name_.txt");
        assert_eq!(curated_name("a??b", "_"), "a__b");
        assert_eq!(curated_name("a:b", "--"), "a--b");
        assert_eq!(curated_name("a|b", ""), "ab");
    }

    #[test]
    fn test_strips_whitespace_and_trailing_period() {
        assert_eq!(curated_name("trailing.space. ", "_"), "trailing.space");
        assert_eq!(curated_name("  padded  ", "_"), "padded");
        assert_eq!(curated_name("ends with dots...", "_"), "ends with dots");
    }

    #[test]
    fn test_leaves_valid_chars_alone() {
        assert_eq!(curated_name(".hidden file.tar.gz", "_"), ".hidden file.tar.gz");
        assert_eq!(curated_name("ünïcödé", "_"), "ünïcödé");
    }

    #[test]
    fn test_control_chars_replaced() {
        assert_eq!(curated_name("line\nbreak", "_"), "line_break");
        assert_eq!(curated_name("nul\0byte", "_"), "nul_byte");
    }

    #[test]
    fn test_total_on_degenerate_input() {
        assert_eq!(curated_name("", "_"), "");
        assert_eq!(curated_name("...", "_"), "");
        assert_eq!(curated_name("   ", "_"), "");
        assert_eq!(curated_name("<>:\"/\\|?*", "_"), "_________");
        assert_eq!(curated_name("<>:\"/\\|?*", ""), "");
    }

    #[test]
    fn test_replacement_ending_in_period_is_trimmed() {
        assert_eq!(curated_name("name?", "."), "name");
        assert!(!is_invalid_name(&curated_name("name?", ".")));
    }

    #[test]
    fn test_sanitized_names_are_valid() {
        let forbidden = (0u8..32)
            .map(|b| b as char)
            .chain(RESERVED_CHARS.iter().copied());
        let bodies = ["{}", "a{}", "{}b", "a{}b", "a{}.", "a{} ", " a.{}. "];

        for c in forbidden {
            for body in bodies {
                let name = body.replace("{}", &c.to_string());
                assert!(is_invalid_name(&name), "{name:?} should be invalid");
                for replacement in ["_", "", "-x-"] {
                    let curated = curated_name(&name, replacement);
                    assert!(
                        !is_invalid_name(&curated),
                        "{name:?} with {replacement:?} gave invalid {curated:?}"
                    );
                }
            }
        }
    }
}
