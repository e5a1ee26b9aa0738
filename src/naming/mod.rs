//! NTFS naming rules
//!
//! Pure validation and sanitization of base names.

pub mod sanitize;
pub mod validation;

pub use sanitize::curated_name;
pub use validation::{
    RESERVED_CHARS, contains_invalid_chars, has_invalid_ending, is_forbidden_char,
    is_invalid_name,
};
