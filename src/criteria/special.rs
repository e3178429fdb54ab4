//! Special character criterion.

/// The fixed set of accepted special characters: `!@#$%^&*()_+-=[]{}|;:,.<>?`
pub const SPECIAL_CHARACTERS: [char; 26] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))
}
