//! Character variety criteria - uppercase, lowercase and digits.
//!
//! ASCII ranges only: `A`-`Z`, `a`-`z`, `0`-`9`.

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
