//! Input normalization for the classifier.
//!
//! Callers may hand over anything: a field value, a secret, an absent value
//! or something that is not text at all. [`Candidate`] is the only place that
//! knows about those shapes; past it the classifier sees either usable text
//! or nothing.

use secrecy::{ExposeSecret, SecretString};
use std::any::Any;

/// A value presented for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Textual input, untrimmed.
    Text(&'a str),
    /// Anything else: absent values, numbers, collections, ...
    NotText,
}

impl<'a> Candidate<'a> {
    /// Normalizes a dynamically typed value.
    ///
    /// `String`, `&'static str` and `Box<str>` are text; every other type is
    /// [`Candidate::NotText`].
    pub fn from_any(value: &'a dyn Any) -> Self {
        if let Some(s) = value.downcast_ref::<String>() {
            Candidate::Text(s)
        } else if let Some(s) = value.downcast_ref::<&'static str>() {
            Candidate::Text(s)
        } else if let Some(s) = value.downcast_ref::<Box<str>>() {
            Candidate::Text(s)
        } else {
            Candidate::NotText
        }
    }

    /// Returns the text if it is worth evaluating.
    ///
    /// `None` for non-text input and for text that is empty once trimmed.
    /// The returned slice is the original, untrimmed text.
    pub fn usable_text(&self) -> Option<&'a str> {
        match *self {
            Candidate::Text(s) if !s.trim_matches(is_trim_whitespace).is_empty() => Some(s),
            _ => None,
        }
    }
}

/// Whitespace removed by the emptiness guard.
///
/// The set trimmed by web form fields: Unicode `White_Space` without U+0085,
/// plus the byte order mark U+FEFF.
pub fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Text(value.as_str())
    }
}

impl<'a> From<&'a SecretString> for Candidate<'a> {
    fn from(value: &'a SecretString) -> Self {
        Candidate::Text(value.expose_secret())
    }
}

impl<'a, T: Into<Candidate<'a>>> From<Option<T>> for Candidate<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::NotText, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_any_text_types() {
        let owned = String::from("Password1!");
        let literal: &'static str = "Password1!";
        let boxed: Box<str> = "Password1!".into();

        assert_eq!(Candidate::from_any(&owned), Candidate::Text("Password1!"));
        assert_eq!(Candidate::from_any(&literal), Candidate::Text("Password1!"));
        assert_eq!(Candidate::from_any(&boxed), Candidate::Text("Password1!"));
    }

    #[test]
    fn test_from_any_other_types() {
        assert_eq!(Candidate::from_any(&42), Candidate::NotText);
        assert_eq!(Candidate::from_any(&4.2_f64), Candidate::NotText);
        assert_eq!(Candidate::from_any(&Vec::<u8>::new()), Candidate::NotText);
        assert_eq!(Candidate::from_any(&()), Candidate::NotText);
        assert_eq!(Candidate::from_any(&true), Candidate::NotText);
        assert_eq!(Candidate::from_any(&'a'), Candidate::NotText);
        assert_eq!(Candidate::from_any(&None::<String>), Candidate::NotText);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Candidate::from(None::<&str>), Candidate::NotText);
        assert_eq!(Candidate::from(Some("abc")), Candidate::Text("abc"));
    }

    #[test]
    fn test_from_secret() {
        let secret = SecretString::new("Password1!".to_string().into());
        assert_eq!(Candidate::from(&secret), Candidate::Text("Password1!"));
    }

    #[test]
    fn test_usable_text_rejects_empty_and_whitespace() {
        for input in ["", " ", "   ", "\t\n\r", "\u{000B}\u{000C}", "\u{00A0}", "\u{2003}\u{3000}", "\u{FEFF}"] {
            assert_eq!(Candidate::Text(input).usable_text(), None, "{:?}", input);
        }
        assert_eq!(Candidate::NotText.usable_text(), None);
    }

    #[test]
    fn test_usable_text_keeps_untrimmed_original() {
        assert_eq!(Candidate::Text("  abc  ").usable_text(), Some("  abc  "));
    }

    #[test]
    fn test_next_line_is_not_trimmed() {
        assert_eq!(Candidate::Text("\u{0085}").usable_text(), Some("\u{0085}"));
        assert!(!is_trim_whitespace('\u{0085}'));
    }

    #[test]
    fn test_zero_width_space_is_not_whitespace() {
        assert_eq!(Candidate::Text("\u{200B}").usable_text(), Some("\u{200B}"));
    }
}
