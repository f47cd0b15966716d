//! # Norwegian Phone Numbers
//!
//! Validation and input formatting for Norwegian mobile and landline numbers:
//! an optional `+47` country prefix followed by exactly eight digits, the
//! first of which is in `2..=9`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+47)?[2-9][0-9]{7}$").expect("phone pattern compiles")
});

const COUNTRY_PREFIX: &str = "+47";

/// A phone number that passed the Norwegian format check, whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NorwegianPhone(String);

impl NorwegianPhone {
    /// Strip whitespace from `raw` and check it against the Norwegian format.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let clean = strip_whitespace(raw);
        if PHONE_PATTERN.is_match(&clean) {
            Ok(Self(clean))
        } else {
            Err(ValidationError::InvalidPhone)
        }
    }

    /// The number as entered, without whitespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eight-digit national part.
    pub fn national(&self) -> &str {
        self.0.strip_prefix(COUNTRY_PREFIX).unwrap_or(&self.0)
    }

    /// Whether the number was entered with the `+47` prefix.
    pub fn has_country_prefix(&self) -> bool {
        self.0.starts_with(COUNTRY_PREFIX)
    }
}

impl std::fmt::Display for NorwegianPhone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `raw` is a valid Norwegian number once whitespace is removed.
pub fn is_valid_norwegian_phone(raw: &str) -> bool {
    NorwegianPhone::parse(raw).is_ok()
}

/// Characters treated as whitespace by form input: the ASCII controls
/// `\t \n \v \f \r`, the Unicode space separators, the line and paragraph
/// separators, and the BOM. NEL (U+0085) is not among them.
pub(crate) const FORM_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r\x20\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Whether `c` is in [`FORM_WHITESPACE_CLASS`].
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Remove every form whitespace character, including the BOM.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !is_form_whitespace(*c)).collect()
}

/// Rewrite a phone field's value as the user types.
///
/// Keeps ASCII digits and `+`, then caps the length: 11 characters when the
/// value starts with `+47`, `+` plus 10 characters when it starts with a bare
/// `47`, and 8 characters otherwise.
pub fn format_phone_input(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if kept.starts_with(COUNTRY_PREFIX) {
        kept.chars().take(11).collect()
    } else if kept.starts_with("47") {
        let mut out = String::from("+");
        out.extend(kept.chars().take(10));
        out
    } else {
        kept.chars().take(8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_eight_digits() {
        let p = NorwegianPhone::parse("99887766").unwrap();
        assert_eq!(p.as_str(), "99887766");
        assert!(!p.has_country_prefix());
    }

    #[test]
    fn accepts_country_prefix() {
        let p = NorwegianPhone::parse("+4722334455").unwrap();
        assert_eq!(p.national(), "22334455");
        assert!(p.has_country_prefix());
    }

    #[test]
    fn strips_whitespace_before_matching() {
        let p = NorwegianPhone::parse(" 998 87 766\t").unwrap();
        assert_eq!(p.as_str(), "99887766");
        assert!(is_valid_norwegian_phone("+47 998 87 766"));
    }

    #[test]
    fn whitespace_set_excludes_next_line() {
        assert!(NorwegianPhone::parse("9988\u{feff}7766").is_ok());
        assert!(NorwegianPhone::parse("9988\u{3000}7766").is_ok());
        assert!(NorwegianPhone::parse("\u{0B}99887766\u{2028}").is_ok());
        assert!(NorwegianPhone::parse("9988\u{85}7766").is_err());
        assert!(!is_form_whitespace('\u{85}'));
        assert!(!is_form_whitespace('\u{200B}'));
    }

    #[test]
    fn whitespace_class_agrees_with_predicate() {
        let class = Regex::new(&format!("^[{FORM_WHITESPACE_CLASS}]$")).unwrap();
        for c in ('\0'..='\u{3100}').chain(['\u{FEFF}', '\u{FFFE}']) {
            assert_eq!(class.is_match(c.encode_utf8(&mut [0; 4])), is_form_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn rejects_leading_zero_or_one() {
        assert_eq!(
            NorwegianPhone::parse("12345678"),
            Err(ValidationError::InvalidPhone)
        );
        assert!(!is_valid_norwegian_phone("02345678"));
        assert!(!is_valid_norwegian_phone("+4712345678"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!is_valid_norwegian_phone("9988776"));
        assert!(!is_valid_norwegian_phone("998877665"));
        assert!(!is_valid_norwegian_phone("+47998877665"));
        assert!(!is_valid_norwegian_phone(""));
    }

    #[test]
    fn rejects_other_prefixes_and_symbols() {
        assert!(!is_valid_norwegian_phone("+4699887766"));
        assert!(!is_valid_norwegian_phone("004799887766"));
        assert!(!is_valid_norwegian_phone("998-87-766"));
        assert!(!is_valid_norwegian_phone("٩٩٨٨٧٧٦٦"));
    }

    #[test]
    fn format_keeps_digits_and_plus() {
        assert_eq!(format_phone_input("998 87-766"), "99887766");
        assert_eq!(format_phone_input("abc"), "");
    }

    #[test]
    fn format_caps_national_number_at_eight() {
        assert_eq!(format_phone_input("9988776655"), "99887766");
    }

    #[test]
    fn format_caps_prefixed_number_at_eleven() {
        assert_eq!(format_phone_input("+47 998 87 766 12"), "+4799887766");
    }

    #[test]
    fn format_adds_plus_to_bare_country_code() {
        assert_eq!(format_phone_input("4799887766"), "+4799887766");
        assert_eq!(format_phone_input("479988776612"), "+4799887766");
    }

    proptest! {
        /// Every string of the accepted shape validates, with or without prefix.
        #[test]
        fn accepted_shape_always_validates(
            first in 2u8..=9,
            rest in "[0-9]{7}",
            prefixed in any::<bool>(),
        ) {
            let number = format!("{}{first}{rest}", if prefixed { "+47" } else { "" });
            prop_assert!(is_valid_norwegian_phone(&number));
        }

        /// Validation agrees with the reference pattern for arbitrary input.
        #[test]
        fn matches_reference_pattern(raw in "[+0-9 ]{0,14}") {
            let clean: String = raw.chars().filter(|c| *c != ' ').collect();
            let body = clean.strip_prefix("+47").unwrap_or(&clean);
            let expected = body.len() == 8
                && body.chars().all(|c| c.is_ascii_digit())
                && matches!(body.as_bytes()[0], b'2'..=b'9');
            prop_assert_eq!(is_valid_norwegian_phone(&raw), expected);
        }

        /// Formatting never panics and never grows past 11 characters.
        #[test]
        fn format_output_is_bounded(raw in ".{0,40}") {
            let out = format_phone_input(&raw);
            prop_assert!(out.chars().count() <= 11);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '+'));
        }
    }
}
