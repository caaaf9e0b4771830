//! Turning arbitrary host names into C# identifiers.
//!
//! Names in Unity settings are free text ("Ignore Raycast", "2nd Layer"). The
//! sanitizer maps each one to an identifier deterministically:
//!
//! - a leading `_` is added when the name does not start with a letter
//! - whitespace is dropped and the following letter or digit is upper-cased
//! - any other symbol becomes `_`

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

/// A name that is valid as a C# identifier.
///
/// Only letters, digits and `_`, never starting with a digit. Reserved
/// keywords are allowed here; the emitter escapes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps `name` if it is already a valid identifier.
    pub fn new(name: &str) -> Option<Self> {
        is_valid_identifier(name).then(|| Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Converts a raw host name into an identifier.
///
/// Returns `None` for an empty name; every non-empty input yields a valid
/// identifier.
///
/// # Examples
///
/// ```
/// use unity_constants::core::sanitize;
///
/// assert_eq!(sanitize("Enemy Tag").unwrap().as_str(), "EnemyTag");
/// assert_eq!(sanitize("2nd Layer").unwrap().as_str(), "_2ndLayer");
/// assert_eq!(sanitize("Water!").unwrap().as_str(), "Water_");
/// assert!(sanitize("").is_none());
/// ```
pub fn sanitize(raw: &str) -> Option<Identifier> {
    let first = raw.chars().next()?;

    let mut out = String::with_capacity(raw.len() + 1);
    if !is_letter(first) {
        out.push('_');
    }

    let mut make_upper = false;
    for ch in raw.chars() {
        if is_letter(ch) || is_decimal_digit(ch) {
            if make_upper {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            make_upper = false;
        } else if ch.is_whitespace() {
            make_upper = true;
        } else {
            out.push('_');
        }
    }

    Some(Identifier(out))
}

/// Checks `name` against the C# identifier grammar.
///
/// The first char is a letter or `_`; the rest are letters, decimal digits,
/// connectors, combining marks or format chars.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_letter(c) || c == '_' => {}
        _ => return false,
    }
    chars.all(is_identifier_part)
}

/// Letter categories Lu, Ll, Lt, Lm, Lo.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Category Nd only; `²` or `½` are not digits here.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

fn is_identifier_part(c: char) -> bool {
    is_letter(c)
        || matches!(
            get_general_category(c),
            GeneralCategory::LetterNumber
                | GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
                | GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::Format
        )
}
