//! Input validation for bookmark names and URLs.
//!
//! All checks are pure: the same input always yields the same answer and
//! nothing is ever raised. Callers decide how to report each failure.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::bookmark::InvalidField;

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[a-zA-Z0-9]{3,}$").unwrap();
    static ref URL_RE: Regex =
        Regex::new(r"^(?:https?://)?[a-zA-Z0-9-]{2,256}\.[a-zA-Z]{2,}(?:\.[a-zA-Z]{2,})?$").unwrap();
}

/// True iff `name` is 3 or more ASCII letters or digits and nothing else.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// True iff `url` is an optional `http://`/`https://` prefix followed by a
/// host label, a dot, a top-level label of at least two letters, and an
/// optional second top-level label (`example.co.uk`).
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

pub fn is_valid_bookmark(name: &str, url: &str) -> bool {
    is_valid_name(name) && is_valid_url(url)
}

/// Classifies which of the two inputs failed, if any.
pub fn validate(name: &str, url: &str) -> Result<(), InvalidField> {
    match (is_valid_name(name), is_valid_url(url)) {
        (true, true) => Ok(()),
        (false, true) => Err(InvalidField::Name),
        (true, false) => Err(InvalidField::Url),
        (false, false) => Err(InvalidField::Both),
    }
}
