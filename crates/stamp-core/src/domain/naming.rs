//! Identifier naming rules.
//!
//! A name is accepted when it is made of ASCII letters only and matches the
//! casing convention of the kind it names. The check runs twice per
//! invocation: once live while the user types, once before generation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Casing, Kind},
};

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z])+$").expect("letters-only pattern is valid"));

static UPPER_CAMEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(Casing::UpperCamel.pattern()).expect("upper camel pattern is valid")
});

static LOWER_CAMEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(Casing::LowerCamel.pattern()).expect("lower camel pattern is valid")
});

/// Why a candidate name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    LettersOnly,
    Casing(Casing),
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LettersOnly => f.write_str("Letters Only"),
            Self::Casing(casing) => write!(f, "Should be {}", casing.label()),
        }
    }
}

fn casing_regex(casing: Casing) -> &'static Regex {
    match casing {
        Casing::UpperCamel => &UPPER_CAMEL,
        Casing::LowerCamel => &LOWER_CAMEL,
    }
}

/// Check `name` against the rules for `kind`.
///
/// The charset rule is checked first, so a name that breaks both rules
/// reports "Letters Only".
pub fn check(kind: Kind, name: &str) -> Result<(), NameRejection> {
    check_casing(kind.casing(), name)
}

/// Same as [`check`] for a bare casing convention.
pub fn check_casing(casing: Casing, name: &str) -> Result<(), NameRejection> {
    if !LETTERS_ONLY.is_match(name) {
        return Err(NameRejection::LettersOnly);
    }
    if !casing_regex(casing).is_match(name) {
        return Err(NameRejection::Casing(casing));
    }
    Ok(())
}

/// An identifier that passed [`check`] for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `name` for `kind` and wrap it.
    pub fn parse(kind: Kind, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        match check(kind, &name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(DomainError::InvalidName { name, reason }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
