//! ## Summary
//! Section identifiers follow `jcw-{vertical}-{kit}-{type}{number}`, for
//! example `jcw-rest-01-hero01`. Templates built from one kit are named
//! `jcw-{vertical}-{kit}`.
//!
//! Validation is staged: the raw shape is matched first, then each captured
//! field is checked in a fixed order and the first failure is reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{SECTION_FORMAT, SECTION_FORMAT_EXAMPLE, SECTION_PREFIX, SECTION_SLUG_PATTERN};
use crate::types::{SectionCategory, Vertical, joined_names};

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static SECTION_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_SLUG_PATTERN).expect("section slug pattern is valid"));

/// ## Summary
/// Outcome of validating a section identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionNameValidation {
    /// All checks passed.
    Valid,
    /// Does not match `jcw-{vertical}-{kit}-{type}{number}` at all.
    MalformedPattern,
    UnknownVertical(String),
    /// Kit is not exactly two digits.
    InvalidKitNumber(String),
    UnknownSectionType(String),
    /// Trailing number is not exactly two digits.
    InvalidSectionNumber(String),
}

impl SectionNameValidation {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the user-facing message, or `None` when valid.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::MalformedPattern => Some(format!(
                "Section slug must follow format: {SECTION_FORMAT} (e.g., {SECTION_FORMAT_EXAMPLE})"
            )),
            Self::UnknownVertical(_) => Some(format!(
                "Vertical must be one of: {}",
                joined_names(Vertical::ALL)
            )),
            Self::InvalidKitNumber(_) => {
                Some("Kit number must be 2 digits (e.g., 01, 02)".to_string())
            }
            Self::UnknownSectionType(_) => Some(format!(
                "Section type must be one of: {}",
                joined_names(SectionCategory::ALL)
            )),
            Self::InvalidSectionNumber(_) => {
                Some("Section number must be 2 digits (e.g., 01, 02)".to_string())
            }
        }
    }

    /// Collapses the outcome into `(is_valid, message)`, with an empty message
    /// when valid.
    #[must_use]
    pub fn into_pair(self) -> (bool, String) {
        (self.is_valid(), self.error_message().unwrap_or_default())
    }
}

/// ## Summary
/// A section identifier split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionName<'a> {
    pub vertical: Vertical,
    pub kit: &'a str,
    pub section_type: SectionCategory,
    pub number: &'a str,
}

impl<'a> SectionName<'a> {
    /// ## Summary
    /// Parses a section identifier.
    ///
    /// ## Errors
    /// Returns the first failed check as a [`SectionNameValidation`].
    pub fn parse(slug: &'a str) -> Result<Self, SectionNameValidation> {
        let Some(caps) = SECTION_SLUG_RE.captures(slug) else {
            return Err(SectionNameValidation::MalformedPattern);
        };
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let (vertical, kit, section_type, number) = (field(1), field(2), field(3), field(4));

        let Ok(vertical) = vertical.parse::<Vertical>() else {
            return Err(SectionNameValidation::UnknownVertical(vertical.to_string()));
        };
        if !is_two_digits(kit) {
            return Err(SectionNameValidation::InvalidKitNumber(kit.to_string()));
        }
        let Ok(section_type) = section_type.parse::<SectionCategory>() else {
            return Err(SectionNameValidation::UnknownSectionType(
                section_type.to_string(),
            ));
        };
        if !is_two_digits(number) {
            return Err(SectionNameValidation::InvalidSectionNumber(number.to_string()));
        }

        Ok(Self {
            vertical,
            kit,
            section_type,
            number,
        })
    }
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}

/// ## Summary
/// Validates a section identifier against the naming convention.
#[must_use]
pub fn validate_section_name(slug: &str) -> SectionNameValidation {
    match SectionName::parse(slug) {
        Ok(_) => SectionNameValidation::Valid,
        Err(outcome) => outcome,
    }
}

/// Builds a section identifier, e.g. `jcw-rest-01-hero01`.
#[must_use]
pub fn section_slug(vertical: Vertical, kit: u8, section_type: SectionCategory, number: u8) -> String {
    format!("{SECTION_PREFIX}-{vertical}-{kit:02}-{section_type}{number:02}")
}

/// Builds a template identifier for a kit, e.g. `jcw-rest-01`.
#[must_use]
pub fn template_slug(vertical: Vertical, kit: u8) -> String {
    format!("{SECTION_PREFIX}-{vertical}-{kit:02}")
}
