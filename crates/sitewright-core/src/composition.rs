//! Page composition rules.
//!
//! ## Summary
//! A page is an ordered list of sections. Composition is valid when there is
//! at most one navigation section, and any hero or footer section appears
//! exactly once, the hero first and the footer last.
//!
//! When several rules are broken only the first violation is reported, checked
//! in this order: navigation count, hero position, footer position, hero
//! count, footer count.

use crate::types::SectionCategory;

/// Anything that carries a section category tag.
///
/// The tag is a plain string so that records with categories outside the
/// known set can still be checked; they simply match no rule.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for SectionCategory {
    fn category(&self) -> &str {
        self.as_str()
    }
}

impl Categorized for &str {
    fn category(&self) -> &str {
        self
    }
}

impl Categorized for String {
    fn category(&self) -> &str {
        self.as_str()
    }
}

/// ## Summary
/// Outcome of checking a page composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionValidation {
    Valid,
    TooManyNavigation,
    HeroNotFirst,
    FooterNotLast,
    TooManyHeroes,
    TooManyFooters,
}

impl CompositionValidation {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the user-facing message, or `None` when valid.
    #[must_use]
    pub const fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooManyNavigation => Some("Maximum 1 navigation section allowed per page"),
            Self::HeroNotFirst => Some("Hero section must be the first section on the page"),
            Self::FooterNotLast => Some("Footer section must be the last section on the page"),
            Self::TooManyHeroes => Some("Only one hero section allowed per page"),
            Self::TooManyFooters => Some("Only one footer section allowed per page"),
        }
    }

    /// Collapses the outcome into `(is_valid, message)`, with an empty message
    /// when valid.
    #[must_use]
    pub fn into_pair(self) -> (bool, String) {
        (
            self.is_valid(),
            self.error_message().unwrap_or_default().to_string(),
        )
    }
}

/// ## Summary
/// Checks an ordered list of sections against the composition rules.
///
/// An empty list is valid.
#[must_use]
pub fn validate_composition<T: Categorized>(sections: &[T]) -> CompositionValidation {
    let nav = SectionCategory::Nav.as_str();
    let hero = SectionCategory::Hero.as_str();
    let footer = SectionCategory::Footer.as_str();

    let mut nav_count = 0_usize;
    let mut hero_positions = Vec::new();
    let mut footer_positions = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        let category = section.category();
        if category == nav {
            nav_count += 1;
        } else if category == hero {
            hero_positions.push(index);
        } else if category == footer {
            footer_positions.push(index);
        }
    }

    let last_index = sections.len().saturating_sub(1);

    if nav_count > 1 {
        CompositionValidation::TooManyNavigation
    } else if hero_positions.first().is_some_and(|&i| i != 0) {
        CompositionValidation::HeroNotFirst
    } else if footer_positions.first().is_some_and(|&i| i != last_index) {
        CompositionValidation::FooterNotLast
    } else if hero_positions.len() > 1 {
        CompositionValidation::TooManyHeroes
    } else if footer_positions.len() > 1 {
        CompositionValidation::TooManyFooters
    } else {
        CompositionValidation::Valid
    }
}
