//! Slug generation utilities for tenant subdomains.
//!
//! ## Summary
//! Turns a free-text business name into a stable, URL-safe subdomain label.
//! Slugs are lowercase ASCII letters, digits and single hyphens, never start
//! or end with a hyphen, and never collide with a reserved subdomain.

use icu::normalizer::DecomposingNormalizerBorrowed;

use crate::constants::{DEFAULT_SLUG_MAX_LENGTH, FALLBACK_SLUG, RESERVED_SLUGS};
use crate::error::{CoreError, CoreResult};

/// Generate a tenant slug from a business name with the default length cap.
///
/// Examples:
/// - "Mary's Restaurant & Café" -> "marys-restaurant-cafe"
/// - "Test Business!" -> "test-business"
/// - "Admin" -> "site"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    generate_tenant_slug(name, DEFAULT_SLUG_MAX_LENGTH)
}

/// ## Summary
/// Generate a tenant slug from a business name, capped at `max_length` bytes.
///
/// Diacritics are folded to their base letter through NFD decomposition and
/// every other non-ASCII character is dropped. Whitespace and hyphen runs
/// become a single hyphen; any other punctuation disappears without leaving a
/// separator, so "Mary's" becomes "marys".
///
/// An empty name yields an empty string, which callers must reject. A name
/// that normalizes to nothing, or to a reserved subdomain, yields `"site"`.
#[must_use]
pub fn generate_tenant_slug(name: &str, max_length: usize) -> String {
    if name.is_empty() {
        return String::new();
    }

    let decomposed = DecomposingNormalizerBorrowed::new_nfd().normalize(name);

    let mut slug = String::with_capacity(decomposed.len());
    let mut pending_hyphen = false;
    for c in decomposed.chars().filter(char::is_ascii) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }

    if slug.len() > max_length {
        // ASCII only, so any byte index is a char boundary
        slug.truncate(max_length);
        let trimmed = slug.trim_end_matches('-').len();
        slug.truncate(trimmed);
    }

    if slug.is_empty() || is_reserved(&slug) {
        return FALLBACK_SLUG.to_string();
    }

    slug
}

/// Returns `true` if `slug` is a reserved subdomain label.
#[must_use]
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

/// Returns `true` if `slug` only uses lowercase ASCII letters, digits and hyphens.
#[must_use]
pub fn has_slug_charset(slug: &str) -> bool {
    slug.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// ## Summary
/// Checks a caller-supplied tenant slug against the rules generated slugs
/// already satisfy.
///
/// ## Errors
/// Returns `CoreError::ValidationError` if the slug is empty, too long, uses
/// characters outside `[a-z0-9-]`, or is reserved.
pub fn validate_tenant_slug(slug: &str, max_length: usize) -> CoreResult<()> {
    if slug.is_empty() {
        return Err(CoreError::ValidationError("Slug must not be empty".to_string()));
    }
    if slug.len() > max_length {
        return Err(CoreError::ValidationError(format!(
            "Slug must be at most {max_length} characters"
        )));
    }
    if !has_slug_charset(slug) {
        return Err(CoreError::ValidationError(
            "Slug must contain only lowercase letters, numbers, and hyphens".to_string(),
        ));
    }
    if is_reserved(slug) {
        return Err(CoreError::ValidationError(format!(
            "Slug '{slug}' is reserved"
        )));
    }
    Ok(())
}
