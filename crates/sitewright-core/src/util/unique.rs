//! Collision avoidance for generated slugs.
//!
//! ## Summary
//! The uniqueness check is injected through [`SlugExists`] so this module never
//! touches storage. Numeric suffixes are tried first (`foo`, `foo-2`, ...,
//! `foo-100`); once those are exhausted a random hexadecimal suffix is appended
//! and returned without another lookup.

use uuid::Uuid;

use crate::constants::{MAX_UNIQUE_SUFFIX, RANDOM_SUFFIX_LEN};

/// Answers whether a slug is already taken.
///
/// `exclude_id` names a record whose own slug must not count as a collision,
/// which is what an update of an existing tenant needs.
pub trait SlugExists {
    fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> bool;
}

impl<F> SlugExists for F
where
    F: Fn(&str, Option<Uuid>) -> bool,
{
    fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> bool {
        self(slug, exclude_id)
    }
}

/// ## Summary
/// Returns the first free slug among `base`, `base-2`, ..., `base-100`.
///
/// When all of those are taken the result is `base-xxxxxx` with six random
/// lowercase hex digits. That fallback is not checked against the store, so a
/// collision there is possible and must be caught by the store's own
/// uniqueness constraint.
#[must_use]
pub fn ensure_unique_slug<E>(base: &str, exists: &E, exclude_id: Option<Uuid>) -> String
where
    E: SlugExists + ?Sized,
{
    let mut slug = base.to_string();
    let mut counter: u32 = 1;

    loop {
        if !exists.slug_exists(&slug, exclude_id) {
            return slug;
        }

        counter += 1;
        if counter > MAX_UNIQUE_SUFFIX {
            let fallback = format!("{base}-{}", random_hex_suffix());
            tracing::warn!(
                base,
                slug = %fallback,
                attempts = MAX_UNIQUE_SUFFIX,
                "numeric slug suffixes exhausted, using random suffix"
            );
            return fallback;
        }
        slug = format!("{base}-{counter}");
    }
}

fn random_hex_suffix() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(RANDOM_SUFFIX_LEN);
    hex
}
