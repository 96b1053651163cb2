//! Shared library of reusable sections.
//!
//! ## Summary
//! Sections are shared by every tenant. A section's slug encodes its vertical,
//! kit and type; the catalog derives those fields from the slug on
//! registration instead of trusting the caller.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitewright_core::composition::Categorized;
use sitewright_core::constants::CATALOG_SLUG_MAX_LENGTH;
use sitewright_core::naming::SectionName;
use sitewright_core::types::{CompatibilityFlag, SectionCategory, SectionStatus, Vertical};

use crate::error::{ServiceError, ServiceResult};
use crate::store;

const SECTION_NAME_MAX_LENGTH: usize = 100;
const DEFAULT_VERSION: &str = "1.0.0";

/// A section as submitted by an administrator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSection {
    pub slug: String,
    pub name: String,
    /// Defaults to the type encoded in the slug; must agree with it if given.
    pub category: Option<SectionCategory>,
    pub version: Option<String>,
    pub status: Option<SectionStatus>,
    pub compatibility_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub category: SectionCategory,
    pub vertical: Vertical,
    pub kit_number: String,
    pub section_type_number: String,
    pub version: String,
    pub status: SectionStatus,
    pub compatibility_flags: Vec<CompatibilityFlag>,
    pub created_at: DateTime<Utc>,
}

impl Categorized for Section {
    fn category(&self) -> &str {
        self.category.as_str()
    }
}

/// ## Summary
/// Parses compatibility flags, rejecting the whole list if any is unknown.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` listing every unknown flag.
pub fn parse_compatibility_flags(flags: &[String]) -> ServiceResult<Vec<CompatibilityFlag>> {
    let mut parsed = Vec::with_capacity(flags.len());
    let mut invalid = Vec::new();
    for flag in flags {
        match flag.parse::<CompatibilityFlag>() {
            Ok(flag) if !parsed.contains(&flag) => parsed.push(flag),
            Ok(_) => {}
            Err(_) => invalid.push(flag.as_str()),
        }
    }

    if invalid.is_empty() {
        Ok(parsed)
    } else {
        Err(ServiceError::ValidationError(format!(
            "Invalid compatibility flags: {}",
            invalid.join(", ")
        )))
    }
}

/// In-memory section catalog keyed by slug.
#[derive(Debug, Default)]
pub struct SectionCatalog {
    sections: RwLock<BTreeMap<String, Section>>,
}

impl SectionCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Validates and stores a new section.
    ///
    /// ## Errors
    /// Returns an error if:
    /// - The slug breaks the naming convention (message names the first failed check)
    /// - The category disagrees with the slug's type
    /// - The name is blank or too long, or a compatibility flag is unknown
    /// - A section with the same slug exists
    #[tracing::instrument(skip(self, new), fields(slug = %new.slug))]
    pub fn register(&self, new: NewSection) -> ServiceResult<Section> {
        if new.slug.len() > CATALOG_SLUG_MAX_LENGTH {
            return Err(ServiceError::ValidationError(format!(
                "Section slug must be at most {CATALOG_SLUG_MAX_LENGTH} characters"
            )));
        }
        let parts = SectionName::parse(&new.slug).map_err(|outcome| {
            ServiceError::ValidationError(outcome.error_message().unwrap_or_default())
        })?;

        let category = match new.category {
            Some(category) if category != parts.section_type => {
                return Err(ServiceError::ValidationError(format!(
                    "Section category '{category}' does not match slug type '{}'",
                    parts.section_type
                )));
            }
            Some(category) => category,
            None => parts.section_type,
        };

        let name = new.name.trim();
        if name.is_empty() || name.chars().count() > SECTION_NAME_MAX_LENGTH {
            return Err(ServiceError::ValidationError(format!(
                "Section name must be 1 to {SECTION_NAME_MAX_LENGTH} characters"
            )));
        }

        let compatibility_flags = parse_compatibility_flags(&new.compatibility_flags)?;

        let section = Section {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            vertical: parts.vertical,
            kit_number: parts.kit.to_string(),
            section_type_number: parts.number.to_string(),
            version: new.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            status: new.status.unwrap_or_default(),
            compatibility_flags,
            created_at: Utc::now(),
            slug: new.slug,
        };

        let mut sections = store::write(&self.sections);
        if sections.contains_key(&section.slug) {
            return Err(ServiceError::Conflict(format!(
                "section '{}' already exists",
                section.slug
            )));
        }
        sections.insert(section.slug.clone(), section.clone());
        tracing::info!(category = %section.category, "section registered");

        Ok(section)
    }

    /// ## Errors
    /// Returns `ServiceError::NotFound` if no section has this slug.
    pub fn get(&self, slug: &str) -> ServiceResult<Section> {
        store::read(&self.sections)
            .get(slug)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("section '{slug}'")))
    }

    /// Sections ordered alphabetically by category wire name, then by name.
    #[must_use]
    pub fn list(&self) -> Vec<Section> {
        let mut sections: Vec<Section> = store::read(&self.sections).values().cloned().collect();
        sections.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        sections
    }

    /// ## Errors
    /// Returns `ServiceError::NotFound` if no section has this slug.
    pub fn set_status(&self, slug: &str, status: SectionStatus) -> ServiceResult<Section> {
        let mut sections = store::write(&self.sections);
        let section = sections
            .get_mut(slug)
            .ok_or_else(|| ServiceError::NotFound(format!("section '{slug}'")))?;
        section.status = status;
        Ok(section.clone())
    }
}
