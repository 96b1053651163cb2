//! Templates: ordered lists of catalog sections.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitewright_core::constants::CATALOG_SLUG_MAX_LENGTH;
use sitewright_core::types::WebsiteType;
use sitewright_core::util::slug::has_slug_charset;

use crate::error::{ServiceError, ServiceResult};
use crate::section::SectionCatalog;
use crate::store;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTemplate {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub website_type: WebsiteType,
    pub is_default: bool,
}

/// A section's slot inside a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub section_slug: String,
    pub order_index: u32,
    pub is_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub website_type: WebsiteType,
    pub is_default: bool,
    /// Sorted by `order_index`.
    pub sections: Vec<TemplateSection>,
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Section slugs in page order.
    pub fn ordered_sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.section_slug.as_str())
    }
}

/// In-memory template store keyed by slug.
#[derive(Debug, Default)]
pub struct TemplateLibrary {
    templates: RwLock<BTreeMap<String, Template>>,
}

impl TemplateLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Stores a new, empty template. A default template replaces the
    /// previous default for the same website type.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` for a malformed slug or blank
    /// name, and `ServiceError::Conflict` if the slug is taken.
    #[tracing::instrument(skip(self, new), fields(slug = %new.slug))]
    pub fn create(&self, new: NewTemplate) -> ServiceResult<Template> {
        if new.slug.is_empty()
            || new.slug.len() > CATALOG_SLUG_MAX_LENGTH
            || !has_slug_charset(&new.slug)
        {
            return Err(ServiceError::ValidationError(format!(
                "Template slug must be 1 to {CATALOG_SLUG_MAX_LENGTH} lowercase letters, digits or hyphens"
            )));
        }
        let name = new.name.trim();
        if name.is_empty() {
            return Err(ServiceError::ValidationError(
                "Template name is required".to_string(),
            ));
        }

        let mut templates = store::write(&self.templates);
        if templates.contains_key(&new.slug) {
            return Err(ServiceError::Conflict(format!(
                "template '{}' already exists",
                new.slug
            )));
        }
        if new.is_default {
            clear_default(&mut templates, new.website_type);
        }

        let template = Template {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: new.description.filter(|d| !d.trim().is_empty()),
            website_type: new.website_type,
            is_default: new.is_default,
            sections: Vec::new(),
            created_at: Utc::now(),
            slug: new.slug,
        };
        templates.insert(template.slug.clone(), template.clone());
        tracing::info!(website_type = %template.website_type, "template created");

        Ok(template)
    }

    /// ## Summary
    /// Places a catalog section at `order_index` in the template.
    ///
    /// ## Errors
    /// Returns an error if:
    /// - The template or the section does not exist (`NotFound`)
    /// - Another section already holds `order_index` (`Conflict`)
    pub fn add_section(
        &self,
        catalog: &SectionCatalog,
        template_slug: &str,
        section_slug: &str,
        order_index: u32,
        is_required: bool,
    ) -> ServiceResult<Template> {
        catalog.get(section_slug)?;

        let mut templates = store::write(&self.templates);
        let template = templates
            .get_mut(template_slug)
            .ok_or_else(|| ServiceError::NotFound(format!("template '{template_slug}'")))?;

        let position = match template
            .sections
            .binary_search_by_key(&order_index, |s| s.order_index)
        {
            Ok(_) => {
                return Err(ServiceError::Conflict(format!(
                    "template '{template_slug}' already has a section at position {order_index}"
                )));
            }
            Err(position) => position,
        };
        template.sections.insert(
            position,
            TemplateSection {
                section_slug: section_slug.to_string(),
                order_index,
                is_required,
            },
        );

        Ok(template.clone())
    }

    /// ## Errors
    /// Returns `ServiceError::NotFound` if the template does not exist.
    pub fn set_default(&self, template_slug: &str) -> ServiceResult<Template> {
        let mut templates = store::write(&self.templates);
        let website_type = templates
            .get(template_slug)
            .map(|t| t.website_type)
            .ok_or_else(|| ServiceError::NotFound(format!("template '{template_slug}'")))?;

        clear_default(&mut templates, website_type);
        let template = templates
            .get_mut(template_slug)
            .ok_or_else(|| ServiceError::NotFound(format!("template '{template_slug}'")))?;
        template.is_default = true;
        Ok(template.clone())
    }

    /// ## Errors
    /// Returns `ServiceError::NotFound` if the template does not exist.
    pub fn get(&self, template_slug: &str) -> ServiceResult<Template> {
        store::read(&self.templates)
            .get(template_slug)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("template '{template_slug}'")))
    }

    /// The default template for a website type, if one is marked.
    #[must_use]
    pub fn default_for(&self, website_type: WebsiteType) -> Option<Template> {
        store::read(&self.templates)
            .values()
            .find(|t| t.website_type == website_type && t.is_default)
            .cloned()
    }

    /// Templates ordered by website type wire name, then by name.
    #[must_use]
    pub fn list(&self) -> Vec<Template> {
        let mut templates: Vec<Template> = store::read(&self.templates).values().cloned().collect();
        templates.sort_by(|a, b| {
            a.website_type
                .as_str()
                .cmp(b.website_type.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        templates
    }
}

fn clear_default(templates: &mut BTreeMap<String, Template>, website_type: WebsiteType) {
    templates
        .values_mut()
        .filter(|t| t.website_type == website_type)
        .for_each(|t| t.is_default = false);
}
