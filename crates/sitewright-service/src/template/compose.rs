//! Turning templates into tenant pages.
//!
//! ## Summary
//! A page is the resolved, ordered list of catalog sections from one
//! template. Composition rules are enforced here, at page build time, so a
//! template can be edited through invalid intermediate states.

use serde::{Deserialize, Serialize};

use sitewright_core::composition::validate_composition;
use sitewright_core::constants::{
    CATALOG_SLUG_MAX_LENGTH, DEFAULT_PAGE_SLUG, DEFAULT_PAGE_TITLE, PAGE_TITLE_MAX_LENGTH,
};
use sitewright_core::naming::{section_slug, template_slug};
use sitewright_core::types::{CompatibilityFlag, SectionCategory, SectionStatus, Vertical, WebsiteType};
use sitewright_core::util::slug::has_slug_charset;

use crate::error::{ServiceError, ServiceResult};
use crate::section::{NewSection, Section, SectionCatalog};

use super::library::{NewTemplate, Template, TemplateLibrary};

/// Section types of a starter kit, in page order. No navigation section, since
/// it may not precede the hero.
const STARTER_KIT_LAYOUT: [SectionCategory; 6] = [
    SectionCategory::Hero,
    SectionCategory::Feature,
    SectionCategory::Gallery,
    SectionCategory::Testimonial,
    SectionCategory::Cta,
    SectionCategory::Footer,
];

/// Gap between starter kit order indexes, leaving room for inserts.
const ORDER_STEP: u32 = 10;

/// Slug and title for a page being composed. Missing values fall back to
/// [`DEFAULT_PAGE_SLUG`] and [`DEFAULT_PAGE_TITLE`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPage {
    pub slug: Option<String>,
    pub title: Option<String>,
}

impl NewPage {
    /// ## Errors
    /// Returns `ServiceError::ValidationError` for a slug outside
    /// `[a-z0-9-]{1,50}` or a blank or overlong title.
    fn validated(self) -> ServiceResult<(String, String)> {
        let slug = self.slug.unwrap_or_else(|| DEFAULT_PAGE_SLUG.to_string());
        if slug.is_empty() || slug.len() > CATALOG_SLUG_MAX_LENGTH || !has_slug_charset(&slug) {
            return Err(ServiceError::ValidationError(format!(
                "Page slug must be 1 to {CATALOG_SLUG_MAX_LENGTH} lowercase letters, digits or hyphens"
            )));
        }

        let title = self
            .title
            .map_or_else(|| DEFAULT_PAGE_TITLE.to_string(), |t| t.trim().to_string());
        if title.is_empty() {
            return Err(ServiceError::ValidationError(
                "Page title is required".to_string(),
            ));
        }
        if title.chars().count() > PAGE_TITLE_MAX_LENGTH {
            return Err(ServiceError::ValidationError(format!(
                "Page title must be at most {PAGE_TITLE_MAX_LENGTH} characters"
            )));
        }

        Ok((slug, title))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub tenant_slug: String,
    pub slug: String,
    pub title: String,
    pub template_slug: String,
    pub sections: Vec<Section>,
}

/// ## Summary
/// Builds a tenant page from a template, checking the page layout rules.
///
/// ## Errors
/// Returns an error if:
/// - The page slug or title is malformed (`ValidationError`)
/// - The template or one of its sections does not exist (`NotFound`)
/// - The section order breaks a layout rule (`ValidationError` with the rule's message)
#[tracing::instrument(skip(library, catalog))]
pub fn compose_page(
    library: &TemplateLibrary,
    catalog: &SectionCatalog,
    template_slug: &str,
    tenant_slug: &str,
    page: NewPage,
) -> ServiceResult<Page> {
    let (slug, title) = page.validated()?;
    let template = library.get(template_slug)?;
    let sections = template
        .ordered_sections()
        .map(|slug| catalog.get(slug))
        .collect::<ServiceResult<Vec<_>>>()?;

    if let Some(message) = validate_composition(&sections).error_message() {
        tracing::warn!(reason = message, "template violates layout rules");
        return Err(ServiceError::ValidationError(message.to_string()));
    }
    tracing::debug!(sections = sections.len(), page = %slug, "page composed");

    Ok(Page {
        tenant_slug: tenant_slug.to_string(),
        slug,
        title,
        template_slug: template.slug,
        sections,
    })
}

/// ## Summary
/// Registers an approved starter kit for `vertical`: one section per
/// [`STARTER_KIT_LAYOUT`] entry plus a one-page template listing them in
/// layout order.
///
/// Nothing is registered unless the whole kit is new.
///
/// ## Errors
/// Returns `ServiceError::Conflict` if the template or any kit section
/// already exists.
#[tracing::instrument(skip(catalog, library))]
pub fn seed_starter_kit(
    catalog: &SectionCatalog,
    library: &TemplateLibrary,
    vertical: Vertical,
    kit: u8,
) -> ServiceResult<Template> {
    let slug = template_slug(vertical, kit);
    ensure_absent(library.get(&slug), "template", &slug)?;
    for category in STARTER_KIT_LAYOUT {
        let section = section_slug(vertical, kit, category, 1);
        ensure_absent(catalog.get(&section), "section", &section)?;
    }

    library.create(NewTemplate {
        slug: slug.clone(),
        name: format!("{} starter {kit:02}", vertical_label(vertical)),
        description: Some(format!("Approved {vertical} sections for kit {kit:02}")),
        website_type: WebsiteType::OnePage,
        is_default: false,
    })?;

    let mut template = None;
    for (index, category) in (0..).zip(STARTER_KIT_LAYOUT) {
        let section = catalog.register(NewSection {
            slug: section_slug(vertical, kit, category, 1),
            name: category.label().to_string(),
            category: Some(category),
            version: None,
            status: Some(SectionStatus::Approved),
            compatibility_flags: [CompatibilityFlag::Light, CompatibilityFlag::Dark]
                .iter()
                .map(ToString::to_string)
                .collect(),
        })?;
        template = Some(library.add_section(
            catalog,
            &slug,
            &section.slug,
            index * ORDER_STEP,
            true,
        )?);
    }

    tracing::info!(template = %slug, "starter kit seeded");
    template.map_or_else(|| library.get(&slug), Ok)
}

fn ensure_absent<T>(lookup: ServiceResult<T>, kind: &str, slug: &str) -> ServiceResult<()> {
    match lookup {
        Err(ServiceError::NotFound(_)) => Ok(()),
        Ok(_) => Err(ServiceError::Conflict(format!("{kind} '{slug}' already exists"))),
        Err(e) => Err(e),
    }
}

const fn vertical_label(vertical: Vertical) -> &'static str {
    match vertical {
        Vertical::Restaurant => "Restaurant",
        Vertical::Services => "Services",
        Vertical::Shop => "Shop",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (SectionCatalog, TemplateLibrary) {
        let catalog = SectionCatalog::new();
        let library = TemplateLibrary::new();
        seed_starter_kit(&catalog, &library, Vertical::Restaurant, 1).expect("seeded");
        (catalog, library)
    }

    #[test]
    fn test_seed_starter_kit() {
        let (catalog, library) = seeded();

        let template = library.get("jcw-rest-01").expect("template");
        assert_eq!(template.name, "Restaurant starter 01");
        let order: Vec<&str> = template.ordered_sections().collect();
        assert_eq!(
            order,
            [
                "jcw-rest-01-hero01",
                "jcw-rest-01-feature01",
                "jcw-rest-01-gallery01",
                "jcw-rest-01-testimonial01",
                "jcw-rest-01-cta01",
                "jcw-rest-01-footer01",
            ]
        );
        let hero = catalog.get("jcw-rest-01-hero01").expect("hero");
        assert_eq!(hero.status, SectionStatus::Approved);
        assert_eq!(
            hero.compatibility_flags,
            [CompatibilityFlag::Light, CompatibilityFlag::Dark]
        );

        assert!(matches!(
            seed_starter_kit(&catalog, &library, Vertical::Restaurant, 1),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn test_seed_starter_kit_leaves_nothing_behind_on_conflict() {
        let catalog = SectionCatalog::new();
        let library = TemplateLibrary::new();
        catalog
            .register(NewSection {
                slug: "jcw-rest-01-gallery01".to_string(),
                name: "Existing gallery".to_string(),
                ..NewSection::default()
            })
            .expect("gallery");

        let err = seed_starter_kit(&catalog, &library, Vertical::Restaurant, 1)
            .expect_err("gallery taken");
        assert!(
            matches!(&err, ServiceError::Conflict(reason) if reason.contains("jcw-rest-01-gallery01")),
            "{err}"
        );
        assert!(matches!(
            library.get("jcw-rest-01"),
            Err(ServiceError::NotFound(_))
        ));
        assert!(library.list().is_empty());
        assert_eq!(catalog.list().len(), 1);
        assert!(matches!(
            catalog.get("jcw-rest-01-hero01"),
            Err(ServiceError::NotFound(_))
        ));

        seed_starter_kit(&catalog, &library, Vertical::Restaurant, 2).expect("other kit");
    }

    #[test_log::test]
    fn test_compose_page() {
        let (catalog, library) = seeded();

        let page = compose_page(&library, &catalog, "jcw-rest-01", "marys-cafe", NewPage::default())
            .expect("composed");
        assert_eq!(page.slug, "home");
        assert_eq!(page.title, "Home Page");
        assert_eq!(page.tenant_slug, "marys-cafe");
        assert_eq!(page.sections.len(), 6);

        let about = compose_page(
            &library,
            &catalog,
            "jcw-rest-01",
            "marys-cafe",
            NewPage {
                slug: Some("about-us".to_string()),
                title: Some("  About Mary's  ".to_string()),
            },
        )
        .expect("composed");
        assert_eq!(about.slug, "about-us");
        assert_eq!(about.title, "About Mary's");
    }

    #[test]
    fn test_compose_page_validates_slug_and_title() {
        let (catalog, library) = seeded();
        let long_title = "x".repeat(101);
        let bad_pages = [
            (Some(""), None),
            (Some("About Us"), None),
            (Some("about_us"), None),
            (Some("../admin"), None),
            (None, Some("   ")),
            (None, Some(long_title.as_str())),
        ];

        for (slug, title) in bad_pages {
            let page = NewPage {
                slug: slug.map(ToString::to_string),
                title: title.map(ToString::to_string),
            };
            assert!(
                matches!(
                    compose_page(&library, &catalog, "jcw-rest-01", "marys-cafe", page),
                    Err(ServiceError::ValidationError(_))
                ),
                "{slug:?} / {title:?} should be rejected"
            );
        }

        let page = NewPage {
            slug: None,
            title: Some("x".repeat(100)),
        };
        compose_page(&library, &catalog, "jcw-rest-01", "marys-cafe", page).expect("100 chars");
    }

    #[test_log::test]
    fn test_compose_page_rejects_bad_layout() {
        let (catalog, library) = seeded();
        catalog
            .register(NewSection {
                slug: "jcw-rest-01-hero02".to_string(),
                name: "Second hero".to_string(),
                ..NewSection::default()
            })
            .expect("hero02");
        library
            .add_section(&catalog, "jcw-rest-01", "jcw-rest-01-hero02", 25, false)
            .expect("added");

        let err = compose_page(&library, &catalog, "jcw-rest-01", "marys-cafe", NewPage::default())
            .expect_err("two heroes");
        assert_eq!(
            err.to_string(),
            "Validation error: Only one hero section allowed per page"
        );
    }

    #[test]
    fn test_compose_page_rejects_nav_before_hero() {
        let (catalog, library) = seeded();
        catalog
            .register(NewSection {
                slug: "jcw-rest-01-nav01".to_string(),
                name: "Top bar".to_string(),
                ..NewSection::default()
            })
            .expect("nav");
        library
            .create(NewTemplate {
                slug: "jcw-rest-01-nav".to_string(),
                name: "With navigation".to_string(),
                ..NewTemplate::default()
            })
            .expect("template");
        for (index, slug) in (0..).zip(["jcw-rest-01-nav01", "jcw-rest-01-hero01"]) {
            library
                .add_section(&catalog, "jcw-rest-01-nav", slug, index, true)
                .expect("added");
        }

        let err = compose_page(&library, &catalog, "jcw-rest-01-nav", "marys-cafe", NewPage::default())
            .expect_err("nav first");
        assert_eq!(
            err.to_string(),
            "Validation error: Hero section must be the first section on the page"
        );
    }

    #[test]
    fn test_compose_page_unknown_template() {
        let (catalog, library) = seeded();
        assert!(matches!(
            compose_page(&library, &catalog, "jcw-shop-01", "marys-cafe", NewPage::default()),
            Err(ServiceError::NotFound(_))
        ));
    }
}
