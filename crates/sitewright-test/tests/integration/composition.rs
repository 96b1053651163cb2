//! Integration tests for the section library and page composition.

use sitewright_test::component::composition::validate_composition;
use sitewright_test::component::error::ServiceError;
use sitewright_test::component::naming::{section_slug, validate_section_name};
use sitewright_test::component::section::{NewSection, SectionCatalog};
use sitewright_test::component::template::{
    NewPage, NewTemplate, TemplateLibrary, compose_page, seed_starter_kit,
};
use sitewright_test::component::types::{SectionCategory, Vertical, WebsiteType};

/// Every section a starter kit registers passes the naming check.
#[test]
fn starter_kits_use_valid_section_names() {
    let catalog = SectionCatalog::new();
    let library = TemplateLibrary::new();

    for vertical in Vertical::ALL {
        seed_starter_kit(&catalog, &library, *vertical, 7).expect("seeded");
    }

    let sections = catalog.list();
    assert_eq!(sections.len(), 18);
    for section in &sections {
        assert!(validate_section_name(&section.slug).is_valid(), "{}", section.slug);
    }
    assert_eq!(library.list().len(), 3);
}

/// Builds a multi-page template by hand and composes it.
#[test_log::test]
fn hand_built_template_composes_in_order() {
    let catalog = SectionCatalog::new();
    let library = TemplateLibrary::new();

    for category in [
        SectionCategory::Footer,
        SectionCategory::Gallery,
        SectionCategory::Hero,
        SectionCategory::Nav,
    ] {
        catalog
            .register(NewSection {
                slug: section_slug(Vertical::Services, 4, category, 2),
                name: category.label().to_string(),
                ..NewSection::default()
            })
            .expect("section");
    }
    library
        .create(NewTemplate {
            slug: "svc-studio".to_string(),
            name: "Studio".to_string(),
            description: Some("Service studio layout".to_string()),
            website_type: WebsiteType::MultiPage,
            is_default: true,
        })
        .expect("template");

    for (index, category) in [
        (10, SectionCategory::Hero),
        (20, SectionCategory::Nav),
        (30, SectionCategory::Gallery),
        (40, SectionCategory::Footer),
    ] {
        library
            .add_section(
                &catalog,
                "svc-studio",
                &section_slug(Vertical::Services, 4, category, 2),
                index,
                true,
            )
            .expect("added");
    }

    let page = compose_page(
        &library,
        &catalog,
        "svc-studio",
        "bright-studio",
        NewPage {
            slug: Some("services".to_string()),
            title: Some("Our Services".to_string()),
        },
    )
    .expect("composed");
    let categories: Vec<SectionCategory> = page.sections.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        [
            SectionCategory::Hero,
            SectionCategory::Nav,
            SectionCategory::Gallery,
            SectionCategory::Footer
        ]
    );
    assert_eq!(page.slug, "services");
    assert_eq!(page.title, "Our Services");
    assert!(validate_composition(&page.sections).is_valid());
    assert_eq!(
        library.default_for(WebsiteType::MultiPage).map(|t| t.slug),
        Some("svc-studio".to_string())
    );
}

/// A template whose footer is not last cannot become a page.
#[test]
fn footer_must_close_the_page() {
    let catalog = SectionCatalog::new();
    let library = TemplateLibrary::new();
    seed_starter_kit(&catalog, &library, Vertical::Shop, 1).expect("seeded");
    catalog
        .register(NewSection {
            slug: "jcw-shop-01-cta02".to_string(),
            name: "Late offer".to_string(),
            ..NewSection::default()
        })
        .expect("cta02");
    library
        .add_section(&catalog, "jcw-shop-01", "jcw-shop-01-cta02", 99, false)
        .expect("added");

    let err = compose_page(&library, &catalog, "jcw-shop-01", "corner-shop", NewPage::default())
        .expect_err("footer not last");
    assert!(matches!(err, ServiceError::ValidationError(_)));
    assert_eq!(
        err.to_string(),
        "Validation error: Footer section must be the last section on the page"
    );
}
