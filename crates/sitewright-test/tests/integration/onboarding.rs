//! Integration tests for tenant onboarding.

use std::path::Path;

use super::helpers::{SaturatedDirectory, has_random_suffix, request, settings_in};
use sitewright_test::app::storage::JsonTenantDirectory;
use sitewright_test::component::error::ServiceError;
use sitewright_test::component::tenant::{
    TenantDirectory, check_slug, onboard_tenant, onboard_tenant_with_slug,
};
use sitewright_test::component::util::slug::generate_slug;

/// Onboards several businesses into a file-backed directory and reopens it.
#[test_log::test]
fn onboarding_persists_unique_slugs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(&dir);
    let path = Path::new(&settings.storage.tenants_path);

    {
        let directory = JsonTenantDirectory::open(path).expect("open");
        for name in ["Mary's Restaurant & Café", "Mary's Restaurant & Cafe", "WWW"] {
            onboard_tenant(&directory, &settings, request(name)).expect("onboarded");
        }
    }

    let directory = JsonTenantDirectory::open(path).expect("reopen");
    let mut slugs: Vec<String> = directory
        .list()
        .expect("list")
        .into_iter()
        .map(|t| t.slug)
        .collect();
    slugs.sort();
    assert_eq!(slugs, ["marys-restaurant-cafe", "marys-restaurant-cafe-2", "site"]);

    let preview = check_slug(&directory, &settings, "Mary's Restaurant & Café", None)
        .expect("check");
    assert_eq!(preview.suggested_slug, "marys-restaurant-cafe-3");
}

/// Two handles on one tenant file, standing in for two processes, never
/// hand out the same slug.
#[test_log::test]
fn handles_on_one_file_never_share_a_slug() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(&dir);
    let path = Path::new(&settings.storage.tenants_path);
    let first = JsonTenantDirectory::open(path).expect("open first");
    let second = JsonTenantDirectory::open(path).expect("open second");

    let a = onboard_tenant(&first, &settings, request("Corner Bakery")).expect("first");
    let b = onboard_tenant(&second, &settings, request("Corner Bakery")).expect("second");

    assert_eq!(a.slug, "corner-bakery");
    assert_eq!(b.slug, "corner-bakery-2");
    assert_eq!(b.domain, "corner-bakery-2.lvh.me");
    let reopened = JsonTenantDirectory::open(path).expect("reopen");
    assert_eq!(reopened.list().expect("list").len(), 2);
}

/// Falls back to a random suffix once every numbered slug is taken.
#[test_log::test]
fn saturated_directory_gets_random_suffix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(&dir);
    let directory = SaturatedDirectory::default();

    let tenant = onboard_tenant(&directory, &settings, request("Foo")).expect("onboarded");

    assert!(has_random_suffix(&tenant.slug, "foo"), "{}", tenant.slug);
    assert_eq!(directory.lookups(), 100);
    assert_eq!(tenant.domain, format!("{}.lvh.me", tenant.slug));
}

/// Generated slugs always satisfy the custom slug rules.
#[test]
fn generated_slugs_are_valid_tenant_slugs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(&dir);
    let directory = JsonTenantDirectory::open(Path::new(&settings.storage.tenants_path))
        .expect("open");

    for name in [
        "Ünïcödé Bäckerei",
        "  --Weird---Name--  ",
        "A very long business name that keeps going and going",
        "日本料理",
    ] {
        let slug = generate_slug(name);
        let tenant = onboard_tenant_with_slug(&directory, &settings, request("Some Business"), &slug)
            .expect("generated slug accepted");
        assert_eq!(tenant.slug, slug);
    }

    assert!(matches!(
        onboard_tenant(&directory, &settings, request("")),
        Err(ServiceError::ValidationError(_))
    ));
}
