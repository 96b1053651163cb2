//! Test helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;
use uuid::Uuid;

use sitewright_test::component::config::Settings;
use sitewright_test::component::error::ServiceResult;
use sitewright_test::component::tenant::{
    InMemoryTenantDirectory, OnboardingRequest, Tenant, TenantDirectory,
};

/// Default settings with the tenant file placed inside `dir`.
pub fn settings_in(dir: &TempDir) -> Settings {
    let mut settings = Settings::defaults().expect("default settings");
    settings.storage.tenants_path = dir
        .path()
        .join("tenants.json")
        .to_string_lossy()
        .into_owned();
    settings
}

pub fn request(business_name: &str) -> OnboardingRequest {
    OnboardingRequest {
        business_name: business_name.to_string(),
        contact_email: "owner@example.com".to_string(),
        ..OnboardingRequest::default()
    }
}

/// `true` if `slug` is `{base}-` followed by six lowercase hex digits.
pub fn has_random_suffix(slug: &str, base: &str) -> bool {
    slug.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| {
            suffix.len() == 6
                && suffix
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        })
}

/// Directory that reports every slug as taken and counts the lookups.
#[derive(Default)]
pub struct SaturatedDirectory {
    pub inner: InMemoryTenantDirectory,
    pub lookups: AtomicUsize,
}

impl SaturatedDirectory {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TenantDirectory for SaturatedDirectory {
    fn slug_exists(&self, _slug: &str, _exclude_id: Option<Uuid>) -> ServiceResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    fn insert(&self, tenant: Tenant) -> ServiceResult<Tenant> {
        self.inner.insert(tenant)
    }

    fn by_slug(&self, slug: &str) -> ServiceResult<Option<Tenant>> {
        self.inner.by_slug(slug)
    }

    fn list(&self) -> ServiceResult<Vec<Tenant>> {
        self.inner.list()
    }
}
