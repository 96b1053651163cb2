//! Tenant storage seam.
//!
//! ## Summary
//! [`TenantDirectory`] is the only way the onboarding flow touches storage.
//! Implementations must reject a second tenant with the same slug or domain
//! at insert time; the existence check performed before insert is advisory
//! and can race with a concurrent onboarding.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::RwLock;

use uuid::Uuid;

use sitewright_core::util::unique::SlugExists;

use crate::error::{ServiceError, ServiceResult};
use crate::store;

use super::model::Tenant;

pub trait TenantDirectory {
    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> ServiceResult<bool>;

    /// ## Errors
    /// Returns `ServiceError::Conflict` if the slug or domain is already taken.
    fn insert(&self, tenant: Tenant) -> ServiceResult<Tenant>;

    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    fn by_slug(&self, slug: &str) -> ServiceResult<Option<Tenant>>;

    /// Lists tenants, newest first.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    fn list(&self) -> ServiceResult<Vec<Tenant>>;
}

/// Tenants keyed by slug.
#[derive(Debug, Default)]
pub struct InMemoryTenantDirectory {
    tenants: RwLock<BTreeMap<String, Tenant>>,
}

impl InMemoryTenantDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory pre-populated with `tenants`, e.g. from a file.
    ///
    /// ## Errors
    /// Returns `ServiceError::Conflict` if two tenants share a slug or domain.
    pub fn with_tenants(tenants: impl IntoIterator<Item = Tenant>) -> ServiceResult<Self> {
        let directory = Self::new();
        directory.replace_all(tenants)?;
        Ok(directory)
    }

    /// Swaps the whole contents for `tenants`, e.g. after re-reading a file
    /// another process may have changed. On error the contents are unchanged.
    ///
    /// ## Errors
    /// Returns `ServiceError::Conflict` if two tenants share a slug or domain.
    pub fn replace_all(&self, tenants: impl IntoIterator<Item = Tenant>) -> ServiceResult<()> {
        let mut fresh = BTreeMap::new();
        for tenant in tenants {
            check_free(&fresh, &tenant)?;
            fresh.insert(tenant.slug.clone(), tenant);
        }
        *store::write(&self.tenants) = fresh;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        store::read(&self.tenants).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TenantDirectory for InMemoryTenantDirectory {
    fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> ServiceResult<bool> {
        let tenants = store::read(&self.tenants);
        Ok(tenants
            .get(slug)
            .is_some_and(|tenant| Some(tenant.id) != exclude_id))
    }

    fn insert(&self, tenant: Tenant) -> ServiceResult<Tenant> {
        let mut tenants = store::write(&self.tenants);
        check_free(&tenants, &tenant)?;
        tenants.insert(tenant.slug.clone(), tenant.clone());
        Ok(tenant)
    }

    fn by_slug(&self, slug: &str) -> ServiceResult<Option<Tenant>> {
        Ok(store::read(&self.tenants).get(slug).cloned())
    }

    fn list(&self) -> ServiceResult<Vec<Tenant>> {
        let mut tenants: Vec<Tenant> = store::read(&self.tenants).values().cloned().collect();
        tenants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tenants)
    }
}

fn check_free(tenants: &BTreeMap<String, Tenant>, tenant: &Tenant) -> ServiceResult<()> {
    if tenants.contains_key(&tenant.slug) {
        return Err(ServiceError::Conflict(format!(
            "tenant with slug '{}' already exists",
            tenant.slug
        )));
    }
    if tenants.values().any(|t| t.domain == tenant.domain) {
        return Err(ServiceError::Conflict(format!(
            "domain '{}' is already assigned",
            tenant.domain
        )));
    }
    Ok(())
}

/// Adapts a fallible [`TenantDirectory`] to the infallible [`SlugExists`]
/// check. The first storage error is kept and every later lookup answers
/// "free" so uniquification stops immediately; callers must inspect
/// [`CheckedLookup::finish`] before trusting the result.
pub(crate) struct CheckedLookup<'a, D: ?Sized> {
    directory: &'a D,
    failure: RefCell<Option<ServiceError>>,
}

impl<'a, D: TenantDirectory + ?Sized> CheckedLookup<'a, D> {
    pub(crate) const fn new(directory: &'a D) -> Self {
        Self {
            directory,
            failure: RefCell::new(None),
        }
    }

    /// ## Errors
    /// Returns the first storage error seen during lookups.
    pub(crate) fn finish(self) -> ServiceResult<()> {
        self.failure.into_inner().map_or(Ok(()), Err)
    }
}

impl<D: TenantDirectory + ?Sized> SlugExists for CheckedLookup<'_, D> {
    fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> bool {
        if self.failure.borrow().is_some() {
            return false;
        }
        match self.directory.slug_exists(slug, exclude_id) {
            Ok(taken) => taken,
            Err(err) => {
                tracing::error!(slug, error = %err, "slug lookup failed");
                *self.failure.borrow_mut() = Some(err);
                false
            }
        }
    }
}
