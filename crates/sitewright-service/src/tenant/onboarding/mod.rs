//! Tenant onboarding service.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitewright_core::config::Settings;
use sitewright_core::constants::{
    BUSINESS_NAME_MAX_LENGTH, BUSINESS_NAME_MIN_LENGTH, CONTACT_PHONE_MAX_LENGTH,
};
use sitewright_core::types::IndustryCategory;
use sitewright_core::util::slug::{generate_tenant_slug, validate_tenant_slug};
use sitewright_core::util::unique::ensure_unique_slug;

use crate::error::{ServiceError, ServiceResult};

use super::directory::{CheckedLookup, TenantDirectory};
use super::model::Tenant;

/// Data collected by the onboarding form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub business_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub industry_category: Option<IndustryCategory>,
}

impl OnboardingRequest {
    /// ## Summary
    /// Trims free-text fields and checks them against the form rules.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` naming the first invalid field.
    pub fn validated(self) -> ServiceResult<Self> {
        let business_name = self.business_name.trim().to_string();
        let name_len = business_name.chars().count();
        if name_len < BUSINESS_NAME_MIN_LENGTH {
            return Err(ServiceError::ValidationError(format!(
                "Business name must be at least {BUSINESS_NAME_MIN_LENGTH} characters long"
            )));
        }
        if name_len > BUSINESS_NAME_MAX_LENGTH {
            return Err(ServiceError::ValidationError(format!(
                "Business name must be at most {BUSINESS_NAME_MAX_LENGTH} characters long"
            )));
        }

        let contact_email = self.contact_email.trim().to_string();
        if !is_plausible_email(&contact_email) {
            return Err(ServiceError::ValidationError(
                "Enter a valid email address".to_string(),
            ));
        }

        let contact_phone = non_blank(self.contact_phone);
        if contact_phone
            .as_ref()
            .is_some_and(|phone| phone.chars().count() > CONTACT_PHONE_MAX_LENGTH)
        {
            return Err(ServiceError::ValidationError(format!(
                "Contact phone must be at most {CONTACT_PHONE_MAX_LENGTH} characters"
            )));
        }

        Ok(Self {
            business_name,
            contact_email,
            contact_phone,
            city: non_blank(self.city),
            country: non_blank(self.country),
            industry_category: self.industry_category,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One `@`, a non-empty local part and a dotted domain without empty labels.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Answer to "what subdomain would this business get?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugCheck {
    pub suggested_slug: String,
    pub dev_url: String,
    /// `true` when the generated slug was free without a suffix.
    pub is_available: bool,
}

/// ## Summary
/// Previews the slug a business name would receive, without reserving it.
///
/// `exclude_id` lets an existing tenant preview against everyone but itself.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` for an empty name, or the storage
/// error raised while probing the directory.
#[tracing::instrument(skip(directory, settings))]
pub fn check_slug<D: TenantDirectory + ?Sized>(
    directory: &D,
    settings: &Settings,
    business_name: &str,
    exclude_id: Option<Uuid>,
) -> ServiceResult<SlugCheck> {
    let base = generate_tenant_slug(business_name, settings.slug.max_length);
    if base.is_empty() {
        return Err(ServiceError::ValidationError(
            "business_name is required".to_string(),
        ));
    }

    let lookup = CheckedLookup::new(directory);
    let suggested_slug = ensure_unique_slug(&base, &lookup, exclude_id);
    lookup.finish()?;

    tracing::debug!(base = %base, suggested = %suggested_slug, "slug checked");

    Ok(SlugCheck {
        dev_url: settings.slug.dev_url_for(&suggested_slug),
        is_available: base == suggested_slug,
        suggested_slug,
    })
}

/// ## Summary
/// Creates a tenant whose slug is derived from its business name.
///
/// ## Side Effects
/// - Inserts the tenant and its primary domain into the directory
///
/// ## Errors
/// Returns an error if:
/// - The request fails validation
/// - The directory keeps rejecting the slug after the configured attempts
/// - Storage fails
#[tracing::instrument(skip_all, fields(business_name = %request.business_name))]
pub fn onboard_tenant<D: TenantDirectory + ?Sized>(
    directory: &D,
    settings: &Settings,
    request: OnboardingRequest,
) -> ServiceResult<Tenant> {
    let request = request.validated()?;
    let base = generate_tenant_slug(&request.business_name, settings.slug.max_length);

    commit(directory, settings, &request, &base)
}

/// ## Summary
/// Creates a tenant with an administrator-chosen slug. The slug still gets a
/// numeric suffix if it is taken.
///
/// ## Errors
/// Returns an error if the request or slug fails validation, the directory
/// keeps rejecting the slug, or storage fails.
#[tracing::instrument(skip(directory, settings, request), fields(business_name = %request.business_name))]
pub fn onboard_tenant_with_slug<D: TenantDirectory + ?Sized>(
    directory: &D,
    settings: &Settings,
    request: OnboardingRequest,
    slug: &str,
) -> ServiceResult<Tenant> {
    let request = request.validated()?;
    validate_tenant_slug(slug, settings.slug.max_length)?;

    commit(directory, settings, &request, slug)
}

/// Uniquifies `base` and inserts, starting over when a concurrent insert
/// claims the slug between the check and the write.
fn commit<D: TenantDirectory + ?Sized>(
    directory: &D,
    settings: &Settings,
    request: &OnboardingRequest,
    base: &str,
) -> ServiceResult<Tenant> {
    let max_attempts = settings.onboarding.max_commit_attempts.max(1);
    let mut attempt = 1;

    loop {
        let lookup = CheckedLookup::new(directory);
        let slug = ensure_unique_slug(base, &lookup, None);
        lookup.finish()?;

        let tenant = Tenant {
            id: Uuid::new_v4(),
            domain: settings.slug.domain_for(&slug),
            slug,
            business_name: request.business_name.clone(),
            contact_email: request.contact_email.clone(),
            contact_phone: request.contact_phone.clone(),
            city: request.city.clone(),
            country: request.country.clone(),
            industry_category: request.industry_category.unwrap_or_default(),
            is_active: true,
            created_at: Utc::now(),
        };

        match directory.insert(tenant) {
            Ok(tenant) => {
                tracing::info!(
                    tenant_id = %tenant.id,
                    slug = %tenant.slug,
                    domain = %tenant.domain,
                    "tenant created"
                );
                return Ok(tenant);
            }
            Err(ServiceError::Conflict(reason)) if attempt < max_attempts => {
                tracing::warn!(attempt, %reason, "slug claimed concurrently, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
