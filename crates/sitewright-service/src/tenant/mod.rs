//! Tenants: records, storage and onboarding.

pub mod directory;
pub mod model;
pub mod onboarding;

pub use directory::{InMemoryTenantDirectory, TenantDirectory};
pub use model::Tenant;
pub use onboarding::{
    OnboardingRequest, SlugCheck, check_slug, onboard_tenant, onboard_tenant_with_slug,
};
