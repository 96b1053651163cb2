use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitewright_core::config::SlugConfig;
use sitewright_core::types::IndustryCategory;

/// A business that owns one subdomain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    /// Subdomain label; never changes once assigned.
    pub slug: String,
    pub business_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub industry_category: IndustryCategory,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Primary domain, `{slug}{subdomain_suffix}`.
    pub domain: String,
}

impl Tenant {
    /// Local development URL for this tenant.
    #[must_use]
    pub fn dev_url(&self, slug_config: &SlugConfig) -> String {
        format!("http://{}:{}", self.domain, slug_config.dev_port)
    }
}
