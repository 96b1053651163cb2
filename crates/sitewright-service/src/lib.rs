//! Sitewright services: tenant onboarding, the section catalog and template
//! composition, written against injected stores.

pub mod error;
pub mod section;
mod store;
pub mod template;
pub mod tenant;
