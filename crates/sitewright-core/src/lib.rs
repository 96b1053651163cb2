//! Sitewright core: slug generation, naming conventions and page composition
//! rules shared by the service and application crates.
//!
//! Everything in this crate is pure and synchronous. Persistence is reached
//! only through the [`util::unique::SlugExists`] capability injected by callers.

pub mod composition;
pub mod config;
pub mod constants;
pub mod error;
pub mod naming;
pub mod types;
pub mod util;
