//! Sitewright integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `sitewright_test::component::` paths.

pub mod component {
    pub use sitewright_core::{composition, config, constants, naming, types, util};
    pub use sitewright_service::{section, template, tenant};

    pub mod error {
        pub use sitewright_core::error::{CoreError, CoreResult};
        pub use sitewright_service::error::{ServiceError, ServiceResult};
    }
}

pub mod app {
    pub use sitewright_app::*;
}
