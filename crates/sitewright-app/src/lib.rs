//! Command-line front end for tenant onboarding and the section library.

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;
