//! Subcommand handlers.
//!
//! ## Summary
//! Every handler writes JSON (or a bare slug) to the given writer and
//! reports whether the checked input was valid, so `main` can map a failed
//! validation to a non-zero exit status.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use sitewright_core::composition::validate_composition;
use sitewright_core::config::Settings;
use sitewright_core::naming::validate_section_name;
use sitewright_core::util::slug::generate_tenant_slug;
use sitewright_service::section::SectionCatalog;
use sitewright_service::template::{NewPage, TemplateLibrary, compose_page, seed_starter_kit};
use sitewright_service::tenant::{
    OnboardingRequest, TenantDirectory, check_slug, onboard_tenant, onboard_tenant_with_slug,
};

use crate::cli::{Command, OnboardArgs, SeedKitArgs};
use crate::error::AppResult;
use crate::storage::JsonTenantDirectory;

/// `(is_valid, error_message)` as printed by the validation commands.
#[derive(Debug, Serialize)]
struct ValidationReport {
    is_valid: bool,
    error_message: String,
}

impl From<(bool, String)> for ValidationReport {
    fn from((is_valid, error_message): (bool, String)) -> Self {
        Self {
            is_valid,
            error_message,
        }
    }
}

/// ## Summary
/// Runs one subcommand.
///
/// Returns `Ok(false)` when the command ran but the input it checked was
/// invalid.
///
/// ## Errors
/// Returns an error if the tenant file cannot be read or written, a service
/// call rejects its input, or output cannot be written.
pub fn run<W: Write>(command: Command, settings: &Settings, out: &mut W) -> AppResult<bool> {
    match command {
        Command::Slug { name, max_length } => {
            let max_length = max_length.unwrap_or(settings.slug.max_length);
            writeln!(out, "{}", generate_tenant_slug(&name, max_length))?;
            Ok(true)
        }
        Command::CheckSlug { name } => {
            let directory = open_directory(settings)?;
            emit(out, &check_slug(&directory, settings, &name, None)?)?;
            Ok(true)
        }
        Command::Onboard(args) => onboard(args, settings, out),
        Command::Tenants => {
            let directory = open_directory(settings)?;
            emit(out, &directory.list()?)?;
            Ok(true)
        }
        Command::ValidateSection { slug } => {
            report(out, validate_section_name(&slug).into_pair())
        }
        Command::ValidateComposition { categories } => {
            report(out, validate_composition(&categories).into_pair())
        }
        Command::SeedKit(args) => seed_kit(&args, out),
    }
}

fn onboard<W: Write>(args: OnboardArgs, settings: &Settings, out: &mut W) -> AppResult<bool> {
    let directory = open_directory(settings)?;
    let request = OnboardingRequest {
        business_name: args.business_name,
        contact_email: args.email,
        contact_phone: args.phone,
        city: args.city,
        country: args.country,
        industry_category: args.industry,
    };

    let tenant = match args.slug.as_deref() {
        Some(slug) => onboard_tenant_with_slug(&directory, settings, request, slug)?,
        None => onboard_tenant(&directory, settings, request)?,
    };
    tracing::info!(slug = %tenant.slug, path = %directory.path().display(), "tenant stored");

    emit(out, &tenant)?;
    Ok(true)
}

fn seed_kit<W: Write>(args: &SeedKitArgs, out: &mut W) -> AppResult<bool> {
    let catalog = SectionCatalog::new();
    let library = TemplateLibrary::new();
    let template = seed_starter_kit(&catalog, &library, args.vertical, args.number)?;

    match args.tenant.as_deref() {
        Some(tenant) => {
            let page = NewPage {
                slug: args.page_slug.clone(),
                title: args.page_title.clone(),
            };
            emit(out, &compose_page(&library, &catalog, &template.slug, tenant, page)?)?;
        }
        None => emit(out, &template)?,
    }
    Ok(true)
}

fn open_directory(settings: &Settings) -> AppResult<JsonTenantDirectory> {
    JsonTenantDirectory::open(Path::new(&settings.storage.tenants_path))
}

fn report<W: Write>(out: &mut W, outcome: (bool, String)) -> AppResult<bool> {
    let report = ValidationReport::from(outcome);
    emit(out, &report)?;
    Ok(report.is_valid)
}

fn emit<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
