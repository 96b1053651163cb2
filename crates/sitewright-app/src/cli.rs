use clap::{Args, Parser, Subcommand};

use sitewright_core::types::{IndustryCategory, Vertical};

#[derive(Parser, Debug)]
#[command(name = "sitewright", version, about = "Tenant onboarding and section library tools.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the slug generated for a business name.
    Slug {
        name: String,
        /// Override `slug.max_length`.
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,
    },
    /// Preview the unique slug a business would receive.
    CheckSlug { name: String },
    /// Create a tenant and store it in the tenant file.
    Onboard(OnboardArgs),
    /// List stored tenants, newest first.
    Tenants,
    /// Check a section identifier such as `jcw-rest-01-hero01`.
    ValidateSection { slug: String },
    /// Check an ordered list of section categories against the layout rules.
    ValidateComposition {
        #[arg(value_name = "CATEGORY")]
        categories: Vec<String>,
    },
    /// Build a starter kit in memory and print its template.
    SeedKit(SeedKitArgs),
}

#[derive(Args, Debug)]
pub struct OnboardArgs {
    #[arg(long)]
    pub business_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    /// One of restaurant, retail, services, healthcare, other.
    #[arg(long)]
    pub industry: Option<IndustryCategory>,
    /// Use this slug instead of deriving one from the business name.
    #[arg(long)]
    pub slug: Option<String>,
}

#[derive(Args, Debug)]
pub struct SeedKitArgs {
    /// One of rest, svc, shop.
    #[arg(long, default_value = "rest")]
    pub vertical: Vertical,
    /// Kit number, 1 to 99.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=99))]
    pub number: u8,
    /// Also compose the kit's home page for this tenant slug.
    #[arg(long, value_name = "SLUG")]
    pub tenant: Option<String>,
    /// Slug of the composed page. Defaults to `home`.
    #[arg(long, requires = "tenant")]
    pub page_slug: Option<String>,
    /// Title of the composed page. Defaults to `Home Page`.
    #[arg(long, requires = "tenant")]
    pub page_title: Option<String>,
}
