use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_SLUG_MAX_LENGTH;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub slug: SlugConfig,
    pub onboarding: OnboardingConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlugConfig {
    pub max_length: usize,
    /// Appended to a tenant slug to form its primary domain, e.g. `.lvh.me`.
    pub subdomain_suffix: String,
    pub dev_port: u16,
}

impl SlugConfig {
    /// ## Summary
    /// Returns the primary domain for a tenant slug, e.g. `marys-cafe.lvh.me`.
    #[must_use]
    pub fn domain_for(&self, slug: &str) -> String {
        format!("{slug}{}", self.subdomain_suffix)
    }

    /// ## Summary
    /// Returns the local development URL for a tenant slug.
    #[must_use]
    pub fn dev_url_for(&self, slug: &str) -> String {
        format!("http://{}:{}", self.domain_for(slug), self.dev_port)
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_SLUG_MAX_LENGTH,
            subdomain_suffix: ".lvh.me".to_string(),
            dev_port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingConfig {
    /// How many times a tenant insert is retried after losing a slug race.
    pub max_commit_attempts: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub tenants_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // Environment, e.g. SITEWRIGHT_SLUG__MAX_LENGTH=40
            .add_source(
                config::Environment::with_prefix("SITEWRIGHT")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds settings from defaults only, ignoring the environment.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn defaults() -> Result<Self> {
        Ok(Self::builder()?.build()?.try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let slug = SlugConfig::default();
        Ok(Config::builder()
            .set_default("slug.max_length", slug.max_length as u64)?
            .set_default("slug.subdomain_suffix", slug.subdomain_suffix)?
            .set_default("slug.dev_port", u64::from(slug.dev_port))?
            .set_default("onboarding.max_commit_attempts", 3)?
            .set_default("storage.tenants_path", "tenants.json")?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
