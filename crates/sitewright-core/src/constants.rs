/// Subdomain labels that can never be handed to a tenant.
pub const RESERVED_SLUGS: &[&str] = &[
    "www",
    "api",
    "admin",
    "app",
    "mail",
    "ftp",
    "localhost",
    "root",
    "test",
    "staging",
    "dev",
    "demo",
    "support",
    "help",
    "blog",
    "news",
    "about",
    "contact",
];

/// Slug used when a business name normalizes to nothing usable.
pub const FALLBACK_SLUG: &str = "site";

/// Default cap on generated tenant slugs.
pub const DEFAULT_SLUG_MAX_LENGTH: usize = 30;

/// Numeric suffix attempts before falling back to a random suffix.
pub const MAX_UNIQUE_SUFFIX: u32 = 100;

/// Length of the hexadecimal suffix used once numeric suffixes are exhausted.
pub const RANDOM_SUFFIX_LEN: usize = 6;

pub const SECTION_PREFIX: &str = "jcw";
pub const SECTION_FORMAT: &str =
    const_str::concat!(SECTION_PREFIX, "-{vertical}-{kit}-{type}{number}");
pub const SECTION_FORMAT_EXAMPLE: &str = const_str::concat!(SECTION_PREFIX, "-rest-01-hero01");

/// Regex for the raw section identifier shape; field checks run afterwards.
pub const SECTION_SLUG_PATTERN: &str =
    const_str::concat!("^", SECTION_PREFIX, r"-([a-z]+)-(\d+)-([a-z]+)(\d+)$");

/// Longest accepted section or template slug.
pub const CATALOG_SLUG_MAX_LENGTH: usize = 50;

/// Page slug and title used when composing a template without explicit ones.
pub const DEFAULT_PAGE_SLUG: &str = "home";
pub const DEFAULT_PAGE_TITLE: &str = "Home Page";
pub const PAGE_TITLE_MAX_LENGTH: usize = 100;

pub const BUSINESS_NAME_MIN_LENGTH: usize = 2;
pub const BUSINESS_NAME_MAX_LENGTH: usize = 100;
pub const CONTACT_PHONE_MAX_LENGTH: usize = 20;
