//! Closed vocabularies used across tenants, sections and templates.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Declares a fieldless enum backed by a fixed wire string per variant, with
/// `as_str`, `ALL`, `Display` and `FromStr`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(CoreError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Kind of reusable page section.
    SectionCategory, "section category" {
        Nav => "nav",
        Hero => "hero",
        Feature => "feature",
        Gallery => "gallery",
        Testimonial => "testimonial",
        /// Call to action
        Cta => "cta",
        Footer => "footer",
    }
}

impl SectionCategory {
    /// Human readable label shown in catalog listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nav => "Navigation",
            Self::Hero => "Hero",
            Self::Feature => "Feature",
            Self::Gallery => "Gallery",
            Self::Testimonial => "Testimonial",
            Self::Cta => "Call to Action",
            Self::Footer => "Footer",
        }
    }
}

string_enum! {
    /// Business vertical a section kit is designed for.
    Vertical, "vertical" {
        Restaurant => "rest",
        Services => "svc",
        Shop => "shop",
    }
}

string_enum! {
    #[derive(Default)]
    IndustryCategory, "industry category" {
        Restaurant => "restaurant",
        Retail => "retail",
        Services => "services",
        Healthcare => "healthcare",
        #[default]
        Other => "other",
    }
}

string_enum! {
    #[derive(Default)]
    WebsiteType, "website type" {
        #[default]
        OnePage => "one_page",
        MultiPage => "multi_page",
        Ecommerce => "ecommerce",
    }
}

string_enum! {
    /// Review state of a catalog section.
    #[derive(Default)]
    SectionStatus, "section status" {
        #[default]
        Draft => "draft",
        Approved => "approved",
        Deprecated => "deprecated",
    }
}

string_enum! {
    /// Visual traits a section declares it works with.
    CompatibilityFlag, "compatibility flag" {
        Dark => "dark",
        Light => "light",
        Minimal => "minimal",
        Bold => "bold",
        PhotoHeavy => "photo-heavy",
        RtlReady => "rtl-ready",
    }
}

/// Joins the wire names of every variant, e.g. `rest, svc, shop`.
#[must_use]
pub fn joined_names<T: Copy + std::fmt::Display>(all: &[T]) -> String {
    all.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
