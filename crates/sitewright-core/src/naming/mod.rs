//! Naming conventions for reusable sections and templates.

pub mod section;

pub use section::{
    SectionName, SectionNameValidation, section_slug, template_slug, validate_section_name,
};
