pub mod catalog;

pub use catalog::{NewSection, Section, SectionCatalog, parse_compatibility_flags};
