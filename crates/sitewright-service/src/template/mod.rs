pub mod compose;
pub mod library;

pub use compose::{NewPage, Page, compose_page, seed_starter_kit};
pub use library::{NewTemplate, Template, TemplateLibrary, TemplateSection};
