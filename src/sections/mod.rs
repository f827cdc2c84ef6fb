//! Built-in section renderers.
//!
//! Each submodule owns one section type: its payload shape (a serde
//! struct the catalog deserializes the TOML payload into) and the HTML
//! fragment it renders. Adding a section type means adding a submodule
//! with a `register` function and listing it in [`register_defaults`].
//!
//! Renderers emit fragments only; the page shell, `<section>` wrapper
//! and stripe classes are applied by `crate::render`.

pub mod about;
pub mod education;
pub mod experiences;
pub mod hobbies;
pub mod project_stats;
pub mod projects;
pub mod skills;

use crate::section::SectionCatalog;

/// Register every built-in section type.
pub fn register_defaults(catalog: &mut SectionCatalog) {
    about::register(catalog);
    skills::register(catalog);
    education::register(catalog);
    experiences::register(catalog);
    projects::register(catalog);
    project_stats::register(catalog);
    hobbies::register(catalog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_defaults() {
        let mut catalog = SectionCatalog::new();
        register_defaults(&mut catalog);

        assert_eq!(
            catalog.types(),
            vec![
                "about",
                "education",
                "experiences",
                "hobbies",
                "project_stats",
                "projects",
                "skills",
            ]
        );
    }
}
