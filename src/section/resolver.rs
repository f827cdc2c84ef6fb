//! Section resolution: profile order against the catalog.
//!
//! The resolver walks the profile's section list in content order and
//! keeps only the entries whose type has a registered renderer. Unknown
//! types are skipped, never fatal: content written against a catalog
//! that no longer registers a type still builds, minus that section.
//!
//! Stripe flags are assigned after filtering, so the alternation is
//! over the sections that actually render. The first visible section is
//! always un-striped regardless of what was skipped before it.

use super::{SectionCatalog, SectionRenderer};
use crate::{i18n::Translations, profile::ProfileData};

/// A profile section paired with its renderer and stripe flag.
pub struct ResolvedSection<'a> {
    /// Section-type key.
    pub section: &'a str,

    /// The section's payload, untouched.
    pub data: &'a toml::Value,

    /// Renderer registered for this type.
    pub renderer: &'a SectionRenderer,

    /// True for every second *surviving* section.
    pub even_section: bool,
}

/// One navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Anchor target, equal to the section-type key.
    pub key: String,

    /// Translated label.
    pub label: String,
}

/// The translation key for a section's menu label.
pub fn menu_key_for(section_type: &str) -> String {
    format!("menu.{section_type}")
}

/// Resolve the profile's sections against a catalog.
///
/// Returns the renderable sections in content order, with stripe flags
/// assigned over the surviving list. Also returns the keys that were
/// skipped, for the caller to log.
pub fn resolve_sections<'a>(
    profile: &'a ProfileData,
    catalog: &'a SectionCatalog,
) -> (Vec<ResolvedSection<'a>>, Vec<&'a str>) {
    let mut resolved = Vec::with_capacity(profile.sections.len());
    let mut skipped = Vec::new();

    for entry in &profile.sections {
        match catalog.lookup(&entry.section) {
            Some(renderer) => resolved.push(ResolvedSection {
                section: &entry.section,
                data: &entry.data,
                renderer,
                even_section: resolved.len() % 2 == 1,
            }),
            None => skipped.push(entry.section.as_str()),
        }
    }

    (resolved, skipped)
}

/// Build the navigation menu mirroring the resolved section order.
pub fn build_menu(resolved: &[ResolvedSection], i18n: &Translations, lang: &str) -> Vec<MenuItem> {
    resolved
        .iter()
        .map(|section| MenuItem {
            key: section.section.to_string(),
            label: i18n.translate(lang, &menu_key_for(section.section)),
        })
        .collect()
}
