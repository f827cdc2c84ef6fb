//! Section type catalog.
//!
//! Every section type the site can render is registered in a
//! [`SectionCatalog`]: a map from section-type key to the renderer that
//! turns the section's payload into an HTML fragment. The catalog is an
//! explicit value passed to the resolver, not global state, so tests can
//! build small catalogs without touching the default set.
//!
//! Renderers are registered two ways:
//!
//! - [`SectionCatalog::register`] takes a closure over the raw
//!   `toml::Value` payload, for renderers that inspect the payload
//!   dynamically.
//! - [`SectionCatalog::register_typed`] deserializes the payload into a
//!   typed struct first; this is what the built-in sections in
//!   `crate::sections` use.
//!
//! Registering a key twice replaces the previous renderer.

pub mod resolver;

use crate::{i18n::Translations, profile::Metadata};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

/// Everything a section renderer can see besides its own payload.
pub struct SectionContext<'a> {
    /// Profile-wide metadata (name, socials, pictures).
    pub meta: &'a Metadata,

    /// Loaded locale tables.
    pub i18n: &'a Translations,

    /// Language the current page is rendered in.
    pub lang: &'a str,

    /// Alternating stripe flag, assigned from the section's position
    /// among the sections that actually render (not its position in the
    /// profile file).
    pub even_section: bool,
}

impl SectionContext<'_> {
    /// Translate a key in the current page language.
    pub fn t(&self, key: &str) -> String {
        self.i18n.translate(self.lang, key)
    }
}

/// A registered section renderer.
///
/// Takes the section's payload and the shared context, returns the HTML
/// fragment for the section body.
pub type SectionRenderer =
    Box<dyn Fn(&toml::Value, &SectionContext) -> Result<String> + Send + Sync>;

/// Map from section-type key to renderer.
#[derive(Default)]
pub struct SectionCatalog {
    renderers: FxHashMap<String, SectionRenderer>,
}

impl SectionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer under a section-type key.
    ///
    /// Re-registering a key replaces the previous renderer. Returns a
    /// reference to the stored renderer so callers can render
    /// immediately after registering.
    pub fn register<F>(&mut self, key: &str, renderer: F) -> &SectionRenderer
    where
        F: Fn(&toml::Value, &SectionContext) -> Result<String> + Send + Sync + 'static,
    {
        self.renderers.insert(key.to_string(), Box::new(renderer));
        &self.renderers[key]
    }

    /// Register a renderer whose payload deserializes into `T`.
    ///
    /// The payload is deserialized on every render call; a payload that
    /// does not match `T` is a content error reported with the section
    /// key attached.
    pub fn register_typed<T, F>(&mut self, key: &str, renderer: F) -> &SectionRenderer
    where
        T: DeserializeOwned,
        F: Fn(&T, &SectionContext) -> Result<String> + Send + Sync + 'static,
    {
        let owned_key = key.to_string();
        self.register(key, move |data, ctx| {
            let typed: T = data
                .clone()
                .try_into()
                .with_context(|| format!("Invalid payload for section `{owned_key}`"))?;
            renderer(&typed, ctx)
        })
    }

    /// Look up the renderer for a section-type key.
    pub fn lookup(&self, key: &str) -> Option<&SectionRenderer> {
        self.renderers.get(key)
    }

    /// All registered section-type keys, sorted.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    fn empty_translations() -> Translations {
        let mut locales = BTreeMap::new();
        locales.insert("en".to_string(), toml::Table::new());
        Translations::from_tables(locales, "en")
    }

    fn context<'a>(meta: &'a Metadata, i18n: &'a Translations) -> SectionContext<'a> {
        SectionContext {
            meta,
            i18n,
            lang: "en",
            even_section: false,
        }
    }

    fn metadata() -> Metadata {
        toml::from_str("name = \"Alex\"").unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = SectionCatalog::new();
        catalog.register("about", |_, _| Ok("<p>about</p>".to_string()));

        assert!(catalog.lookup("about").is_some());
        assert!(catalog.lookup("missing").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut catalog = SectionCatalog::new();
        catalog.register("about", |_, _| Ok("first".to_string()));
        catalog.register("about", |_, _| Ok("second".to_string()));

        let meta = metadata();
        let i18n = empty_translations();
        let ctx = context(&meta, &i18n);
        let html = catalog.lookup("about").unwrap()(&toml::Value::Table(Default::default()), &ctx)
            .unwrap();

        assert_eq!(html, "second");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_register_typed_deserializes_payload() {
        #[derive(Deserialize)]
        struct AboutData {
            years_of_experience: u32,
        }

        let mut catalog = SectionCatalog::new();
        catalog.register_typed::<AboutData, _>("about", |data, _| {
            Ok(format!("{} years", data.years_of_experience))
        });

        let meta = metadata();
        let i18n = empty_translations();
        let ctx = context(&meta, &i18n);
        let payload: toml::Value = toml::from_str("years_of_experience = 8").unwrap();

        let html = catalog.lookup("about").unwrap()(&payload, &ctx).unwrap();
        assert_eq!(html, "8 years");
    }

    #[test]
    fn test_register_typed_rejects_bad_payload() {
        #[derive(Deserialize)]
        struct AboutData {
            #[allow(dead_code)]
            years_of_experience: u32,
        }

        let mut catalog = SectionCatalog::new();
        catalog.register_typed::<AboutData, _>("about", |_, _| Ok(String::new()));

        let meta = metadata();
        let i18n = empty_translations();
        let ctx = context(&meta, &i18n);
        let payload: toml::Value = toml::from_str("years_of_experience = \"eight\"").unwrap();

        let err = catalog.lookup("about").unwrap()(&payload, &ctx).unwrap_err();
        assert!(format!("{err}").contains("`about`"));
    }

    #[test]
    fn test_types_sorted() {
        let mut catalog = SectionCatalog::new();
        catalog.register("skills", |_, _| Ok(String::new()));
        catalog.register("about", |_, _| Ok(String::new()));
        catalog.register("projects", |_, _| Ok(String::new()));

        assert_eq!(catalog.types(), vec!["about", "projects", "skills"]);
    }

    #[test]
    fn test_context_translate() {
        let en: toml::Table = toml::from_str("[menu]\nabout = \"About me\"").unwrap();
        let mut locales = BTreeMap::new();
        locales.insert("en".to_string(), en);
        let i18n = Translations::from_tables(locales, "en");

        let meta = metadata();
        let ctx = context(&meta, &i18n);
        assert_eq!(ctx.t("menu.about"), "About me");
    }
}
