//! Locale loading and translation lookup.
//!
//! Locales live as TOML files in the locales directory, one per
//! language (`en.toml`, `fr.toml`, ...). Files with `.example.` in the
//! name are skipped. Keys are dot paths into nested tables:
//!
//! ```toml
//! [menu]
//! about = "About me"
//!
//! [sections.education.studies]
//! title = "Studies"
//! ```
//!
//! `translate("en", "menu.about")` walks the table. A missing key falls
//! back to the default language, then to the key itself, so a hole in a
//! locale file never breaks the build.

use anyhow::{Context, Result, bail};
use std::{collections::BTreeMap, fs, path::Path};

/// All loaded locales plus the fallback language.
#[derive(Debug, Clone)]
pub struct Translations {
    locales: BTreeMap<String, toml::Table>,
    default_lang: String,
}

impl Translations {
    /// Load every `<lang>.toml` file from a directory.
    ///
    /// The default language must be among the loaded locales; at least
    /// one locale file must exist.
    pub fn load(dir: &Path, default_lang: &str) -> Result<Self> {
        let mut locales = BTreeMap::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read locales directory {}", dir.display()))?
        {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".toml") || name.contains(".example.") {
                continue;
            }

            let lang = name.trim_end_matches(".toml").to_string();
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read locale file {}", path.display()))?;
            let table: toml::Table = toml::from_str(&content)
                .with_context(|| format!("Failed to parse locale file {}", path.display()))?;

            locales.insert(lang, table);
        }

        if locales.is_empty() {
            bail!("No locale files found in {}", dir.display());
        }
        if !locales.contains_key(default_lang) {
            bail!("Default language `{default_lang}` has no locale file");
        }

        Ok(Self {
            locales,
            default_lang: default_lang.to_string(),
        })
    }

    /// Build translations from already-parsed tables.
    pub fn from_tables(locales: BTreeMap<String, toml::Table>, default_lang: &str) -> Self {
        Self {
            locales,
            default_lang: default_lang.to_string(),
        }
    }

    /// All available language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// The configured fallback language.
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Look up a dot-path key in the given language.
    ///
    /// Falls back to the default language, then to the key itself.
    /// Never fails: a missing translation is a content gap, not an error.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(&self.default_lang, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        let table = self.locales.get(lang)?;

        let mut segments = key.split('.');
        let mut value = table.get(segments.next()?)?;

        for segment in segments {
            value = value.as_table()?.get(segment)?;
        }

        value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translations {
        let en: toml::Table = toml::from_str(
            r#"
            [menu]
            about = "About me"
            skills = "Skills"

            [sections.education.studies]
            title = "Studies"
        "#,
        )
        .unwrap();
        let fr: toml::Table = toml::from_str(
            r#"
            [menu]
            about = "À propos"
        "#,
        )
        .unwrap();

        let mut locales = BTreeMap::new();
        locales.insert("en".to_string(), en);
        locales.insert("fr".to_string(), fr);
        Translations::from_tables(locales, "en")
    }

    #[test]
    fn test_translate_simple() {
        let t = sample();
        assert_eq!(t.translate("en", "menu.about"), "About me");
        assert_eq!(t.translate("fr", "menu.about"), "À propos");
    }

    #[test]
    fn test_translate_nested_path() {
        let t = sample();
        assert_eq!(
            t.translate("en", "sections.education.studies.title"),
            "Studies"
        );
    }

    #[test]
    fn test_translate_falls_back_to_default_lang() {
        let t = sample();
        // fr has no menu.skills, en does
        assert_eq!(t.translate("fr", "menu.skills"), "Skills");
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let t = sample();
        assert_eq!(t.translate("en", "menu.missing"), "menu.missing");
        assert_eq!(t.translate("de", "menu.missing"), "menu.missing");
    }

    #[test]
    fn test_languages_sorted() {
        let t = sample();
        assert_eq!(t.languages(), vec!["en", "fr"]);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.toml"), "[menu]\nabout = \"About\"").unwrap();
        fs::write(dir.path().join("fr.toml"), "[menu]\nabout = \"À propos\"").unwrap();
        fs::write(dir.path().join("en.example.toml"), "[menu]\nabout = \"X\"").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let t = Translations::load(dir.path(), "en").unwrap();
        assert_eq!(t.languages(), vec!["en", "fr"]);
        assert_eq!(t.translate("en", "menu.about"), "About");
    }

    #[test]
    fn test_load_empty_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Translations::load(dir.path(), "en").is_err());
    }

    #[test]
    fn test_load_missing_default_lang_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fr.toml"), "[menu]\nabout = \"À propos\"").unwrap();
        assert!(Translations::load(dir.path(), "en").is_err());
    }
}
