//! Sitemap generation.
//!
//! The site has one page per language: the default language at the
//! site root, every other language under `/<lang>/`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2026-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    i18n::Translations,
    log,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result, bail};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, i18n: &Translations) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_languages(config, i18n)?;
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (YYYY-MM-DD format)
    lastmod: String,
}

impl Sitemap {
    /// One URL per language page, all stamped with today's date.
    fn from_languages(config: &SiteConfig, i18n: &Translations) -> Result<Self> {
        let Some(base_url) = &config.base.url else {
            bail!("[base.url] is required for sitemap generation");
        };
        let base_url = base_url.trim_end_matches('/');
        let lastmod = chrono::Local::now().format("%Y-%m-%d").to_string();

        let urls = i18n
            .languages()
            .iter()
            .map(|lang| UrlEntry {
                loc: if *lang == config.base.language {
                    format!("{base_url}/")
                } else {
                    format!("{base_url}/{lang}/")
                },
                lastmod: lastmod.clone(),
            })
            .collect();

        Ok(Self { urls })
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = &config.build.sitemap.path;
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        fs::write(sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn i18n() -> Translations {
        let mut locales = BTreeMap::new();
        locales.insert("en".to_string(), toml::Table::new());
        locales.insert("fr".to_string(), toml::Table::new());
        Translations::from_tables(locales, "en")
    }

    fn config_with_url(url: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some(url.to_string());
        config
    }

    #[test]
    fn test_from_languages_urls() {
        let config = config_with_url("https://alexmorgan.dev/");
        let sitemap = Sitemap::from_languages(&config, &i18n()).unwrap();

        let locs: Vec<&str> = sitemap.urls.iter().map(|u| u.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec!["https://alexmorgan.dev/", "https://alexmorgan.dev/fr/"]
        );
    }

    #[test]
    fn test_from_languages_requires_url() {
        let config = SiteConfig::default();
        assert!(Sitemap::from_languages(&config, &i18n()).is_err());
    }

    #[test]
    fn test_into_xml() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/?a=1&b=2".to_string(),
                lastmod: "2026-08-23".to_string(),
            }],
        };
        let xml = sitemap.into_xml();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
        assert!(xml.contains("<lastmod>2026-08-23</lastmod>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
