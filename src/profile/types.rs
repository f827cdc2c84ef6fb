//! Profile data structures.
//!
//! `ProfileData` is the content store of the whole site: profile-wide
//! metadata plus an ordered list of sections. The order of `sections`
//! is authoritative for display order. Each entry carries an opaque
//! payload whose shape is owned by whichever renderer is registered
//! under the entry's key (see `crate::section`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root profile data structure (profile.toml).
///
/// # Example
/// ```toml
/// [meta]
/// name = "Alex Morgan"
/// profile_pictures = ["assets/images/profile.jpg"]
///
/// [[meta.socials]]
/// platform = "github"
/// url = "https://github.com/alexmorgan-dev"
///
/// [[sections]]
/// section = "about"
/// [sections.data]
/// years_of_experience = 8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileData {
    /// Profile-wide metadata shared with every section renderer.
    pub meta: Metadata,

    /// Optional brand color override for this profile.
    #[serde(default)]
    pub theme: Option<ThemeOverride>,

    /// Ordered content sections; order is display order.
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

/// Per-profile brand colors, overriding `[theme]` in folio.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverride {
    #[serde(default)]
    pub primary_color: Option<String>,

    #[serde(default)]
    pub accent_color: Option<String>,
}

/// Profile-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// Display name, used as the page heading.
    pub name: String,

    /// Profile picture paths; the first one is the default.
    #[serde(default)]
    pub profile_pictures: Vec<String>,

    /// PDF résumé per language code.
    #[serde(default)]
    pub pdf_resume: BTreeMap<String, String>,

    /// Social platform links, in display order.
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// A link to a social platform profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Behance,
    Medium,
    Stackoverflow,
    Website,
}

impl SocialPlatform {
    /// Stable lowercase identifier, used for CSS classes and labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Dribbble => "dribbble",
            Self::Behance => "behance",
            Self::Medium => "medium",
            Self::Stackoverflow => "stackoverflow",
            Self::Website => "website",
        }
    }
}

/// One named content section with an opaque payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    /// Section-type key, matched against the catalog at render time.
    pub section: String,

    /// Section payload; its shape belongs to the registered renderer.
    #[serde(default = "empty_table")]
    pub data: toml::Value,
}

fn empty_table() -> toml::Value {
    toml::Value::Table(toml::map::Map::new())
}
