//! `[build]` section configuration.
//!
//! Controls input/output paths, profile data selection, pruning,
//! minification and sitemap generation.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml.
///
/// # Example
/// ```toml
/// [build]
/// profile = "profile.toml"
/// output = "public"
/// minify = true
///
/// [build.prune]
/// enable = true
///
/// [build.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not from file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Profile data file (relative to root).
    #[serde(default = "defaults::build::profile")]
    #[educe(Default = defaults::build::profile())]
    pub profile: PathBuf,

    /// Example profile data file, used when `use_example` is set.
    #[serde(default = "defaults::build::example_profile")]
    #[educe(Default = defaults::build::example_profile())]
    pub example_profile: PathBuf,

    /// Build from the example profile instead of the real one.
    ///
    /// Lets a freshly scaffolded site build before any personal data
    /// exists, and keeps demo deployments separate from the real CV.
    #[serde(default = "defaults::r#false")]
    pub use_example: bool,

    /// Locale files directory (relative to root).
    #[serde(default = "defaults::build::locales")]
    #[educe(Default = defaults::build::locales())]
    pub locales: PathBuf,

    /// Assets directory (relative to root).
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Output directory (relative to root).
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Client-script entry module, relative to the assets directory.
    ///
    /// This is the file whose wildcard section import gets rewritten by
    /// the pruner during asset processing.
    #[serde(default = "defaults::build::scripts_entry")]
    #[educe(Default = defaults::build::scripts_entry())]
    pub scripts_entry: PathBuf,

    /// Minify the generated HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clean the output directory completely before building.
    #[serde(default = "defaults::r#false")]
    pub clean: bool,

    /// Section-script pruning settings.
    #[serde(default)]
    pub prune: PruneConfig,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.prune]` - rewrite the scripts entry so only section scripts
/// referenced by the profile data are imported.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PruneConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,
}

/// `[build.sitemap]` - sitemap.xml generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#false")]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}
