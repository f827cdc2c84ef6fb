//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[base]`   | Site metadata (title, author, url, language)   |
//! | `[build]`  | Paths, profile selection, pruning, sitemap     |
//! | `[serve]`  | Development server (port, interface)           |
//! | `[theme]`  | Brand colors for the generated palette         |
//! | `[extra]`  | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Alex Morgan - CV"
//! description = "Full-stack engineer portfolio"
//! url = "https://alexmorgan.dev"
//! language = "en"
//!
//! [build]
//! profile = "profile.toml"
//! output = "public"
//! minify = true
//!
//! [theme]
//! primary_color = "#2b689c"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod serve;
mod theme;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use serve::ServeConfig;
use theme::ThemeConfig;

use crate::{
    cli::{Cli, Commands},
    utils::color,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Brand color settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// The profile data file selected for this build.
    ///
    /// `use_example` switches between the real profile and the example
    /// one; both paths are normalized to absolute during config loading.
    pub fn chosen_profile(&self) -> &Path {
        if self.build.use_example {
            &self.build.example_profile
        } else {
            &self.build.profile
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Some(build_args) = cli.build_args() {
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.build.use_example, build_args.example.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, build_args.sitemap.as_ref());
            if build_args.clean {
                self.build.clean = true;
            }
        }

        match &cli.command {
            Commands::Serve {
                interface, port, ..
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                self.base.url = Some(format!(
                    "http://{}:{}",
                    self.serve.interface, self.serve.port
                ));
            }
            Commands::Prune { example, .. } => {
                Self::update_option(&mut self.build.use_example, example.as_ref());
            }
            _ => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all input/output paths
        self.build.profile = Self::normalize_path(&root.join(&self.build.profile));
        self.build.example_profile = Self::normalize_path(&root.join(&self.build.example_profile));
        self.build.locales = Self::normalize_path(&root.join(&self.build.locales));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));

        // Sitemap is written inside the output directory.
        // scripts_entry stays relative: it identifies a file within assets.
        self.build.sitemap.path = self.build.output.join(&self.build.sitemap.path);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let cli = self.get_cli();

        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if self.build.sitemap.enable && self.base.url.is_none() {
            bail!("[base.url] is required for sitemap generation");
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if color::parse_hex(&self.theme.primary_color).is_err() {
            bail!(ConfigError::Validation(
                "[theme.primary_color] is not a valid hex color".into()
            ));
        }

        if let Some(accent) = &self.theme.accent_color
            && color::parse_hex(accent).is_err()
        {
            bail!(ConfigError::Validation(
                "[theme.accent_color] is not a valid hex color".into()
            ));
        }

        match &cli.command {
            // The prune command degrades gracefully on a missing profile;
            // a full build cannot.
            Commands::Build { .. } | Commands::Serve { .. } => {
                let profile = self.chosen_profile();
                if !profile.exists() {
                    bail!(ConfigError::Validation(format!(
                        "profile data file not found: {}",
                        profile.display()
                    )));
                }
                if !self.build.locales.exists() {
                    bail!(ConfigError::Validation(format!(
                        "locales directory not found: {}",
                        self.build.locales.display()
                    )));
                }
            }
            _ => {}
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "My CV"
            description = "A test CV"
            author = "Test Author"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "My CV");
        assert_eq!(config.base.author, "Test Author");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "My CV"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_chosen_profile() {
        let mut config = SiteConfig::default();
        assert_eq!(config.chosen_profile(), Path::new("profile.toml"));

        config.build.use_example = true;
        assert_eq!(config.chosen_profile(), Path::new("profile.example.toml"));
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test CV"

            [extra]
            custom_field = "custom_value"
            number_field = 42
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.base.title, "");
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.serve.port, 5277);
        assert_eq!(config.theme.primary_color, "#2b689c");
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r##"
            [base]
            title = "Alex Morgan - CV"
            description = "Portfolio"
            author = "Alex Morgan"
            email = "alex@example.com"
            url = "https://alexmorgan.dev"
            language = "en"
            copyright = "2026 Alex Morgan"

            [build]
            profile = "data/profile.toml"
            output = "dist"
            minify = true
            clean = false

            [build.sitemap]
            enable = true
            path = "sitemap.xml"

            [serve]
            interface = "127.0.0.1"
            port = 3000

            [theme]
            primary_color = "#2b689c"

            [extra]
            analytics_id = "UA-12345"
        "##;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Alex Morgan - CV");
        assert_eq!(config.build.profile, PathBuf::from("data/profile.toml"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.serve.port, 3000);
        assert!(config.extra.contains_key("analytics_id"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [deploy]
            provider = "github"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
