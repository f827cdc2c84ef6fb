//! Site initialization module.
//!
//! Creates a new site skeleton: default configuration, example profile
//! data, locale files and the client asset tree (including the scripts
//! entry with its wildcard section import, which the build prunes).

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &[
    "locales",
    "assets/images",
    "assets/pdf",
    "assets/scripts/sections",
    "assets/styles",
];

/// Section types scaffolded with a client enhancement script
const DEFAULT_SECTIONS: &[&str] = &[
    "About",
    "Skills",
    "Education",
    "Experiences",
    "Projects",
    "Project_stats",
    "Hobbies",
];

// Embedded scaffold files
const PROFILE_TEMPLATE: &str = include_str!("embed/site/profile.toml");
const LOCALE_EN: &str = include_str!("embed/site/en.toml");
const LOCALE_FR: &str = include_str!("embed/site/fr.toml");
const SCRIPTS_ENTRY: &str = include_str!("embed/site/main.js");
const STYLES: &str = include_str!("embed/site/main.css");

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_content(root)?;
    init_assets(root)?;
    init_ignored_files(root, &["public"])?;

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `folio init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write the example profile data and locale files.
///
/// The same example content lands in both `profile.toml` and
/// `profile.example.toml`; the former is yours to edit, the latter
/// backs `--example` builds.
fn init_content(root: &Path) -> Result<()> {
    fs::write(root.join("profile.toml"), PROFILE_TEMPLATE)?;
    fs::write(root.join("profile.example.toml"), PROFILE_TEMPLATE)?;
    fs::write(root.join("locales/en.toml"), LOCALE_EN)?;
    fs::write(root.join("locales/fr.toml"), LOCALE_FR)?;
    Ok(())
}

/// Write the client asset tree: styles, scripts entry and one
/// enhancement script per scaffolded section type.
fn init_assets(root: &Path) -> Result<()> {
    fs::write(root.join("assets/styles/main.css"), STYLES)?;
    fs::write(root.join("assets/scripts/main.js"), SCRIPTS_ENTRY)?;

    for section in DEFAULT_SECTIONS {
        let dir = root.join("assets/scripts/sections").join(section);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{section}.js")), section_script(section))?;
    }

    Ok(())
}

/// Minimal enhancement script for one section type.
fn section_script(section: &str) -> String {
    let id = section.to_lowercase();
    format!(
        "const section = document.getElementById('{id}');\n\
         if (section) {{\n  section.classList.add('section--enhanced');\n}}\n"
    )
}

/// Initialize .gitignore and .ignore files with specified patterns
fn init_ignored_files(root: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
