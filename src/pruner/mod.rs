//! Build-time section pruning for the client entry script.
//!
//! The scaffolded `scripts/main.js` loads every section's enhancement
//! script through a wildcard import:
//!
//! ```js
//! import.meta.glob('./sections/*/*.js', { eager: true });
//! ```
//!
//! At build time the profile data source is scanned lexically for
//! section keys and the wildcard line is rewritten into one explicit
//! import per used section:
//!
//! ```js
//! import './sections/About/About.js';
//! import './sections/Skills/Skills.js';
//! ```
//!
//! The scan is text-based on purpose: it works on the raw profile
//! source without requiring it to parse, and tolerates both the TOML
//! form (`section = "about"`) and the JS object form
//! (`sectionName: "about"`) so hand-migrated data files still prune.
//!
//! Failure handling is asymmetric. A missing or unreadable profile
//! degrades to the empty section set (the entry script keeps working,
//! it just loads nothing); a missing wildcard line leaves the script
//! untouched.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use regex::Regex;
use std::{collections::BTreeSet, fs, sync::OnceLock};

const IMPORT_GLOB_PATTERN: &str =
    r#"import\.meta\.glob\(['"]\./sections/\*/\*\.js['"],\s*\{\s*eager:\s*true\s*\}\);"#;

const SECTION_KEY_PATTERN: &str = r#"section(?:Name)?\s*[:=]\s*["']([^"']+)["']"#;

fn section_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SECTION_KEY_PATTERN).unwrap())
}

fn import_glob_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IMPORT_GLOB_PATTERN).unwrap())
}

/// Lexically scan profile source text for section keys.
///
/// Returns a sorted, deduplicated set. Every match counts, including
/// ones inside TOML comments; pruning may only over-approximate, never
/// drop a section the profile uses.
pub fn scan_used_section_types(profile_source: &str) -> BTreeSet<String> {
    section_key_regex()
        .captures_iter(profile_source)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Rewrite the wildcard import into explicit per-section imports.
///
/// No wildcard line means nothing to do; the script comes back
/// unchanged. An empty section set replaces the line with a comment so
/// the rewrite stays visible in the output.
pub fn rewrite_wildcard_import(script: &str, used: &BTreeSet<String>) -> String {
    let replacement = if used.is_empty() {
        "// No sections detected in profile data".to_string()
    } else {
        used.iter()
            .map(|section| {
                let name = capitalize_first(section);
                format!("import './sections/{name}/{name}.js';")
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    import_glob_regex()
        .replace(script, replacement.as_str())
        .into_owned()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Scan the configured profile for used sections, degrading to the
/// empty set when the file is missing or unreadable.
pub fn used_sections(config: &SiteConfig) -> BTreeSet<String> {
    let profile = config.chosen_profile();
    match fs::read_to_string(profile) {
        Ok(source) => {
            let used = scan_used_section_types(&source);
            log!(
                "prune";
                "Used sections detected in profile data: {}",
                used.iter().cloned().collect::<Vec<_>>().join(", ")
            );
            used
        }
        Err(err) => {
            log!(
                "prune";
                "Cannot read profile data ({}): {err}, pruning all sections",
                profile.display()
            );
            BTreeSet::new()
        }
    }
}

/// Prune a script's wildcard import in place during the build.
///
/// Applied to the scripts entry file as it is copied into the output
/// directory; disabled via `[build.prune] enable = false`.
pub fn prune_script(script: &str, config: &SiteConfig) -> String {
    if !config.build.prune.enable {
        return script.to_string();
    }
    rewrite_wildcard_import(script, &used_sections(config))
}

/// The `prune` command: rewrite the scripts entry on disk (`--write`)
/// or print the result to stdout.
pub fn run_prune(config: &SiteConfig, write: bool) -> Result<()> {
    let entry = config.build.assets.join(&config.build.scripts_entry);
    let script = fs::read_to_string(&entry)
        .with_context(|| format!("Failed to read scripts entry {}", entry.display()))?;

    let pruned = rewrite_wildcard_import(&script, &used_sections(config));

    if write {
        fs::write(&entry, &pruned)
            .with_context(|| format!("Failed to write scripts entry {}", entry.display()))?;
        log!("prune"; "Rewrote {}", entry.display());
    } else {
        println!("{pruned}");
    }

    Ok(())
}
