//! Site building orchestration.
//!
//! Coordinates page rendering and asset processing.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load profile data + locales + section catalog
//!     │
//!     ├── rayon::join(
//!     │       render_pages()   ──► one index.html per language,
//!     │       process_assets() ──► copy assets, pruning scripts entry
//!     │   )
//!     │
//!     └── build_sitemap()
//! ```
//!
//! The default language page lands at `output/index.html`, every other
//! language at `output/<lang>/index.html`. Assets keep their layout
//! relative to the assets directory; the scripts entry file is run
//! through the pruner instead of being copied verbatim.

use crate::{
    config::SiteConfig,
    generator::sitemap::build_sitemap,
    i18n::Translations,
    log,
    profile::{self, ProfileData},
    pruner,
    render::render_page,
    section::{SectionCatalog, resolver},
    sections,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};
use walkdir::WalkDir;

/// Build the entire site, rendering pages and assets in parallel.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    prepare_output(output, config.build.clean)?;

    let profile_path = config.chosen_profile();
    let profile = profile::load(profile_path)
        .with_context(|| format!("Failed to load profile data {}", profile_path.display()))?;
    let i18n = Translations::load(&config.build.locales, &config.base.language)?;

    let mut catalog = SectionCatalog::new();
    sections::register_defaults(&mut catalog);

    let asset_files = collect_asset_files(&config.build.assets);
    let has_error = AtomicBool::new(false);

    let (pages_result, assets_result) = rayon::join(
        || match render_pages(&profile, &catalog, &i18n, config) {
            Ok(count) => Ok(count),
            Err(e) => {
                if !has_error.swap(true, Ordering::Relaxed) {
                    log!("error"; "render failed: {:#}", e);
                }
                Err(anyhow!("Build failed"))
            }
        },
        || {
            asset_files.par_iter().try_for_each(|path| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                if let Err(e) = process_asset(path, config) {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{}: {:#}", path.display(), e);
                    }
                    return Err(anyhow!("Build failed"));
                }
                Ok(())
            })
        },
    );

    let page_count = pages_result?;
    assets_result?;

    build_sitemap(config, &i18n)?;
    log_build_result(output, page_count, asset_files.len());

    Ok(())
}

/// Ensure the output directory exists, clearing it first when asked.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    Ok(())
}

/// Render one page per language into the output directory.
fn render_pages(
    profile: &ProfileData,
    catalog: &SectionCatalog,
    i18n: &Translations,
    config: &SiteConfig,
) -> Result<usize> {
    let (resolved, skipped) = resolver::resolve_sections(profile, catalog);
    for section in &skipped {
        log!("warn"; "section `{section}` has no registered renderer, skipping");
    }

    let languages = i18n.languages();
    for &lang in &languages {
        let menu = resolver::build_menu(&resolved, i18n, lang);
        let html = render_page(profile, &resolved, &menu, config, i18n, lang)?;
        let html = minify(MinifyType::Html(html.as_bytes()), config);

        let page_dir = if lang == config.base.language {
            config.build.output.clone()
        } else {
            config.build.output.join(lang)
        };
        fs::create_dir_all(&page_dir)?;

        let page_path = page_dir.join("index.html");
        fs::write(&page_path, &*html)
            .with_context(|| format!("Failed to write page {}", page_path.display()))?;
        log!("build"; "{lang} ({} sections)", resolved.len());
    }

    Ok(languages.len())
}

/// All files under the assets directory.
fn collect_asset_files(assets: &Path) -> Vec<PathBuf> {
    WalkDir::new(assets)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Copy one asset into the output, pruning the scripts entry in flight.
fn process_asset(path: &Path, config: &SiteConfig) -> Result<()> {
    let rel = path
        .strip_prefix(&config.build.assets)
        .with_context(|| format!("Asset outside assets directory: {}", path.display()))?;
    let dest = config.build.output.join(rel);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if rel == config.build.scripts_entry {
        let script = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scripts entry {}", path.display()))?;
        fs::write(&dest, pruner::prune_script(&script, config))
            .with_context(|| format!("Failed to write {}", dest.display()))?;
    } else {
        fs::copy(path, &dest)
            .with_context(|| format!("Failed to copy asset to {}", dest.display()))?;
    }

    Ok(())
}

/// Log build result
fn log_build_result(output: &Path, page_count: usize, asset_count: usize) {
    if page_count == 0 {
        log!("warn"; "no pages were rendered, check the locales directory");
    } else {
        log!(
            "build";
            "done: {page_count} pages, {asset_count} assets -> {}",
            output.display()
        );
    }
}
