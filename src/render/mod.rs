//! Full-page HTML rendering.
//!
//! One page per language. The page shell carries the brand palette as
//! CSS custom properties (`--brand-0` .. `--brand-9` plus `--accent`),
//! the navigation menu mirroring the resolved section order, and one
//! `<section>` wrapper per resolved section with its stripe class.

use crate::{
    config::SiteConfig,
    i18n::Translations,
    profile::ProfileData,
    section::{
        SectionContext,
        resolver::{MenuItem, ResolvedSection, menu_key_for},
    },
    utils::{
        color::{self, Rgb},
        html::{escape_attr, escape_html},
    },
};
use anyhow::{Context, Result};
use std::fmt::Write;

/// Brand palette shade count, shade 6 is the configured primary.
const PALETTE_SIZE: usize = 10;

/// The effective brand colors: profile overrides beat `[theme]`.
fn brand_colors(profile: &ProfileData, config: &SiteConfig) -> Result<(Rgb, Rgb)> {
    let primary_hex = profile
        .theme
        .as_ref()
        .and_then(|t| t.primary_color.as_deref())
        .unwrap_or(&config.theme.primary_color);
    let primary = color::parse_hex(primary_hex)
        .with_context(|| format!("Invalid primary color `{primary_hex}`"))?;

    let accent_hex = profile
        .theme
        .as_ref()
        .and_then(|t| t.accent_color.as_deref())
        .or(config.theme.accent_color.as_deref());
    let accent = match accent_hex {
        Some(hex) => {
            color::parse_hex(hex).with_context(|| format!("Invalid accent color `{hex}`"))?
        }
        None => color::derive_accent(primary),
    };

    Ok((primary, accent))
}

/// The `:root` style block with the generated palette.
fn palette_style(primary: Rgb, accent: Rgb) -> String {
    let mut css = String::from("<style>:root{");
    for (index, shade) in color::generate_variants(primary, PALETTE_SIZE)
        .iter()
        .enumerate()
    {
        let _ = write!(css, "--brand-{index}:{shade};");
    }
    let _ = write!(css, "--accent:{};", color::rgb_to_hex(accent));
    // Text color for elements painted with the brand color
    let contrast = if color::is_dark(primary) {
        "#ffffff"
    } else {
        "#1a1a1a"
    };
    let _ = write!(css, "--brand-contrast:{contrast};");
    css.push_str("}</style>");
    css
}

fn render_nav(menu: &[MenuItem], i18n: &Translations, lang: &str, config: &SiteConfig) -> String {
    let mut html = String::from(r#"<nav class="nav"><ul>"#);
    for item in menu {
        let _ = write!(
            html,
            r##"<li><a href="#{}">{}</a></li>"##,
            escape_attr(&item.key),
            escape_html(&item.label)
        );
    }
    html.push_str("</ul>");

    // Language switcher: the default language lives at the site root,
    // every other language under its own directory.
    let languages = i18n.languages();
    if languages.len() > 1 {
        html.push_str(r#"<ul class="nav__languages">"#);
        for language in languages {
            let href = if language == config.base.language {
                "/".to_string()
            } else {
                format!("/{language}/")
            };
            let _ = write!(
                html,
                r#"<li><a href="{href}"{}>{}</a></li>"#,
                if language == lang {
                    r#" class="nav__lang--active""#
                } else {
                    ""
                },
                escape_html(language)
            );
        }
        html.push_str("</ul>");
    }

    html.push_str("</nav>");
    html
}

fn render_footer(config: &SiteConfig, i18n: &Translations, lang: &str) -> String {
    let copyright = if config.base.copyright.is_empty() {
        &config.base.author
    } else {
        &config.base.copyright
    };
    format!(
        r#"<footer class="footer"><p>{}</p><p>&copy; {}</p></footer>"#,
        escape_html(&i18n.translate(lang, "global.thanks")),
        escape_html(copyright)
    )
}

/// Render the complete page for one language.
pub fn render_page(
    profile: &ProfileData,
    resolved: &[ResolvedSection],
    menu: &[MenuItem],
    config: &SiteConfig,
    i18n: &Translations,
    lang: &str,
) -> Result<String> {
    let (primary, accent) = brand_colors(profile, config)?;

    let mut html = String::with_capacity(16 * 1024);
    write!(
        html,
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="{lang}"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<meta name="description" content="{description}">"#,
            r#"<link rel="stylesheet" href="/styles/main.css">"#,
            "{palette}",
            r#"<script type="module" src="/{script}"></script>"#,
            "</head><body>"
        ),
        lang = escape_attr(lang),
        title = escape_html(&config.base.title),
        description = escape_attr(&config.base.description),
        palette = palette_style(primary, accent),
        script = config.build.scripts_entry.display(),
    )?;

    html.push_str(r#"<header class="header">"#);
    html.push_str(&render_nav(menu, i18n, lang, config));
    html.push_str("</header><main>");

    for section in resolved {
        let ctx = SectionContext {
            meta: &profile.meta,
            i18n,
            lang,
            even_section: section.even_section,
        };
        let body = (section.renderer)(section.data, &ctx)?;
        let stripe = if section.even_section {
            "section--even"
        } else {
            "section--odd"
        };
        write!(
            html,
            r#"<section id="{id}" class="section {stripe}"><h2 class="section__title">{title}</h2>{body}</section>"#,
            id = escape_attr(section.section),
            title = escape_html(&i18n.translate(lang, &menu_key_for(section.section))),
        )?;
    }

    html.push_str("</main>");
    html.push_str(&render_footer(config, i18n, lang));
    html.push_str("</body></html>");

    Ok(html)
}
