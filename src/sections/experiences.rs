//! The `experiences` section: work history timeline with per-position
//! contexts, technology groups and computed durations.
//!
//! Dates are `YYYY-MM-DD` strings. A position without `end_date` and
//! with `is_current = true` runs until today; duration labels use the
//! `global.units` translations.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperiencesData {
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub id: String,
    pub start_date: String,

    #[serde(default)]
    pub end_date: Option<String>,

    pub company_name: String,

    #[serde(default)]
    pub company_logo: Option<String>,

    /// Context ids, translated under
    /// `sections.experiences.<id>.contexts.<n>`.
    #[serde(default)]
    pub contexts: Vec<u32>,

    /// One technology group per context.
    #[serde(default)]
    pub technologies: Vec<Vec<String>>,

    #[serde(default)]
    pub is_current: bool,
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<ExperiencesData, _>("experiences", render);
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date `{raw}`, expected YYYY-MM-DD"))
}

/// Whole calendar months between two dates, at least one.
fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    use chrono::Datelike;
    let months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    months.max(1) as u32
}

/// Human duration, e.g. `2 years 3 months` or `7 months`.
fn format_duration(months: u32, ctx: &SectionContext) -> String {
    let years = months / 12;
    let rest = months % 12;
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{years} {}", ctx.t("global.units.years")));
    }
    if rest > 0 || years == 0 {
        parts.push(format!("{rest} {}", ctx.t("global.units.months")));
    }
    parts.join(" ")
}

fn render(data: &ExperiencesData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::from(r#"<ol class="experiences__timeline">"#);

    for exp in &data.experiences {
        let start = parse_date(&exp.start_date)?;
        let end = match &exp.end_date {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        let duration = format_duration(months_between(start, end), ctx);

        write!(
            html,
            r#"<li class="experience{}"><header>"#,
            if exp.is_current {
                " experience--current"
            } else {
                ""
            }
        )?;
        if let Some(logo) = &exp.company_logo {
            write!(
                html,
                r#"<img class="experience__logo" src="{}" alt="{}">"#,
                escape_attr(logo),
                escape_attr(&exp.company_name)
            )?;
        }
        write!(
            html,
            r#"<h3>{}</h3><p class="experience__title">{}</p><p class="experience__dates">{} — {} · {}</p></header>"#,
            escape_html(&exp.company_name),
            escape_html(&ctx.t(&format!("sections.experiences.{}.title", exp.id))),
            escape_html(&exp.start_date),
            exp.end_date
                .as_deref()
                .map(escape_html)
                .map(|s| s.into_owned())
                .unwrap_or_else(|| ctx.t("global.units.present")),
            duration
        )?;

        for (index, context_id) in exp.contexts.iter().enumerate() {
            write!(
                html,
                r#"<div class="experience__context"><p>{}</p>"#,
                escape_html(&ctx.t(&format!(
                    "sections.experiences.{}.contexts.{context_id}",
                    exp.id
                )))
            )?;
            if let Some(group) = exp.technologies.get(index) {
                html.push_str(r#"<ul class="experience__technologies">"#);
                for tech in group {
                    write!(html, "<li>{}</li>", escape_html(tech))?;
                }
                html.push_str("</ul>");
            }
            html.push_str("</div>");
        }
        html.push_str("</li>");
    }

    html.push_str("</ol>");
    Ok(html)
}
