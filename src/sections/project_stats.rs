//! The `project_stats` section: a grid of headline numbers.
//!
//! Stat labels are translation keys under
//! `sections.project_stats.labels`; values may be numbers or free-form
//! strings like `"99.9"`.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectStatsData {
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    #[serde(default)]
    pub icon: Option<String>,

    pub value: StatValue,

    #[serde(default)]
    pub unit: Option<String>,

    /// Label key under `sections.project_stats.labels`.
    pub label: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<ProjectStatsData, _>("project_stats", render);
}

fn render(data: &ProjectStatsData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::from(r#"<div class="stats__grid">"#);

    for stat in &data.stats {
        write!(
            html,
            r#"<div class="stat-card"{}><span class="stat-card__value">{}{}</span><span class="stat-card__label">{}</span></div>"#,
            stat.icon
                .as_deref()
                .map(|icon| format!(r#" data-icon="{}""#, escape_attr(icon)))
                .unwrap_or_default(),
            escape_html(&stat.value.to_string()),
            stat.unit
                .as_deref()
                .map(|unit| format!("<small>{}</small>", escape_html(unit)))
                .unwrap_or_default(),
            escape_html(&ctx.t(&format!("sections.project_stats.labels.{}", stat.label)))
        )?;
    }

    html.push_str("</div>");
    Ok(html)
}
