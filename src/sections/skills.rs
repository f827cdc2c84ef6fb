//! The `skills` section: functional skill cards, technology badge
//! categories and key competencies.
//!
//! Card titles, descriptions and chip labels live in the locale files
//! under `sections.skills.functional.qualities.<id>`; the payload only
//! carries the ids and badge urls.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillsData {
    /// Functional skill cards.
    #[serde(default)]
    pub main_skills: Vec<SkillCard>,

    /// Technology badge categories.
    #[serde(default)]
    pub categories: Vec<TechCategory>,

    /// Key competency ids, translated under
    /// `sections.skills.functional.key_competencies.competencies`.
    #[serde(default)]
    pub competencies: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCard {
    pub id: String,

    /// Icon name, passed through for the client scripts and CSS.
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechCategory {
    pub id: String,

    /// Badge image urls.
    pub items: Vec<String>,
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<SkillsData, _>("skills", render);
}

fn render(data: &SkillsData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::new();

    html.push_str(r#"<div class="skills__cards">"#);
    for card in &data.main_skills {
        let base = format!("sections.skills.functional.qualities.{}", card.id);
        write!(
            html,
            r#"<article class="skill-card"{}><h3>{}</h3><p>{}</p>"#,
            card.icon
                .as_deref()
                .map(|icon| format!(r#" data-icon="{}""#, escape_attr(icon)))
                .unwrap_or_default(),
            escape_html(&ctx.t(&format!("{base}.title"))),
            escape_html(&ctx.t(&format!("{base}.desc")))
        )?;
        if !card.badges.is_empty() {
            html.push_str(r#"<ul class="skill-card__chips">"#);
            for badge in &card.badges {
                write!(
                    html,
                    "<li>{}</li>",
                    escape_html(&ctx.t(&format!("{base}.chips.{badge}")))
                )?;
            }
            html.push_str("</ul>");
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");

    write!(
        html,
        r#"<h3 class="skills__libraries">{}</h3>"#,
        escape_html(&ctx.t("sections.skills.functional.libraries"))
    )?;
    html.push_str(r#"<div class="skills__categories">"#);
    for category in &data.categories {
        write!(
            html,
            r#"<div class="tech-category"><h4>{}</h4>"#,
            escape_html(&ctx.t(&format!(
                "sections.skills.technical.categories.{}",
                category.id
            )))
        )?;
        for item in &category.items {
            write!(
                html,
                r#"<img src="{}" alt="" loading="lazy">"#,
                escape_attr(item)
            )?;
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    if !data.competencies.is_empty() {
        write!(
            html,
            r#"<h3 class="skills__competencies-title">{}</h3><ul class="skills__competencies">"#,
            escape_html(&ctx.t("sections.skills.functional.key_competencies.title"))
        )?;
        for competency in &data.competencies {
            write!(
                html,
                "<li>{}</li>",
                escape_html(&ctx.t(&format!(
                    "sections.skills.functional.key_competencies.competencies.{competency}"
                )))
            )?;
        }
        html.push_str("</ul>");
    }

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{render_one, translations};

    #[test]
    fn test_render_skills() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);

        let i18n = translations(
            r#"
            [sections.skills.functional]
            libraries = "Technologies"

            [sections.skills.functional.qualities.leadership]
            title = "Leadership"
            desc = "Leads teams."
            [sections.skills.functional.qualities.leadership.chips]
            mentoring = "Mentoring"

            [sections.skills.technical.categories]
            frontend = "Frontend"

            [sections.skills.functional.key_competencies]
            title = "Key Competencies"
            [sections.skills.functional.key_competencies.competencies]
            estimate = "Estimation and planning"
        "#,
        );

        let payload = r#"
            competencies = ["estimate"]

            [[main_skills]]
            id = "leadership"
            icon = "briefcase"
            badges = ["mentoring"]

            [[categories]]
            id = "frontend"
            items = ["https://img.shields.io/badge/react.svg"]
        "#;

        let html = render_one(&catalog, "skills", payload, &i18n).unwrap();

        assert!(html.contains("Leadership"));
        assert!(html.contains("Mentoring"));
        assert!(html.contains(r#"data-icon="briefcase""#));
        assert!(html.contains("Frontend"));
        assert!(html.contains("react.svg"));
        assert!(html.contains("Estimation and planning"));
    }

    #[test]
    fn test_render_skills_empty_payload() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);
        let i18n = translations("[sections.skills.functional]\nlibraries = \"Tech\"");

        let html = render_one(&catalog, "skills", "", &i18n).unwrap();
        assert!(html.contains("Tech"));
        assert!(!html.contains("skill-card"));
    }
}
