//! The `projects` section: a card per project with image, translated
//! title and description, and an outbound link.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsData {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: String,

    #[serde(default)]
    pub image: Option<String>,

    pub link: String,

    /// Link label key under `sections.projects.links`, e.g.
    /// `source_code_here` or `try_it`.
    pub link_text_key: String,
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<ProjectsData, _>("projects", render);
}

fn render(data: &ProjectsData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::from(r#"<div class="projects__carousel">"#);

    for project in &data.projects {
        let base = format!("sections.projects.items.{}", project.id);
        html.push_str(r#"<article class="project-card">"#);
        if let Some(image) = &project.image {
            write!(
                html,
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                escape_attr(image),
                escape_attr(&ctx.t(&format!("{base}.title")))
            )?;
        }
        write!(
            html,
            r#"<h3>{}</h3><p>{}</p><a href="{}" target="_blank" rel="noopener">{}</a></article>"#,
            escape_html(&ctx.t(&format!("{base}.title"))),
            escape_html(&ctx.t(&format!("{base}.description"))),
            escape_attr(&project.link),
            escape_html(&ctx.t(&format!("sections.projects.links.{}", project.link_text_key)))
        )?;
    }

    html.push_str("</div>");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{render_one, translations};

    #[test]
    fn test_render_projects() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);

        let i18n = translations(
            r#"
            [sections.projects.items.health_tracker]
            title = "Health Tracker"
            description = "Tracks workouts & meals."

            [sections.projects.links]
            source_code_here = "Source code here"
        "#,
        );

        let payload = r#"
            [[projects]]
            id = "health_tracker"
            image = "assets/projects/health-tracker.webp"
            link = "https://github.com/alex/health-tracker"
            link_text_key = "source_code_here"
        "#;

        let html = render_one(&catalog, "projects", payload, &i18n).unwrap();

        assert!(html.contains("Health Tracker"));
        // translated text is escaped
        assert!(html.contains("Tracks workouts &amp; meals."));
        assert!(html.contains(r#"href="https://github.com/alex/health-tracker""#));
        assert!(html.contains("Source code here"));
    }

    #[test]
    fn test_render_projects_requires_link() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);
        let i18n = translations("");

        let payload = r#"
            [[projects]]
            id = "broken"
            link_text_key = "try_it"
        "#;

        assert!(render_one(&catalog, "projects", payload, &i18n).is_err());
    }
}
