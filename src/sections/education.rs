//! The `education` section: study history timeline plus spoken
//! language levels.
//!
//! History entry names and locations are localized text, looked up
//! under `sections.education.studies.history.<id>`; the payload carries
//! the id, year and icon.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationData {
    #[serde(default)]
    pub history: Vec<StudyEntry>,

    #[serde(default)]
    pub languages: Vec<LanguageLevel>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudyEntry {
    pub id: String,
    pub year: String,

    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageLevel {
    pub id: String,

    /// Proficiency from 0 to 100.
    pub value: u8,

    /// CSS color for the progress bar, e.g. `var(--brand-6)`.
    #[serde(default)]
    pub color: Option<String>,
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<EducationData, _>("education", render);
}

fn render(data: &EducationData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::new();

    write!(
        html,
        r#"<h3>{}</h3><ol class="education__timeline">"#,
        escape_html(&ctx.t("sections.education.studies.title"))
    )?;
    for entry in &data.history {
        let base = format!("sections.education.studies.history.{}", entry.id);
        write!(
            html,
            r#"<li class="study"{}><span class="study__year">{}</span><strong>{}</strong><span class="study__location">{}</span></li>"#,
            entry
                .icon
                .as_deref()
                .map(|icon| format!(r#" data-icon="{}""#, escape_attr(icon)))
                .unwrap_or_default(),
            escape_html(&entry.year),
            escape_html(&ctx.t(&format!("{base}.name"))),
            escape_html(&ctx.t(&format!("{base}.location")))
        )?;
    }
    html.push_str("</ol>");

    if !data.languages.is_empty() {
        write!(
            html,
            r#"<h3>{}</h3><ul class="education__languages">"#,
            escape_html(&ctx.t("sections.education.languages.title"))
        )?;
        for language in &data.languages {
            write!(
                html,
                r#"<li class="language"><span>{}</span><div class="language__bar" role="progressbar" aria-valuenow="{}" style="width:{}%{}"></div></li>"#,
                escape_html(&ctx.t(&format!(
                    "sections.education.languages.names.{}",
                    language.id
                ))),
                language.value,
                language.value.min(100),
                language
                    .color
                    .as_deref()
                    .map(|color| format!(";background:{}", escape_attr(color)))
                    .unwrap_or_default()
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
    fn test_render_education() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);

        let i18n = translations(
            r#"
            [sections.education.studies]
            title = "Education"
            [sections.education.studies.history.msc]
            name = "Master of Science"
            location = "Stanford University"

            [sections.education.languages]
            title = "Languages"
            [sections.education.languages.names]
            english = "English"
        "#,
        );

        let payload = r#"
            [[history]]
            id = "msc"
            year = "2016"
            icon = "school"

            [[languages]]
            id = "english"
            value = 100
            color = "var(--brand-6)"
        "#;

        let html = render_one(&catalog, "education", payload, &i18n).unwrap();

        assert!(html.contains("Master of Science"));
        assert!(html.contains("Stanford University"));
        assert!(html.contains("2016"));
        assert!(html.contains(r#"aria-valuenow="100""#));
        assert!(html.contains("background:var(--brand-6)"));
        assert!(html.contains("English"));
    }

    #[test]
    fn test_render_education_no_languages() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);
        let i18n = translations("");

        let html = render_one(&catalog, "education", "", &i18n).unwrap();
        assert!(!html.contains("education__languages"));
    }
}
