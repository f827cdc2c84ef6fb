//! The `about` section: name, job title, experience counter, summary
//! and social links.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutData {
    pub years_of_experience: u32,
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<AboutData, _>("about", render);
}

fn render(data: &AboutData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::new();

    if let Some(picture) = ctx.meta.profile_pictures.first() {
        write!(
            html,
            r#"<img class="about__picture" src="{}" alt="{}">"#,
            escape_attr(picture),
            escape_attr(&ctx.meta.name)
        )?;
    }

    write!(
        html,
        r#"<h1 class="about__name">{}</h1><p class="about__job-title">{}</p>"#,
        escape_html(&ctx.meta.name),
        escape_html(&ctx.t("sections.about.job_title"))
    )?;

    write!(
        html,
        r#"<p class="about__experience"><span class="about__counter" data-count="{0}">{0}</span> {1}</p>"#,
        data.years_of_experience,
        escape_html(&ctx.t("sections.about.experience_text"))
    )?;

    write!(
        html,
        r#"<p class="about__summary">{}</p>"#,
        escape_html(&ctx.t("sections.about.summary"))
    )?;

    html.push_str(r#"<ul class="about__socials">"#);
    for social in &ctx.meta.socials {
        write!(
            html,
            r#"<li><a class="social social--{0}" href="{1}" target="_blank" rel="noopener">{0}</a></li>"#,
            social.platform.as_str(),
            escape_attr(&social.url)
        )?;
    }
    if let Some(pdf) = ctx.meta.pdf_resume.get(ctx.lang) {
        write!(
            html,
            r#"<li><a class="social social--download" href="{}" download>cv</a></li>"#,
            escape_attr(pdf)
        )?;
    }
    html.push_str("</ul>");

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{render_one, translations};

    #[test]
    fn test_render_about() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);

        let i18n = translations(
            r#"
            [sections.about]
            job_title = "Full Stack Developer"
            experience_text = "years of experience"
            summary = "I build <things>."
        "#,
        );

        let html = render_one(&catalog, "about", "years_of_experience = 8", &i18n).unwrap();

        assert!(html.contains("Alex Morgan"));
        assert!(html.contains("Full Stack Developer"));
        assert!(html.contains(r#"data-count="8""#));
        // summary is escaped
        assert!(html.contains("I build &lt;things&gt;."));
        assert!(html.contains("social--github"));
        assert!(html.contains(r#"href="pdf/cv-en.pdf""#));
    }

    #[test]
    fn test_render_about_rejects_unknown_field() {
        let mut catalog = SectionCatalog::new();
        register(&mut catalog);
        let i18n = translations("");

        let result = render_one(
            &catalog,
            "about",
            "years_of_experience = 8\nextra = true",
            &i18n,
        );
        assert!(result.is_err());
    }
}
