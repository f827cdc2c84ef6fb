//! The `hobbies` section: a photo grid with translated captions.

use crate::{
    section::{SectionCatalog, SectionContext},
    utils::html::{escape_attr, escape_html},
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HobbiesData {
    #[serde(default)]
    pub travels: Vec<Travel>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Travel {
    pub id: String,
    pub image: String,
}

pub fn register(catalog: &mut SectionCatalog) {
    catalog.register_typed::<HobbiesData, _>("hobbies", render);
}

fn render(data: &HobbiesData, ctx: &SectionContext) -> Result<String> {
    let mut html = String::from(r#"<div class="hobbies__grid">"#);

    for travel in &data.travels {
        let caption = ctx.t(&format!("sections.hobbies.travels.{}", travel.id));
        write!(
            html,
            r#"<figure class="hobby"><img src="{}" alt="{}" loading="lazy"><figcaption>{}</figcaption></figure>"#,
            escape_attr(&travel.image),
            escape_attr(&caption),
            escape_html(&caption)
        )?;
    }

    html.push_str("</div>");
    Ok(html)
}
