// ============================================================================
// PAGE - Plantilla común: cabecera (hero) + secciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::content::{PageContent, Section};
use crate::dom::{text_element, ElementBuilder};

pub fn render_page(content: &PageContent) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("article")?
        .class("page")
        .child(render_hero(content)?)?
        .child(render_sections(content.sections)?)?
        .build())
}

pub fn render_hero(content: &PageContent) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("header")?
        .class("page-hero")
        .child(text_element("h1", "page-title", content.title)?)?
        .child(text_element("p", "page-tagline", content.tagline)?)?
        .build())
}

pub fn render_sections(sections: &[Section]) -> Result<Element, JsValue> {
    let items = sections
        .iter()
        .map(render_section)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ElementBuilder::new("div")?
        .class("page-sections")
        .children(items)?
        .build())
}

fn render_section(section: &Section) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("page-section")
        .child(text_element("h2", "section-heading", section.heading)?)?
        .child(text_element("p", "section-body", section.body)?)?
        .build())
}
