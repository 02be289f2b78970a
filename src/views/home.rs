// ============================================================================
// HOME VIEW - Portada: hero, secciones y accesos a las demás páginas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::content::{page_content, PageContent};
use crate::dom::{link, text_element, ElementBuilder};
use crate::router::{RouteName, RouteTable};
use crate::views::page::{render_hero, render_sections};

pub fn render_home(content: &PageContent, table: &RouteTable) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("article")?
        .class("page page-home")
        .child(render_hero(content)?)?
        .child(render_sections(content.sections)?)?
        .child(render_shortcuts(table)?)?
        .build())
}

/// Tarjetas con link a cada página excepto home
fn render_shortcuts(table: &RouteTable) -> Result<Element, JsValue> {
    let mut cards = Vec::new();
    for entry in table.iter().filter(|e| e.name != RouteName::Home) {
        let Some(target) = page_content(entry.view) else {
            continue;
        };
        let href = table.href_for(entry.name)?;
        let card = ElementBuilder::new("div")?
            .class("shortcut-card")
            .child(text_element("h3", "shortcut-title", target.title)?)?
            .child(text_element("p", "shortcut-tagline", target.tagline)?)?
            .child(link(&href, "shortcut-link", "了解更多 →")?)?
            .build();
        cards.push(card);
    }

    Ok(ElementBuilder::new("nav")?
        .class("home-shortcuts")
        .attr("aria-label", "快速入口")?
        .children(cards)?
        .build())
}
