// ============================================================================
// NOT FOUND VIEW - Panel para rutas inexistentes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{link, text_element, ElementBuilder};
use crate::router::{RouteName, RouteTable};

pub fn render_not_found(path: &str, table: &RouteTable) -> Result<Element, JsValue> {
    let home_href = table.href_for(RouteName::Home)?;
    Ok(ElementBuilder::new("article")?
        .class("page page-not-found")
        .child(text_element("h1", "page-title", "页面不存在")?)?
        .child(text_element("p", "not-found-path", path)?)?
        .child(link(&home_href, "btn-home", "返回首页")?)?
        .build())
}
