// ============================================================================
// VIEWS - Funciones que construyen DOM (sin lógica de navegación)
// ============================================================================

pub mod shell;
pub mod page;
pub mod home;
pub mod product;
pub mod not_found;

pub use shell::{render_shell, update_nav_active, PAGE_CONTAINER_ID};
pub use not_found::render_not_found;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::content::page_content;
use crate::router::{RouteTable, ViewHandle};

/// Renderizar la página asociada a un ViewHandle
pub fn render_view(view: ViewHandle, table: &RouteTable) -> Result<Element, JsValue> {
    let content = page_content(view)
        .ok_or_else(|| JsValue::from_str("View without content"))?;

    match view {
        ViewHandle::HOME => home::render_home(content, table),
        ViewHandle::ZYZK001 => product::render_product(content),
        _ => page::render_page(content),
    }
}
