// ============================================================================
// SHELL - Cabecera con navegación, contenedor de página y pie
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::SiteConfig;
use crate::content::{page_content, THEME};
use crate::dom::{
    link, on_click, query_selector, query_selector_all, remove_attribute, set_attribute,
    text_element, toggle_class, ElementBuilder,
};
use crate::router::{RouteName, RouteTable};
use crate::state::AppState;

/// id del `<main>` donde se monta cada página
pub const PAGE_CONTAINER_ID: &str = "page";

/// Construir el shell completo. La página se monta después en `#page`.
pub fn render_shell(config: &SiteConfig, table: &RouteTable, state: &AppState) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?
        .class("page-container")
        .id(PAGE_CONTAINER_ID)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .attr("style", &THEME.css_variables())?
        .child(render_header(config, table, state)?)?
        .child(main)?
        .child(render_footer(config)?)?
        .build())
}

fn render_header(config: &SiteConfig, table: &RouteTable, state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .attr("aria-label", "主导航")?
        .build();

    for entry in table.iter() {
        let label = page_content(entry.view).map(|c| c.nav_label).unwrap_or(entry.path);
        let item = link(&table.href_for(entry.name)?, "nav-link", label)?;
        set_attribute(&item, "data-route", entry.name.as_str())?;

        // Al elegir una página se cierra el menú móvil
        let state_clone = state.clone();
        let nav_clone = nav.clone();
        on_click(&item, move |_| {
            state_clone.close_menu();
            if let Err(e) = toggle_class(&nav_clone, "open", false) {
                log::error!("❌ [SHELL] Error cerrando menú: {:?}", e);
            }
        })?;

        nav.append_child(&item)?;
    }

    let toggle = ElementBuilder::new("button")?
        .class("btn-menu")
        .attr("type", "button")?
        .attr("aria-label", "菜单")?
        .text("☰")
        .build();
    {
        let state_clone = state.clone();
        let nav_clone = nav.clone();
        on_click(&toggle, move |_| {
            let open = state_clone.toggle_menu();
            if let Err(e) = toggle_class(&nav_clone, "open", open) {
                log::error!("❌ [SHELL] Error abriendo menú: {:?}", e);
            }
        })?;
    }

    let home = link(&table.href_for(RouteName::Home)?, "brand", &config.site_title)?;

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(home)?
        .child(toggle)?
        .child(nav)?
        .build())
}

fn render_footer(config: &SiteConfig) -> Result<Element, JsValue> {
    let copyright = format!("© {} {}", config.footer_year, config.company_name);
    Ok(ElementBuilder::new("footer")?
        .class("app-footer")
        .child(text_element("p", "footer-description", &config.site_description)?)?
        .child(text_element("p", "footer-copyright", &copyright)?)?
        .build())
}

/// Marcar el link activo en la navegación (sin re-render del shell)
pub fn update_nav_active(active: Option<RouteName>) -> Result<(), JsValue> {
    for item in query_selector_all(".app-nav .nav-link")? {
        let is_active = active
            .map(|name| item.get_attribute("data-route").as_deref() == Some(name.as_str()))
            .unwrap_or(false);
        toggle_class(&item, "active", is_active)?;
        if is_active {
            set_attribute(&item, "aria-current", "page")?;
        } else {
            remove_attribute(&item, "aria-current")?;
        }
    }

    if let Some(nav) = query_selector(".app-nav")? {
        toggle_class(&nav, "open", false)?;
    }
    Ok(())
}
