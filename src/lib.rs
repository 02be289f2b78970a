// ============================================================================
// 聚星空间站 - SPA EN RUST PURO (WASM)
// ============================================================================
// - Router: tabla de rutas estática + navegación por hash (#/…)
// - Views: funciones que construyen DOM (sin lógica)
// - State: estado de UI con Rc<RefCell>
// - Config: valores de .env resueltos en tiempo de compilación
// ============================================================================

pub mod config;
pub mod content;
pub mod router;
pub mod state;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::SiteConfig;
use crate::dom::on_window_event_once;
use crate::router::{RouteName, RouteTable};

// Instancia global de App (una por pestaña)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 {} - Rust Puro ({})", config.site_title, config.environment);

    let app = App::new(config)?;
    app.mount()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Atrás/adelante, links y edición manual del hash llegan todos como hashchange
    on_window_event_once("hashchange", |_| {
        if let Err(e) = with_app(|app| app.handle_location_change()) {
            log::error!("❌ [HASHCHANGE] {:?}", e);
        }
    })?;

    Ok(())
}

fn with_app<R>(f: impl FnOnce(&App) -> Result<R, JsValue>) -> Result<R, JsValue> {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => f(app),
        None => Err(JsValue::from_str("App no está inicializada")),
    })
}

/// Re-montar la página actual si cambió (llamado desde el Timeout del router)
pub(crate) fn refresh_page() {
    if let Err(e) = with_app(|app| app.render_page()) {
        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
    }
}

/// Navegar por nombre simbólico (llamable desde JavaScript)
#[wasm_bindgen]
pub fn navigate(name: &str) -> Result<(), JsValue> {
    let name: RouteName = name.parse()?;
    with_app(|app| app.navigate(name))
}

/// Nombre de la ruta activa, si hay alguna
#[wasm_bindgen]
pub fn current_route() -> Option<String> {
    with_app(|app| Ok(app.router().current_name().map(|n| n.to_string())))
        .ok()
        .flatten()
}

/// Tabla de rutas en JSON (para depuración desde la consola)
#[wasm_bindgen]
pub fn route_table_json() -> Result<String, JsValue> {
    serde_json::to_string(RouteTable::shared())
        .map_err(|e| JsValue::from_str(&format!("Error serializando tabla: {}", e)))
}
