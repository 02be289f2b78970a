// ============================================================================
// APP - Aplicación principal: shell + router + render de páginas
// ============================================================================

use std::cell::RefCell;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::SiteConfig;
use crate::content::page_content;
use crate::dom::{append_child, clear_children, get_element_by_id, scroll_to_top, set_document_title};
use crate::router::{HashAddress, RouteName, RouteTable, Router, RouterError, ViewHandle};
use crate::state::AppState;
use crate::views::{render_not_found, render_shell, render_view, update_nav_active, PAGE_CONTAINER_ID};

/// Lo que está montado ahora mismo en `#page`
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mounted {
    View(ViewHandle),
    NotFound(String),
}

/// Aplicación principal
pub struct App {
    config: SiteConfig,
    state: AppState,
    router: Router<'static, HashAddress>,
    root: Element,
    mounted: RefCell<Option<Mounted>>,
}

impl App {
    /// Crear nueva aplicación sobre el elemento `config.mount_id`
    pub fn new(config: SiteConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id(&config.mount_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", config.mount_id)))?;

        let router = Router::new(RouteTable::shared(), HashAddress::new());

        // Cambios de vista: se re-monta en el siguiente tick
        router.subscribe(schedule_render);

        Ok(Self {
            config,
            state: AppState::new(),
            router,
            root,
            mounted: RefCell::new(None),
        })
    }

    pub fn router(&self) -> &Router<'static, HashAddress> {
        &self.router
    }

    /// Montar el shell y la página que indica el hash actual
    pub fn mount(&self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Montando shell en #{}", self.config.mount_id);
        clear_children(&self.root);
        *self.mounted.borrow_mut() = None;

        let shell = render_shell(&self.config, self.router.table(), &self.state)?;
        append_child(&self.root, &shell)?;

        // El shell es nuevo: hay que montar la página aunque la vista no cambie
        schedule_render();
        self.handle_location_change()
    }

    /// Reaccionar a un cambio de hash (carga inicial, link, atrás/adelante)
    pub fn handle_location_change(&self) -> Result<(), JsValue> {
        match self.router.sync_from_address() {
            Ok(_) => {
                if self.state.clear_missing_path() {
                    schedule_render();
                }
                Ok(())
            }
            Err(RouterError::RouteNotFound { path }) => self.handle_not_found(&path),
            Err(e) => Err(e.into()),
        }
    }

    /// Navegación programática por nombre
    pub fn navigate(&self, name: RouteName) -> Result<(), JsValue> {
        self.router.navigate(name)?;
        if self.state.clear_missing_path() {
            schedule_render();
        }
        Ok(())
    }

    fn handle_not_found(&self, path: &str) -> Result<(), JsValue> {
        let action = self
            .config
            .not_found
            .on_not_found(path, self.router.current().is_some());
        log::warn!("⚠️ [APP] Ruta no encontrada: {} -> {:?}", path, action);

        if self.state.apply_not_found(action, &self.router)? {
            schedule_render();
        }
        Ok(())
    }

    /// Montar en `#page` lo que corresponda al estado actual.
    /// No hace nada si ya está montado. Se llama solo desde `schedule_render`.
    pub fn render_page(&self) -> Result<(), JsValue> {
        let target = match (self.state.missing_path(), self.router.current()) {
            (Some(path), _) => Mounted::NotFound(path),
            (None, Some(view)) => Mounted::View(view),
            (None, None) => return Ok(()),
        };
        if self.mounted.borrow().as_ref() == Some(&target) {
            return Ok(());
        }

        let container = get_element_by_id(PAGE_CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("No #page container"))?;
        let table = self.router.table();

        let (page, title, active) = match &target {
            Mounted::View(view) => {
                let title = page_content(*view).map(|c| c.title).unwrap_or_default();
                (render_view(*view, table)?, title, self.router.current_name())
            }
            Mounted::NotFound(path) => (render_not_found(path, table)?, "页面不存在", None),
        };

        clear_children(&container);
        append_child(&container, &page)?;
        update_nav_active(active)?;
        self.state.close_menu();
        set_document_title(&format!("{} | {}", title, self.config.site_title));
        scroll_to_top();

        log::debug!("✅ [APP] Página montada: {:?}", target);
        *self.mounted.borrow_mut() = Some(target);
        Ok(())
    }
}

/// Batchear: varios cambios en el mismo evento producen un solo render
fn schedule_render() {
    Timeout::new(0, crate::refresh_page).forget();
}
