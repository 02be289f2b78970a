// ============================================================================
// APP STATE - Estado de UI de la aplicación
// ============================================================================
// La vista actual vive en el Router; aquí solo hay estado de presentación.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::NotFoundAction;
use crate::router::{AddressBar, Router, RouterError};

/// Estado global de UI
#[derive(Clone, Default)]
pub struct AppState {
    /// Menú de navegación abierto (móvil)
    pub menu_open: Rc<RefCell<bool>>,
    /// Path pedido que no existe; mientras sea Some se muestra el panel 404
    pub missing_path: Rc<RefCell<Option<String>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&self) -> bool {
        let mut open = self.menu_open.borrow_mut();
        *open = !*open;
        *open
    }

    pub fn close_menu(&self) {
        *self.menu_open.borrow_mut() = false;
    }

    pub fn is_menu_open(&self) -> bool {
        *self.menu_open.borrow()
    }

    pub fn set_missing_path(&self, path: Option<String>) {
        *self.missing_path.borrow_mut() = path;
    }

    pub fn missing_path(&self) -> Option<String> {
        self.missing_path.borrow().clone()
    }

    /// Quitar el path pendiente. true si había uno (el panel 404 debe desmontarse).
    pub fn clear_missing_path(&self) -> bool {
        self.missing_path.borrow_mut().take().is_some()
    }

    /// Aplicar la decisión ante una ruta inexistente.
    /// Devuelve true si el estado de UI cambió y hay que re-montar la página;
    /// los cambios de vista del router se notifican por su cuenta.
    pub fn apply_not_found<A: AddressBar>(
        &self,
        action: NotFoundAction,
        router: &Router<'_, A>,
    ) -> Result<bool, RouterError> {
        match action {
            NotFoundAction::ShowPanel(path) => {
                let changed = self.missing_path().as_deref() != Some(path.as_str());
                self.set_missing_path(Some(path));
                Ok(changed)
            }
            NotFoundAction::Redirect(name) => {
                router.navigate(name)?;
                Ok(self.clear_missing_path())
            }
            NotFoundAction::KeepCurrent => Ok(false),
        }
    }
}
