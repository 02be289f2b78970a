// ============================================================================
// ROUTER ERROR - Errores del router (resolución y validación de la tabla)
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores del router
///
/// `RouteNotFound` es el único error que aparece en navegación normal;
/// el resto solo puede salir de `RouteTable::with_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("route not found: {path}")]
    RouteNotFound { path: String },

    #[error("unknown route name: {name}")]
    UnknownRouteName { name: String },

    #[error("route path must start with '/': {path}")]
    InvalidPath { path: String },

    #[error("duplicate route path: {path}")]
    DuplicatePath { path: String },

    #[error("duplicate route name: {name}")]
    DuplicateName { name: String },

    #[error("view already bound to another route: {path}")]
    DuplicateView { path: String },
}

impl RouterError {
    /// true si el error viene de una ruta no registrada
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouterError::RouteNotFound { .. })
    }
}

impl From<RouterError> for JsValue {
    fn from(err: RouterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
