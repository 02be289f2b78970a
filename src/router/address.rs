// ============================================================================
// ADDRESS BAR - Colaborador de historial/dirección
// ============================================================================
// El router no manipula la barra de direcciones directamente: lee y escribe
// el fragmento a través de este trait. En el navegador es `location.hash`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Lectura/escritura del fragmento visible (`#/…`)
pub trait AddressBar {
    /// Fragmento actual, con `#` incluido (o vacío)
    fn read_fragment(&self) -> String;

    /// Publicar un nuevo fragmento (crea entrada de historial)
    fn write_fragment(&self, fragment: &str);
}

/// Dirección del navegador vía `window.location.hash`
#[derive(Debug, Default, Clone, Copy)]
pub struct HashAddress;

impl HashAddress {
    pub fn new() -> Self {
        Self
    }
}

impl AddressBar for HashAddress {
    fn read_fragment(&self) -> String {
        web_sys::window()
            .and_then(|win| win.location().hash().ok())
            .unwrap_or_default()
    }

    fn write_fragment(&self, fragment: &str) {
        let Some(win) = web_sys::window() else {
            log::warn!("⚠️ [ADDRESS] Sin window, no se puede escribir {}", fragment);
            return;
        };
        if let Err(e) = win.location().set_hash(fragment) {
            log::error!("❌ [ADDRESS] Error escribiendo hash {}: {:?}", fragment, e);
        }
    }
}

/// Dirección en memoria con historial propio.
/// Los clones comparten el mismo historial.
#[derive(Debug, Clone, Default)]
pub struct MemoryAddress {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryAddress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dirección que arranca con un fragmento ya escrito (entrada directa de URL)
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            history: Rc::new(RefCell::new(vec![fragment.to_string()])),
        }
    }

    /// Simula el botón "atrás": descarta la entrada actual
    pub fn back(&self) -> Option<String> {
        let mut history = self.history.borrow_mut();
        if history.len() > 1 {
            history.pop();
            history.last().cloned()
        } else {
            None
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }
}

impl AddressBar for MemoryAddress {
    fn read_fragment(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    fn write_fragment(&self, fragment: &str) {
        self.history.borrow_mut().push(fragment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_address_starts_empty() {
        let address = MemoryAddress::new();
        assert_eq!(address.read_fragment(), "");
        assert_eq!(address.back(), None);
    }

    #[test]
    fn clones_share_history() {
        let address = MemoryAddress::new();
        let observer = address.clone();
        address.write_fragment("#/ia");
        assert_eq!(observer.read_fragment(), "#/ia");
        assert_eq!(observer.history_len(), 1);
    }

    #[test]
    fn back_returns_previous_fragment() {
        let address = MemoryAddress::with_fragment("#/");
        address.write_fragment("#/ia");
        assert_eq!(address.back(), Some("#/".to_string()));
        assert_eq!(address.read_fragment(), "#/");
    }
}
