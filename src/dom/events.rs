// ============================================================================
// EVENT HANDLING - Listeners de elementos y de window
// ============================================================================
// - Listeners en elementos: el navegador los libera al destruir el elemento,
//   por eso closure.forget() es seguro.
// - Listeners en window: se registran UNA VEZ; un flag evita acumularlos.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

thread_local! {
    static WINDOW_LISTENERS: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Registrar un listener global en window.
/// Devuelve false si ya había uno registrado para ese evento.
pub fn on_window_event_once<F>(event_type: &str, handler: F) -> Result<bool, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let first = WINDOW_LISTENERS.with(|set| set.borrow_mut().insert(event_type.to_string()));
    if !first {
        log::warn!("⚠️ [EVENTS] Listener '{}' ya registrado, se ignora", event_type);
        return Ok(false);
    }

    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(true)
}
