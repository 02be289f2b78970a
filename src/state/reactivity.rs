// ============================================================================
// REACTIVITY - Valor observable con subscribers
// ============================================================================

use std::cell::RefCell;

type Callback = Box<dyn Fn()>;

/// Valor con notificación a subscribers cuando cambia.
/// Solo notifica en cambios reales: escribir el mismo valor no dispara nada.
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T: Clone + PartialEq> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Copia del valor actual
    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }

    /// Escribir un valor nuevo. Devuelve true si hubo cambio (y se notificó).
    pub fn set_if_changed(&self, new_value: T) -> bool {
        {
            let mut value = self.value.borrow_mut();
            if *value == new_value {
                return false;
            }
            *value = new_value;
        }
        self.notify();
        true
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}
