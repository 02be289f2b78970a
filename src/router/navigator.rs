// ============================================================================
// ROUTER - Vista actual + navegación por nombre o por fragmento
// ============================================================================
// Único escritor del puntero "vista actual". Todo es síncrono: una navegación
// resuelve o falla antes de procesar el siguiente evento.
// ============================================================================

use crate::router::{
    format_fragment, parse_fragment, AddressBar, RouteEntry, RouteName, RouteTable, RouterError,
    ViewHandle,
};
use crate::state::ReactiveState;

pub struct Router<'t, A: AddressBar> {
    table: &'t RouteTable,
    address: A,
    current: ReactiveState<Option<ViewHandle>>,
}

impl<'t, A: AddressBar> Router<'t, A> {
    /// Crear router sobre una tabla ya construida. No hay vista activa
    /// hasta la primera navegación o `sync_from_address`.
    pub fn new(table: &'t RouteTable, address: A) -> Self {
        Self {
            table,
            address,
            current: ReactiveState::new(None),
        }
    }

    pub fn table(&self) -> &'t RouteTable {
        self.table
    }

    /// Resolver sin efectos secundarios
    pub fn resolve(&self, path: &str) -> Result<ViewHandle, RouterError> {
        self.table.resolve(path)
    }

    /// Navegar a una ruta por su nombre simbólico
    pub fn navigate(&self, name: RouteName) -> Result<ViewHandle, RouterError> {
        let entry = *self.table.entry_for_name(name)?;
        self.activate(&entry, true);
        Ok(entry.view)
    }

    /// Navegar a partir de un path (`/ia`)
    pub fn navigate_path(&self, path: &str) -> Result<ViewHandle, RouterError> {
        let entry = *self.table.entry_for_path(path)?;
        self.activate(&entry, true);
        Ok(entry.view)
    }

    /// Sincronizar con el fragmento actual (carga inicial, hashchange, atrás/adelante).
    /// Si el path no existe la vista actual no cambia.
    pub fn sync_from_address(&self) -> Result<ViewHandle, RouterError> {
        let path = parse_fragment(&self.address.read_fragment());
        let entry = *self.table.entry_for_path(&path)?;
        self.activate(&entry, false);
        Ok(entry.view)
    }

    pub fn current(&self) -> Option<ViewHandle> {
        self.current.value()
    }

    pub fn current_entry(&self) -> Option<&'t RouteEntry> {
        let table = self.table;
        self.current().and_then(|view| table.entry_for_view(view))
    }

    pub fn current_name(&self) -> Option<RouteName> {
        self.current_entry().map(|entry| entry.name)
    }

    /// Fragmento tal como lo ve el usuario en la barra de direcciones
    pub fn current_fragment(&self) -> String {
        self.address.read_fragment()
    }

    /// Suscribirse a cambios de la vista actual
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }

    fn activate(&self, entry: &RouteEntry, publish: bool) {
        // Solo se escribe el hash si cambia, para no duplicar entradas de historial
        if publish && parse_fragment(&self.address.read_fragment()) != entry.path {
            self.address.write_fragment(&format_fragment(entry.path));
        }
        if self.current.set_if_changed(Some(entry.view)) {
            log::debug!("🧭 [ROUTER] Vista activa: {} ({})", entry.name, entry.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryAddress;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_without_view() {
        let table = RouteTable::new();
        let router = Router::new(&table, MemoryAddress::new());
        assert_eq!(router.current(), None);
        assert_eq!(router.current_name(), None);
    }

    #[test]
    fn navigate_writes_fragment() {
        let table = RouteTable::new();
        let address = MemoryAddress::new();
        let router = Router::new(&table, address.clone());

        router.navigate(RouteName::Intellectual).unwrap();
        assert_eq!(address.read_fragment(), "#/intellectual");
        assert_eq!(router.current(), Some(ViewHandle::INTELLECTUAL));
    }

    #[test]
    fn home_on_empty_hash_does_not_push_history() {
        let table = RouteTable::new();
        let address = MemoryAddress::new();
        let router = Router::new(&table, address.clone());

        router.navigate(RouteName::Home).unwrap();
        assert_eq!(address.history_len(), 0);
        assert_eq!(router.current(), Some(ViewHandle::HOME));
    }

    #[test]
    fn subscribers_only_fire_on_change() {
        let table = RouteTable::new();
        let router = Router::new(&table, MemoryAddress::new());
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            router.subscribe(move || calls.set(calls.get() + 1));
        }

        router.navigate(RouteName::Ia).unwrap();
        router.navigate(RouteName::Ia).unwrap();
        assert_eq!(calls.get(), 1);

        router.navigate(RouteName::Home).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn sync_follows_back_button() {
        let table = RouteTable::new();
        let address = MemoryAddress::with_fragment("#/");
        let router = Router::new(&table, address.clone());

        router.sync_from_address().unwrap();
        router.navigate(RouteName::Zyzk001).unwrap();
        address.back();
        assert_eq!(router.sync_from_address(), Ok(ViewHandle::HOME));
        assert_eq!(router.current_name(), Some(RouteName::Home));
    }

    #[test]
    fn unknown_fragment_leaves_view_unchanged() {
        let table = RouteTable::new();
        let address = MemoryAddress::with_fragment("#/ia");
        let router = Router::new(&table, address.clone());
        router.sync_from_address().unwrap();

        address.write_fragment("#/missing");
        let err = router.sync_from_address().unwrap_err();
        assert_eq!(err, RouterError::RouteNotFound { path: "/missing".into() });
        assert_eq!(router.current(), Some(ViewHandle::IA));
    }

    #[test]
    fn navigate_path_rejects_unknown_without_writing() {
        let table = RouteTable::new();
        let address = MemoryAddress::new();
        let router = Router::new(&table, address.clone());

        assert!(router.navigate_path("/nope").unwrap_err().is_not_found());
        assert_eq!(address.history_len(), 0);
        assert_eq!(router.current(), None);
    }
}
