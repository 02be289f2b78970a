// ============================================================================
// ROUTE TABLE - Tabla de rutas estática e inmutable
// ============================================================================
// Se construye una sola vez al iniciar y se pasa por referencia al Router.
// No hay registro dinámico: las entradas no cambian durante la sesión.
// ============================================================================

use std::collections::HashSet;
use std::sync::OnceLock;
use serde::Serialize;
use crate::router::{format_fragment, RouteEntry, RouteName, RouterError, ViewHandle};

/// Rutas del sitio, en orden de declaración
pub const ROUTES: [RouteEntry; 4] = [
    RouteEntry::new("/", RouteName::Home, ViewHandle::HOME),
    RouteEntry::new("/intellectual", RouteName::Intellectual, ViewHandle::INTELLECTUAL),
    RouteEntry::new("/ia", RouteName::Ia, ViewHandle::IA),
    RouteEntry::new("/zyzk001", RouteName::Zyzk001, ViewHandle::ZYZK001),
];

static SHARED: OnceLock<RouteTable> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Tabla estándar del sitio (las cuatro rutas de `ROUTES`)
    pub fn new() -> Self {
        Self {
            entries: ROUTES.to_vec(),
        }
    }

    /// Instancia compartida, construida como mucho una vez por proceso
    pub fn shared() -> &'static RouteTable {
        SHARED.get_or_init(RouteTable::new)
    }

    /// Construir una tabla validando las entradas
    pub fn with_entries(entries: &[RouteEntry]) -> Result<Self, RouterError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        let mut views = HashSet::new();

        for entry in entries {
            if !entry.path.starts_with('/') {
                return Err(RouterError::InvalidPath { path: entry.path.to_string() });
            }
            if !paths.insert(entry.path) {
                return Err(RouterError::DuplicatePath { path: entry.path.to_string() });
            }
            if !names.insert(entry.name) {
                return Err(RouterError::DuplicateName { name: entry.name.to_string() });
            }
            if !views.insert(entry.view) {
                return Err(RouterError::DuplicateView { path: entry.path.to_string() });
            }
        }

        Ok(Self {
            entries: entries.to_vec(),
        })
    }

    /// Resolver un path por coincidencia exacta
    pub fn resolve(&self, path: &str) -> Result<ViewHandle, RouterError> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.view)
            .ok_or_else(|| RouterError::RouteNotFound { path: path.to_string() })
    }

    /// Entrada completa para un path
    pub fn entry_for_path(&self, path: &str) -> Result<&RouteEntry, RouterError> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .ok_or_else(|| RouterError::RouteNotFound { path: path.to_string() })
    }

    /// Entrada para un nombre simbólico
    pub fn entry_for_name(&self, name: RouteName) -> Result<&RouteEntry, RouterError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| RouterError::UnknownRouteName { name: name.to_string() })
    }

    /// Entrada asociada a una vista (para marcar el link activo)
    pub fn entry_for_view(&self, view: ViewHandle) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.view == view)
    }

    pub fn path_for(&self, name: RouteName) -> Result<&'static str, RouterError> {
        self.entry_for_name(name).map(|entry| entry.path)
    }

    /// Href para links: `#/ia`, `#/` para home
    pub fn href_for(&self, name: RouteName) -> Result<String, RouterError> {
        self.path_for(name).map(format_fragment)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_validates() {
        let table = RouteTable::with_entries(&ROUTES).unwrap();
        assert_eq!(table, RouteTable::new());
    }

    #[test]
    fn resolve_is_exact_match() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/ia"), Ok(ViewHandle::IA));
        assert!(table.resolve("/ia/").unwrap_err().is_not_found());
        assert!(table.resolve("/IA").unwrap_err().is_not_found());
        assert!(table.resolve("ia").unwrap_err().is_not_found());
        assert!(table.resolve("").unwrap_err().is_not_found());
    }

    #[test]
    fn rejects_path_without_leading_slash() {
        let entries = [RouteEntry::new("ia", RouteName::Ia, ViewHandle::IA)];
        assert_eq!(
            RouteTable::with_entries(&entries),
            Err(RouterError::InvalidPath { path: "ia".into() })
        );
    }

    #[test]
    fn rejects_duplicate_path() {
        let entries = [
            RouteEntry::new("/ia", RouteName::Ia, ViewHandle::IA),
            RouteEntry::new("/ia", RouteName::Home, ViewHandle::HOME),
        ];
        assert_eq!(
            RouteTable::with_entries(&entries),
            Err(RouterError::DuplicatePath { path: "/ia".into() })
        );
    }

    #[test]
    fn rejects_duplicate_name_and_view() {
        let dup_name = [
            RouteEntry::new("/", RouteName::Home, ViewHandle::HOME),
            RouteEntry::new("/inicio", RouteName::Home, ViewHandle::IA),
        ];
        assert_eq!(
            RouteTable::with_entries(&dup_name),
            Err(RouterError::DuplicateName { name: "home".into() })
        );

        let dup_view = [
            RouteEntry::new("/", RouteName::Home, ViewHandle::HOME),
            RouteEntry::new("/ia", RouteName::Ia, ViewHandle::HOME),
        ];
        assert_eq!(
            RouteTable::with_entries(&dup_view),
            Err(RouterError::DuplicateView { path: "/ia".into() })
        );
    }

    #[test]
    fn href_uses_fragment_addressing() {
        let table = RouteTable::new();
        assert_eq!(table.href_for(RouteName::Home).unwrap(), "#/");
        assert_eq!(table.href_for(RouteName::Zyzk001).unwrap(), "#/zyzk001");
    }

    #[test]
    fn shared_table_is_built_once() {
        let a = RouteTable::shared();
        let b = RouteTable::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn serializes_entries_in_order() {
        let json = serde_json::to_value(RouteTable::new()).unwrap();
        let paths: Vec<_> = json["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(paths, ["/", "/intellectual", "/ia", "/zyzk001"]);
    }
}
