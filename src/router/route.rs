// ============================================================================
// ROUTE - Tipos de valor: nombre simbólico, handle de vista y entrada
// ============================================================================

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use crate::router::RouterError;

/// Nombre simbólico de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteName {
    Home,
    Intellectual,
    Ia,
    Zyzk001,
}

impl RouteName {
    /// Todos los nombres, en orden de declaración
    pub const ALL: [RouteName; 4] = [
        RouteName::Home,
        RouteName::Intellectual,
        RouteName::Ia,
        RouteName::Zyzk001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Intellectual => "intellectual",
            RouteName::Ia => "ia",
            RouteName::Zyzk001 => "zyzk001",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RouterError::UnknownRouteName { name: s.to_string() })
    }
}

/// Referencia opaca a una página renderizable.
/// Solo la capa `views` sabe qué hay detrás.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ViewHandle(pub(crate) u8);

impl ViewHandle {
    pub const HOME: ViewHandle = ViewHandle(0);
    pub const INTELLECTUAL: ViewHandle = ViewHandle(1);
    pub const IA: ViewHandle = ViewHandle(2);
    pub const ZYZK001: ViewHandle = ViewHandle(3);
}

/// Entrada de la tabla de rutas: path -> nombre -> vista
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: RouteName,
    pub view: ViewHandle,
}

impl RouteEntry {
    pub const fn new(path: &'static str, name: RouteName, view: ViewHandle) -> Self {
        Self { path, name, view }
    }
}
