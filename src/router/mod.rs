// ============================================================================
// ROUTER MODULE - Tabla de rutas + navegación por fragmento (hash)
// ============================================================================

pub mod error;
pub mod route;
pub mod fragment;
pub mod table;
pub mod address;
pub mod navigator;

pub use error::*;
pub use route::*;
pub use fragment::*;
pub use table::*;
pub use address::*;
pub use navigator::*;
