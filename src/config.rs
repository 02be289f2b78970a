// ============================================================================
// SITE CONFIG - Configuración cargada en tiempo de compilación
// ============================================================================
// build.rs copia las claves de `.env` a variables rustc-env; aquí se leen con
// option_env! y se les aplica un valor por defecto si faltan o no parsean.
// ============================================================================

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::router::RouteName;

/// Qué hace la capa de render cuando el hash no corresponde a ninguna ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotFoundPolicy {
    /// Panel "página no encontrada" con enlace a inicio
    #[default]
    Show,
    /// Redirigir a home
    Home,
    /// Mantener la vista anterior
    Keep,
}

impl FromStr for NotFoundPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "show" => Ok(NotFoundPolicy::Show),
            "home" => Ok(NotFoundPolicy::Home),
            "keep" => Ok(NotFoundPolicy::Keep),
            other => Err(format!("Política not-found desconocida: {}", other)),
        }
    }
}

/// Acción concreta que la App aplica ante un path inexistente
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundAction {
    /// Guardar el path pendiente y montar el panel 404
    ShowPanel(String),
    /// Navegar a otra ruta
    Redirect(RouteName),
    /// No tocar nada
    KeepCurrent,
}

impl NotFoundPolicy {
    /// Decidir qué hacer con `path`. `has_view` indica si ya hay una vista activa;
    /// sin ella `Keep` dejaría `#page` vacío, así que cae en el panel.
    pub fn on_not_found(self, path: &str, has_view: bool) -> NotFoundAction {
        match self {
            NotFoundPolicy::Show => NotFoundAction::ShowPanel(path.to_string()),
            NotFoundPolicy::Home => NotFoundAction::Redirect(RouteName::Home),
            NotFoundPolicy::Keep if has_view => NotFoundAction::KeepCurrent,
            NotFoundPolicy::Keep => NotFoundAction::ShowPanel(path.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_title: String,
    pub site_description: String,
    pub company_name: String,
    pub environment: String,
    pub enable_logging: bool,
    /// id del elemento donde se monta la app
    pub mount_id: String,
    pub not_found: NotFoundPolicy,
    pub footer_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "聚星空间站".to_string(),
            site_description: "聚星空间站：数据知识产权与智能应用服务平台".to_string(),
            company_name: "钟元智库（数据知识产权）有限公司".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            mount_id: "app".to_string(),
            not_found: NotFoundPolicy::Show,
            footer_year: 2025,
        }
    }
}

impl SiteConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "SITE_TITLE" => option_env!("SITE_TITLE"),
            "SITE_DESCRIPTION" => option_env!("SITE_DESCRIPTION"),
            "COMPANY_NAME" => option_env!("COMPANY_NAME"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "MOUNT_ID" => option_env!("MOUNT_ID"),
            "NOT_FOUND" => option_env!("NOT_FOUND"),
            "FOOTER_YEAR" => option_env!("FOOTER_YEAR"),
            _ => None,
        })
    }

    /// Construir a partir de una función de búsqueda clave -> valor
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };

        Self {
            site_title: text("SITE_TITLE", defaults.site_title),
            site_description: text("SITE_DESCRIPTION", defaults.site_description),
            company_name: text("COMPANY_NAME", defaults.company_name),
            environment: text("ENVIRONMENT", defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            mount_id: text("MOUNT_ID", defaults.mount_id),
            not_found: lookup("NOT_FOUND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.not_found),
            footer_year: lookup("FOOTER_YEAR")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.footer_year),
        }
    }

    /// Nivel de log según ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lookup_gives_defaults() {
        assert_eq!(SiteConfig::from_lookup(|_| None), SiteConfig::default());
    }

    #[test]
    fn reads_values_and_ignores_bad_ones() {
        let config = SiteConfig::from_lookup(|key| match key {
            "SITE_TITLE" => Some("  Juxing  "),
            "ENABLE_LOGGING" => Some("false"),
            "NOT_FOUND" => Some("HOME"),
            "FOOTER_YEAR" => Some("dos mil"),
            "MOUNT_ID" => Some(""),
            "ENVIRONMENT" => Some("production"),
            _ => None,
        });

        assert_eq!(config.site_title, "Juxing");
        assert!(!config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.not_found, NotFoundPolicy::Home);
        assert_eq!(config.footer_year, 2025);
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!("redirect".parse::<NotFoundPolicy>().is_err());
        assert_eq!(" keep ".parse::<NotFoundPolicy>(), Ok(NotFoundPolicy::Keep));
    }

    #[test]
    fn show_policy_shows_panel_for_missing_path() {
        assert_eq!(
            NotFoundPolicy::Show.on_not_found("/missing", true),
            NotFoundAction::ShowPanel("/missing".into())
        );
        assert_eq!(
            NotFoundPolicy::Show.on_not_found("/missing", false),
            NotFoundAction::ShowPanel("/missing".into())
        );
    }

    #[test]
    fn home_policy_redirects_home() {
        for has_view in [true, false] {
            assert_eq!(
                NotFoundPolicy::Home.on_not_found("/missing", has_view),
                NotFoundAction::Redirect(RouteName::Home)
            );
        }
    }

    #[test]
    fn keep_policy_keeps_active_view() {
        assert_eq!(
            NotFoundPolicy::Keep.on_not_found("/missing", true),
            NotFoundAction::KeepCurrent
        );
    }

    #[test]
    fn keep_policy_without_view_falls_back_to_panel() {
        assert_eq!(
            NotFoundPolicy::Keep.on_not_found("/missing", false),
            NotFoundAction::ShowPanel("/missing".into())
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let json = serde_json::to_string(&SiteConfig::default()).unwrap();
        assert!(json.contains("\"not_found\":\"show\""));
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SiteConfig::default());
    }
}
