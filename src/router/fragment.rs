// ============================================================================
// FRAGMENT - Direccionamiento por hash: `<origin>/#/<path>`
// ============================================================================

/// Extraer el path de un fragmento (`location.hash`).
///
/// `""`, `"#"` y `"#/"` son la raíz. La query (`?…`) se descarta.
/// No se normalizan barras finales ni mayúsculas.
pub fn parse_fragment(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let raw = raw.split('?').next().unwrap_or_default();

    if raw.is_empty() {
        return "/".to_string();
    }
    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{}", raw)
    }
}

/// Fragmento para un path de la tabla
pub fn format_fragment(path: &str) -> String {
    format!("#{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragments_are_root() {
        assert_eq!(parse_fragment(""), "/");
        assert_eq!(parse_fragment("#"), "/");
        assert_eq!(parse_fragment("#/"), "/");
    }

    #[test]
    fn strips_query() {
        assert_eq!(parse_fragment("#/ia?from=nav"), "/ia");
        assert_eq!(parse_fragment("#?x=1"), "/");
    }

    #[test]
    fn adds_missing_leading_slash() {
        assert_eq!(parse_fragment("#ia"), "/ia");
    }

    #[test]
    fn keeps_trailing_slash_and_case() {
        assert_eq!(parse_fragment("#/ia/"), "/ia/");
        assert_eq!(parse_fragment("#/IA"), "/IA");
    }

    #[test]
    fn format_then_parse_returns_path() {
        for path in ["/", "/intellectual", "/ia", "/zyzk001"] {
            assert_eq!(parse_fragment(&format_fragment(path)), path);
        }
    }
}
