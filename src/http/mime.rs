//! # Detección de Content-Type
//! src/http/mime.rs
//!
//! Tabla fija extensión → MIME. La búsqueda es sensible a mayúsculas:
//! `index.HTML` no es `text/html`.

/// Content-Type para extensiones desconocidas o archivos sin extensión
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Tabla ordenada de extensiones soportadas
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html;charset=utf-8"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("ico", "image/x-icon"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("svg", "image/svg+xml"),
];

/// Extrae la extensión de un nombre de archivo (lo que sigue al último `.`)
///
/// Un nombre cuyo único punto es el primer carácter (`.htaccess`) no tiene
/// extensión.
///
/// # Ejemplo
/// ```
/// use webserver::http::mime::extension_of;
/// assert_eq!(extension_of("app.min.js"), Some("js"));
/// assert_eq!(extension_of("README"), None);
/// ```
pub fn extension_of(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => Some(&file_name[pos + 1..]),
        _ => None,
    }
}

/// Busca el Content-Type de una extensión
pub fn content_type_for_extension(extension: Option<&str>) -> &'static str {
    let Some(extension) = extension else {
        return DEFAULT_CONTENT_TYPE;
    };

    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Infiere el Content-Type a partir del nombre del archivo
///
/// # Ejemplo
/// ```
/// use webserver::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html;charset=utf-8");
/// assert_eq!(content_type_for("data.bin"), "application/octet-stream");
/// ```
pub fn content_type_for(file_name: &str) -> &'static str {
    content_type_for_extension(extension_of(file_name))
}
