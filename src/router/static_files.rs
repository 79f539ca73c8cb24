//! # Archivos Estáticos
//! src/router/static_files.rs
//!
//! Resuelve un path de request a un archivo dentro del directorio base
//! concatenando `<base_dir><path>`. Cada request lee el archivo completo;
//! no hay cache entre requests.
//!
//! El path NO se normaliza: segmentos `..` pueden salir del directorio base.

use crate::http::mime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Archivo encontrado y leído en memoria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAsset {
    /// Ruta en el filesystem
    path: PathBuf,

    /// Contenido completo
    content: Vec<u8>,

    /// Content-Type inferido por extensión
    content_type: &'static str,
}

impl StaticAsset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Consume el asset y retorna sus bytes
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

/// Resolutor de archivos bajo un directorio raíz fijo
#[derive(Debug, Clone)]
pub struct StaticFileResolver {
    base_dir: String,
}

impl StaticFileResolver {
    /// Crea un resolutor con el directorio raíz dado
    ///
    /// # Ejemplo
    /// ```
    /// use webserver::router::StaticFileResolver;
    ///
    /// let resolver = StaticFileResolver::new("./static");
    /// assert_eq!(
    ///     resolver.file_path("/index.html").to_str(),
    ///     Some("./static/index.html")
    /// );
    /// ```
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// Ruta en disco para un path de request (concatenación directa)
    pub fn file_path(&self, request_path: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.base_dir, request_path))
    }

    /// Busca y lee el archivo
    ///
    /// Retorna `None` si no existe, no es un archivo regular o no se pudo
    /// leer.
    pub fn resolve(&self, request_path: &str) -> Option<StaticAsset> {
        let path = self.file_path(request_path);

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                debug!(path = %path.display(), "not a regular file");
                return None;
            }
            Err(_) => {
                debug!(path = %path.display(), "static file not found");
                return None;
            }
        }

        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read static file");
                return None;
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime::content_type_for(&file_name);

        Some(StaticAsset {
            path,
            content,
            content_type,
        })
    }
}
