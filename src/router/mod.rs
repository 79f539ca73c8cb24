//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Decide qué hacer con un path:
//!
//! ```text
//! path → alias → /create* ? CreateRecord : StaticAsset
//! ```
//!
//! Solo existen dos alias fijos (`/` y `/registration`); no hay lógica
//! general de índices de directorio.

pub mod static_files;

pub use static_files::{StaticAsset, StaticFileResolver};

use crate::users::handlers::create_query;
use tracing::warn;

/// Prefijo que activa la creación de registros
pub const CREATE_PREFIX: &str = "/create";

/// Decisión de routing derivada del path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Servir un archivo estático (path sin query)
    StaticAsset(String),

    /// Crear un registro con la query string dada
    CreateRecord(String),

    /// Sin destino posible (por ejemplo `/create` sin query)
    NotFound,
}

impl Route {
    /// Calcula la ruta para un path de request
    ///
    /// # Ejemplo
    /// ```
    /// use webserver::router::Route;
    ///
    /// assert_eq!(Route::from_path("/"), Route::StaticAsset("/index.html".into()));
    /// assert_eq!(
    ///     Route::from_path("/create?username=ana"),
    ///     Route::CreateRecord("username=ana".into())
    /// );
    /// assert_eq!(Route::from_path("/create"), Route::NotFound);
    /// ```
    pub fn from_path(path: &str) -> Self {
        let path = alias_path(path);

        if path.starts_with(CREATE_PREFIX) {
            return match create_query(path) {
                Ok(query) => Route::CreateRecord(query.to_string()),
                Err(e) => {
                    warn!(error = %e, "rejecting create request");
                    Route::NotFound
                }
            };
        }

        let file_path = path.split_once('?').map_or(path, |(p, _)| p);
        Route::StaticAsset(file_path.to_string())
    }
}

/// Aplica los alias fijos de path
pub fn alias_path(path: &str) -> &str {
    match path {
        "/" => "/index.html",
        "/registration" => "/registration/index.html",
        other => other,
    }
}
