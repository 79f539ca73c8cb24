//! # Manejo de una Conexión
//! src/server/connection.rs
//!
//! Ciclo de vida de una conexión:
//!
//! ```text
//! leer hasta línea vacía → request line → Route → (archivo | registro) → response → cerrar
//! ```
//!
//! El handler toma ownership del lado de lectura y del de escritura, así
//! ambos se liberan en cualquier salida, incluso ante errores de parsing.

use crate::error::HandlerError;
use crate::http::{Request, Response, StatusCode};
use crate::router::{Route, StaticFileResolver};
use crate::users::handlers::register_from_query;
use crate::users::RecordStore;
use std::io::{BufReader, Read, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// Body de la página 404
pub const NOT_FOUND_BODY: &str = "<h1>File Not Found</h1>";

/// Orquestador de requests, compartido entre threads vía `Arc`
pub struct ConnectionHandler {
    static_files: StaticFileResolver,
    store: Arc<dyn RecordStore>,
}

impl ConnectionHandler {
    pub fn new(static_files: StaticFileResolver, store: Arc<dyn RecordStore>) -> Self {
        Self { static_files, store }
    }

    pub fn static_files(&self) -> &StaticFileResolver {
        &self.static_files
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Procesa una conexión completa y escribe exactamente una respuesta
    ///
    /// Si la request line no se puede parsear no se escribe nada y se
    /// retorna el error.
    pub fn handle<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<StatusCode, HandlerError> {
        let request = Request::read_from(BufReader::new(input))?;
        debug!(
            method = request.method(),
            path = request.path(),
            headers = ?request.headers(),
            "request received"
        );

        let response = self.dispatch(request.path());
        response.write_to(&mut output)?;

        info!(
            method = request.method(),
            path = request.path(),
            status = response.status().as_u16(),
            bytes = response.content_length(),
            "response sent"
        );

        Ok(response.status())
    }

    /// Construye la respuesta para un path (sin tocar el stream)
    pub fn dispatch(&self, path: &str) -> Response {
        match Route::from_path(path) {
            Route::StaticAsset(file_path) => self.serve_static(&file_path),
            Route::CreateRecord(query) => register_from_query(&query, self.store.as_ref()),
            Route::NotFound => Response::not_found(NOT_FOUND_BODY),
        }
    }

    fn serve_static(&self, path: &str) -> Response {
        match self.static_files.resolve(path) {
            Some(asset) => {
                let content_type = asset.content_type();
                Response::ok(asset.into_content(), content_type)
            }
            None => Response::not_found(NOT_FOUND_BODY),
        }
    }
}
