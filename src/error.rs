//! # Errores del manejo de conexiones
//! src/error.rs

use std::io;
use thiserror::Error;

/// Errores que puede producir el manejo de una conexión
#[derive(Debug, Error)]
pub enum HandlerError {
    /// El stream terminó (o llegó una línea vacía) antes de la request line
    #[error("empty request")]
    EmptyRequest,

    /// Request line sin método o sin path válido
    #[error("malformed request line: {0:?}")]
    MalformedRequest(String),

    /// Ruta `/create` sin `?`
    #[error("create request without query string: {0}")]
    MissingQuery(String),

    /// Fallo de lectura/escritura en el stream o en el filesystem
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
