//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Serializa una respuesta con el formato fijo:
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 32\r\n
//! \r\n
//! <h1>Registration Successful</h1>
//! ```
//!
//! `Content-Length` siempre se calcula a partir del body; no existe forma
//! de fijarlo a mano.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use webserver::http::response::write_ok;
//!
//! let mut out = Vec::new();
//! write_ok(&mut out, b"hola", "text/plain").unwrap();
//! assert!(out.ends_with(b"Content-Length: 4\r\n\r\nhola"));
//! ```

use super::StatusCode;
use std::io::{self, Write};

/// Content-Type de la página 404
pub const NOT_FOUND_CONTENT_TYPE: &str = "text/html;charset=utf-8";

/// Versión HTTP de la status line
const HTTP_VERSION: &str = "HTTP/1.1";

/// Una respuesta HTTP completa lista para escribirse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado (200 o 404)
    status: StatusCode,

    /// Valor del header `Content-Type`
    content_type: String,

    /// Cuerpo de la respuesta
    body: Vec<u8>,
}

impl Response {
    /// Respuesta 200 OK con el Content-Type indicado
    pub fn ok(body: impl Into<Vec<u8>>, content_type: &str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.to_string(),
            body: body.into(),
        }
    }

    /// Respuesta 404 Not Found (siempre HTML)
    pub fn not_found(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: NOT_FOUND_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }

    /// Largo del body en bytes (valor de `Content-Length`)
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Orden: status line, `Content-Type`, `Content-Length`, línea vacía, body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "{} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            HTTP_VERSION,
            self.status,
            self.content_type,
            self.content_length()
        );

        let mut result = Vec::with_capacity(head.len() + self.body.len());
        result.extend_from_slice(head.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    /// Escribe la respuesta completa y hace flush del sink
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.to_bytes())?;
        sink.flush()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Escribe un `200 OK` con el body y Content-Type dados
pub fn write_ok<W: Write + ?Sized>(sink: &mut W, body: &[u8], content_type: &str) -> io::Result<()> {
    Response::ok(body, content_type).write_to(sink)
}

/// Escribe un `404 Not Found` con el body dado
pub fn write_not_found<W: Write + ?Sized>(sink: &mut W, body: &[u8]) -> io::Result<()> {
    Response::not_found(body).write_to(sink)
}
