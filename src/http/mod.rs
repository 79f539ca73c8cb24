//! # Módulo HTTP
//!
//! Protocolo implementado a mano, sin librerías de alto nivel:
//!
//! - Lectura de la request line y del bloque de headers
//! - Decodificación de query strings
//! - Inferencia de Content-Type por extensión
//! - Serialización de responses con `Content-Length` calculado
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html;charset=utf-8\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <h1>Hola</h1>
//! ```

pub mod mime;      // Tabla extensión → Content-Type
pub mod query;     // Decodificación de query strings
pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de responses
pub mod status;    // Códigos de estado

// Re-exportamos los tipos principales para facilitar su uso
pub use query::QueryParams;
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
