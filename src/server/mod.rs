//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! - `tcp`: listener y loop de accept (un thread por conexión)
//! - `connection`: ciclo de vida de una conexión individual

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::ConnectionHandler;
pub use tcp::Server;
