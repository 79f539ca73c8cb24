//! # webserver
//! src/lib.rs
//!
//! Servidor HTTP/1.x mínimo implementado desde cero sobre `std::net`:
//! sirve archivos estáticos y atiende un formulario de registro de usuarios.
//!
//! ## Arquitectura
//!
//! - `http`: request line, query strings, Content-Type y responses
//! - `router`: alias de paths, decisión de ruta y archivos estáticos
//! - `users`: modelo `User`, store de registros y endpoint `/create`
//! - `server`: loop de accept y manejo de cada conexión
//! - `config`: argumentos CLI / variables de entorno
//! - `error`: errores tipados del manejo de conexiones
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use webserver::config::Config;
//! use webserver::server::Server;
//!
//! let server = Server::new(Config::default()).expect("Error al crear servidor");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod router;
pub mod server;
pub mod users;
