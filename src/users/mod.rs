//! # Registro de Usuarios
//!
//! - `model`: el registro [`User`]
//! - `store`: el colaborador de almacenamiento ([`RecordStore`])
//! - `handlers`: el endpoint `/create`

pub mod handlers;
pub mod model;
pub mod store;

pub use model::User;
pub use store::{JsonFileStore, MemoryStore, RecordStore};
