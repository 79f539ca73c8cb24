//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./webserver --port 8080 --static-dir ./static --records-file ./data/users.json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 STATIC_DIR=./public RUST_LOG=webserver=debug ./webserver
//! ```

use clap::Parser;
use thiserror::Error;
use tracing::info;

/// Errores de validación de la configuración
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("port must be >= 1")]
    InvalidPort,

    #[error("host must not be empty")]
    EmptyHost,

    #[error("static dir must not be empty")]
    EmptyStaticDir,
}

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "webserver")]
#[command(about = "Servidor HTTP/1.x mínimo: archivos estáticos y registro de usuarios")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz de los archivos estáticos
    #[arg(long = "static-dir", default_value = "./static", env = "STATIC_DIR")]
    pub static_dir: String,

    /// Archivo JSON donde persistir usuarios (en memoria si se omite)
    #[arg(long = "records-file", env = "RECORDS_FILE")]
    pub records_file: Option<String>,

    /// Nivel de log cuando `RUST_LOG` no está definido
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use webserver::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filtro de tracing por defecto para este crate
    pub fn default_log_filter(&self) -> String {
        format!("webserver={}", self.log_level)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.static_dir.is_empty() {
            return Err(ConfigError::EmptyStaticDir);
        }

        Ok(())
    }

    /// Registra un resumen de la configuración efectiva
    pub fn print_summary(&self) {
        info!(
            address = %self.address(),
            static_dir = %self.static_dir,
            records = self.records_file.as_deref().unwrap_or("<memory>"),
            "configuration loaded"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto (igual a los defaults del CLI)
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            static_dir: "./static".to_string(),
            records_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.static_dir, "./static");
        assert!(config.records_file.is_none());
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let mut config = Config::default();
        config.port = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPort));
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.host = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyHost));
    }

    #[test]
    fn test_validate_empty_static_dir() {
        let mut config = Config::default();
        config.static_dir = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyStaticDir));
    }

    #[test]
    fn test_parse_cli_args() {
        let config = Config::try_parse_from([
            "webserver",
            "--port",
            "9000",
            "--static-dir",
            "/srv/www",
            "--records-file",
            "/tmp/users.json",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.static_dir, "/srv/www");
        assert_eq!(config.records_file.as_deref(), Some("/tmp/users.json"));
    }

    #[test]
    fn test_default_log_filter() {
        let mut config = Config::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.default_log_filter(), "webserver=debug");
    }
}
