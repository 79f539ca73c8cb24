//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. El error de una conexión se registra en su
//! propio thread y nunca detiene el loop de accept.

use super::connection::ConnectionHandler;
use crate::config::Config;
use crate::error::HandlerError;
use crate::http::StatusCode;
use crate::router::StaticFileResolver;
use crate::users::{JsonFileStore, MemoryStore, RecordStore};
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info, warn};

/// Servidor HTTP con su handler compartido
pub struct Server {
    config: Config,
    handler: Arc<ConnectionHandler>,
}

impl Server {
    /// Crea el servidor eligiendo el store según la configuración
    pub fn new(config: Config) -> io::Result<Self> {
        let store: Arc<dyn RecordStore> = match &config.records_file {
            Some(path) => Arc::new(JsonFileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };

        Ok(Self::with_store(config, store))
    }

    /// Crea el servidor con un store provisto por el llamador
    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let resolver = StaticFileResolver::new(config.static_dir.clone());
        let handler = ConnectionHandler::new(resolver, store);

        Self {
            config,
            handler: Arc::new(handler),
        }
    }

    pub fn handler(&self) -> &Arc<ConnectionHandler> {
        &self.handler
    }

    /// Abre el listener en la dirección configurada
    pub fn bind(&self) -> io::Result<TcpListener> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        info!(address = %address, "server listening");
        Ok(listener)
    }

    /// Bind + loop de accept (bloquea el thread actual)
    pub fn run(&self) -> io::Result<()> {
        let listener = self.bind()?;
        self.serve(listener)
    }

    /// Acepta conexiones del listener dado, un thread por conexión
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let handler = Arc::clone(&self.handler);
                    let peer = stream.peer_addr().ok();
                    debug!(peer = ?peer, "new connection");

                    thread::spawn(move || {
                        log_outcome(peer, handle_connection(stream, &handler));
                    });
                }
                Err(e) => {
                    error!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }
}

/// Procesa una conexión TCP; el socket se cierra al retornar
pub fn handle_connection(stream: TcpStream, handler: &ConnectionHandler) -> Result<StatusCode, HandlerError> {
    let reader = stream.try_clone()?;
    handler.handle(reader, stream)
}

fn log_outcome(peer: Option<SocketAddr>, outcome: Result<StatusCode, HandlerError>) {
    match outcome {
        Ok(status) => debug!(peer = ?peer, status = status.as_u16(), "connection closed"),
        Err(HandlerError::EmptyRequest) => debug!(peer = ?peer, "connection closed without request"),
        Err(e @ (HandlerError::MalformedRequest(_) | HandlerError::MissingQuery(_))) => {
            warn!(peer = ?peer, error = %e, "request aborted")
        }
        Err(e @ HandlerError::Io(_)) => error!(peer = ?peer, error = %e, "connection failed"),
    }
}
