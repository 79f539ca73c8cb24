//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Solo se interpreta la request line; el resto de los headers se lee
//! hasta la línea vacía y se guarda tal cual.
//!
//! ## Formato aceptado
//!
//! ```text
//! GET /create?username=ana HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! ```
//!
//! La versión HTTP es opcional: `GET /` basta.

use crate::error::HandlerError;
use std::io::BufRead;

/// Request HTTP parseado (inmutable una vez construido)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método tal como llegó (ej: "GET")
    method: String,

    /// Path con query incluida (ej: "/create?username=ana")
    path: String,

    /// Líneas de headers después de la request line, sin `\r\n`
    headers: Vec<String>,
}

impl Request {
    /// Lee un request desde el stream hasta la línea vacía o EOF
    ///
    /// # Ejemplo
    /// ```
    /// use webserver::http::Request;
    ///
    /// let raw: &[u8] = b"GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n";
    /// let request = Request::read_from(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/index.html");
    /// assert_eq!(request.headers(), ["Host: x"]);
    /// ```
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, HandlerError> {
        let mut lines = read_header_block(reader)?.into_iter();

        let request_line = lines.next().ok_or(HandlerError::EmptyRequest)?;
        let (method, path) = parse_request_line(&request_line)?;

        Ok(Self {
            method: method.to_string(),
            path: path.to_string(),
            headers: lines.collect(),
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

/// Lee líneas hasta una línea vacía o el fin del stream
///
/// Acepta `\n` o `\r\n` como terminador; bytes no UTF-8 se reemplazan.
pub fn read_header_block<R: BufRead>(mut reader: R) -> Result<Vec<String>, HandlerError> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(lines)
}

/// Extrae método y path de la request line
///
/// Se separa por espacios simples: dos espacios seguidos producen un token
/// vacío y la línea se rechaza.
pub fn parse_request_line(line: &str) -> Result<(&str, &str), HandlerError> {
    let malformed = || HandlerError::MalformedRequest(line.to_string());

    let mut tokens = line.split(' ');
    let method = tokens.next().filter(|m| !m.is_empty()).ok_or_else(malformed)?;
    let path = tokens.next().ok_or_else(malformed)?;

    if !path.starts_with('/') {
        return Err(malformed());
    }

    Ok((method, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw: &[u8] = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::read_from(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/");
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_version_is_optional() {
        let raw: &[u8] = b"GET /css/styles.css\r\n\r\n";
        let request = Request::read_from(raw).unwrap();
        assert_eq!(request.path(), "/css/styles.css");
    }

    #[test]
    fn test_path_keeps_query() {
        let raw: &[u8] = b"GET /create?username=a&password=b HTTP/1.1\r\n\r\n";
        let request = Request::read_from(raw).unwrap();
        assert_eq!(request.path(), "/create?username=a&password=b");
    }

    #[test]
    fn test_headers_are_kept_in_order() {
        let raw: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nAccept: */*\r\n\r\nignored body";
        let request = Request::read_from(raw).unwrap();

        assert_eq!(request.headers(), ["Host: localhost:8080", "Accept: */*"]);
    }

    #[test]
    fn test_bare_newlines_and_eof_without_blank_line() {
        let raw: &[u8] = b"GET /a.js HTTP/1.0\nHost: x";
        let request = Request::read_from(raw).unwrap();

        assert_eq!(request.path(), "/a.js");
        assert_eq!(request.headers(), ["Host: x"]);
    }

    #[test]
    fn test_empty_request() {
        let raw: &[u8] = b"";
        assert!(matches!(Request::read_from(raw), Err(HandlerError::EmptyRequest)));

        let raw: &[u8] = b"\r\nGET / HTTP/1.1\r\n\r\n";
        assert!(matches!(Request::read_from(raw), Err(HandlerError::EmptyRequest)));
    }

    #[test]
    fn test_single_token_is_malformed() {
        let raw: &[u8] = b"GET\r\n\r\n";
        assert!(matches!(
            Request::read_from(raw),
            Err(HandlerError::MalformedRequest(line)) if line == "GET"
        ));
    }

    #[test]
    fn test_parse_request_line_failures() {
        assert!(parse_request_line("GET  /").is_err());
        assert!(parse_request_line(" /").is_err());
        assert!(parse_request_line("GET index.html").is_err());
        assert!(parse_request_line("GET ").is_err());
    }

    #[test]
    fn test_parse_request_line_ignores_extra_tokens() {
        let (method, path) = parse_request_line("POST /create?x=1 HTTP/1.1 extra").unwrap();
        assert_eq!(method, "POST");
        assert_eq!(path, "/create?x=1");
    }

    #[test]
    fn test_non_utf8_bytes_are_replaced() {
        let raw: &[u8] = b"GET /caf\xE9.html HTTP/1.1\r\n\r\n";
        let request = Request::read_from(raw).unwrap();
        assert_eq!(request.path(), "/caf\u{FFFD}.html");
    }
}
