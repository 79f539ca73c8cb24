//! # Handler de Registro
//! src/users/handlers.rs
//!
//! `GET /create?username=..&password=..&nickname=..&email=..`

use super::model::User;
use super::store::RecordStore;
use crate::error::HandlerError;
use crate::http::query::parse_query_string;
use crate::http::Response;
use tracing::debug;

/// Body de la respuesta de registro exitoso
pub const REGISTRATION_SUCCESS_BODY: &str = "<h1>Registration Successful</h1>";

/// Content-Type de la respuesta de registro
pub const REGISTRATION_CONTENT_TYPE: &str = "text/html";

/// Extrae la query string (lo que sigue al primer `?`)
pub fn create_query(path: &str) -> Result<&str, HandlerError> {
    path.split_once('?')
        .map(|(_, query)| query)
        .ok_or_else(|| HandlerError::MissingQuery(path.to_string()))
}

/// Crea un usuario desde una query string y lo entrega al store
pub fn register_from_query(query: &str, store: &dyn RecordStore) -> Response {
    let params = parse_query_string(query);
    let user = User::from_params(&params);

    debug!(user_id = %user.user_id, "user created");
    store.add_record(user);

    Response::ok(REGISTRATION_SUCCESS_BODY, REGISTRATION_CONTENT_TYPE)
}

/// Maneja el path completo de creación (con query incluida)
pub fn handle_user_creation(path: &str, store: &dyn RecordStore) -> Result<Response, HandlerError> {
    let query = create_query(path)?;
    Ok(register_from_query(query, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use crate::users::MemoryStore;

    const SAMPLE_PATH: &str = "/create?username=0woogie&password=password&nickname=%EC%98%81%EC%9A%B1&email=aaa111%40naver.com";

    #[test]
    fn test_handle_user_creation() {
        let store = MemoryStore::new();
        let response = handle_user_creation(SAMPLE_PATH, &store).unwrap();

        let user = store.find_record_by_id("0woogie").unwrap();
        assert_eq!(user.user_id, "0woogie");
        assert_eq!(user.password, "password");
        assert_eq!(user.name, "영욱");
        assert_eq!(user.email, "aaa111@naver.com");

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.content_type(), "text/html");
        assert_eq!(response.body(), REGISTRATION_SUCCESS_BODY.as_bytes());

        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.ends_with("Registration Successful</h1>"));
    }

    #[test]
    fn test_missing_query() {
        let store = MemoryStore::new();
        let result = handle_user_creation("/create", &store);

        assert!(matches!(result, Err(HandlerError::MissingQuery(p)) if p == "/create"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_partial_form_still_succeeds() {
        let store = MemoryStore::new();
        let response = handle_user_creation("/create?username=solo&junk", &store).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        let user = store.find_record_by_id("solo").unwrap();
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_create_query() {
        assert_eq!(create_query("/create?a=1?b").unwrap(), "a=1?b");
        assert_eq!(create_query("/create?").unwrap(), "");
    }
}
