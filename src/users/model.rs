//! # Modelo de Usuario
//! src/users/model.rs

use crate::http::QueryParams;
use serde::{Deserialize, Serialize};

/// Nombres fijos de los campos del formulario de registro
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_NICKNAME: &str = "nickname";
pub const FIELD_EMAIL: &str = "email";

/// Registro creado desde el formulario de `/registration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identificador (campo `username`)
    pub user_id: String,

    /// Contraseña tal como se envió
    pub password: String,

    /// Nombre visible (campo `nickname`)
    pub name: String,

    /// Correo de contacto
    pub email: String,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Construye un usuario desde parámetros decodificados
    ///
    /// Una clave ausente produce un campo vacío.
    pub fn from_params(params: &QueryParams) -> Self {
        let field = |name: &str| params.get(name).unwrap_or_default().to_string();

        Self {
            user_id: field(FIELD_USERNAME),
            password: field(FIELD_PASSWORD),
            name: field(FIELD_NICKNAME),
            email: field(FIELD_EMAIL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::query::parse_query_string;

    #[test]
    fn test_from_params() {
        let params = parse_query_string("username=ana&password=pw&nickname=Ana+B&email=a%40b.c");
        let user = User::from_params(&params);

        assert_eq!(user, User::new("ana", "pw", "Ana B", "a@b.c"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let params = parse_query_string("username=ana");
        let user = User::from_params(&params);

        assert_eq!(user.user_id, "ana");
        assert_eq!(user.password, "");
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_json_shape() {
        let user = User::new("ana", "pw", "영욱", "a@b.c");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["user_id"], "ana");
        assert_eq!(json["name"], "영욱");

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }
}
