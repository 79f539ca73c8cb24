//! # Decodificación de Query Strings
//! src/http/query.rs
//!
//! Convierte `username=0woogie&nickname=%EC%98%81%EC%9A%B1` en un mapa
//! ordenado clave → valor.
//!
//! ## Reglas
//!
//! 1. Se separa por `&` para obtener cada par
//! 2. Cada par se separa en el **primer** `=` (el valor puede contener `=`)
//! 3. Clave y valor se decodifican con percent-decoding UTF-8; `+` es espacio
//! 4. Un par sin `=` es inválido y se descarta sin abortar el resto
//! 5. Si una clave se repite, gana la última ocurrencia

use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

/// Errores al decodificar un par individual
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// El fragmento no contiene `=`
    #[error("malformed query pair: {0:?}")]
    MalformedPair(String),
}

/// Mapa ordenado de parámetros decodificados
///
/// El orden es el de la primera aparición de cada clave.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta un par; si la clave ya existe se reemplaza su valor
    pub fn insert(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Obtiene el valor de una clave
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Itera los pares en orden
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decodifica un componente (`%XX` y `+`)
///
/// Secuencias UTF-8 inválidas se reemplazan por U+FFFD; escapes `%`
/// mal formados se conservan literalmente.
///
/// # Ejemplo
/// ```
/// use webserver::http::query::decode_component;
/// assert_eq!(decode_component("aaa111%40naver.com"), "aaa111@naver.com");
/// assert_eq!(decode_component("hello+world"), "hello world");
/// ```
pub fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Decodifica un único par `clave=valor`
pub fn parse_pair(pair: &str) -> Result<(String, String), QueryError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| QueryError::MalformedPair(pair.to_string()))?;

    Ok((decode_component(key), decode_component(value)))
}

/// Decodifica una query string completa (lo que sigue al `?`)
///
/// # Ejemplo
/// ```
/// use webserver::http::query::parse_query_string;
///
/// let params = parse_query_string("a&b=c");
/// assert_eq!(params.get("b"), Some("c"));
/// assert_eq!(params.get("a"), None);
/// ```
pub fn parse_query_string(query: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for pair in query.split('&') {
        match parse_pair(pair) {
            Ok((key, value)) => params.insert(key, value),
            Err(e) => debug!(error = %e, "skipping query pair"),
        }
    }

    params
}
