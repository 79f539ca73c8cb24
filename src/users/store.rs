//! # Almacenamiento de Usuarios
//! src/users/store.rs
//!
//! El servidor solo necesita `add_record`; la consulta por id existe para
//! quien use el store desde afuera (y para los tests).
//!
//! Dos implementaciones:
//! - [`MemoryStore`]: mapa en memoria, se pierde al reiniciar
//! - [`JsonFileStore`]: mismo mapa, reflejado en un archivo JSON

use super::model::User;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, warn};

/// Colaborador que guarda los registros creados
pub trait RecordStore: Send + Sync {
    /// Guarda (o reemplaza) un usuario; no reporta errores al llamador
    fn add_record(&self, user: User);

    /// Busca un usuario por su id
    fn find_record_by_id(&self, user_id: &str) -> Option<User>;

    /// Cantidad de usuarios guardados
    fn count(&self) -> usize;
}

/// Bloquea el mapa recuperándolo si otro thread hizo panic con el lock
fn lock_users(users: &Mutex<HashMap<String, User>>) -> MutexGuard<'_, HashMap<String, User>> {
    users.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Store en memoria
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn add_record(&self, user: User) {
        lock_users(&self.users).insert(user.user_id.clone(), user);
    }

    fn find_record_by_id(&self, user_id: &str) -> Option<User> {
        lock_users(&self.users).get(user_id).cloned()
    }

    fn count(&self) -> usize {
        lock_users(&self.users).len()
    }
}

/// Store que persiste cada alta en un archivo JSON
///
/// Carga los usuarios existentes al crearse. Un archivo corrupto se
/// descarta y se empieza vacío.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Ruta al archivo de persistencia
    path: PathBuf,

    /// Cache en memoria
    users: Mutex<HashMap<String, User>>,
}

impl JsonFileStore {
    /// Abre (o crea lógicamente) el store en la ruta dada
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let users = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(path: &Path) -> io::Result<HashMap<String, User>> {
        let reader = BufReader::new(File::open(path)?);

        match serde_json::from_reader(reader) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt records file, starting empty");
                Ok(HashMap::new())
            }
        }
    }

    /// Escribe todos los usuarios (archivo temporal + rename)
    fn save_to_file(&self, users: &HashMap<String, User>) -> io::Result<()> {
        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        let mut writer = BufWriter::new(File::create(&temp_path)?);
        serde_json::to_writer_pretty(&mut writer, users).map_err(io::Error::other)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, &self.path)
    }
}

impl RecordStore for JsonFileStore {
    fn add_record(&self, user: User) {
        let mut users = lock_users(&self.users);
        let user_id = user.user_id.clone();
        users.insert(user_id.clone(), user);

        if let Err(e) = self.save_to_file(&users) {
            error!(path = %self.path.display(), user_id = %user_id, error = %e, "failed to persist records");
        }
    }

    fn find_record_by_id(&self, user_id: &str) -> Option<User> {
        lock_users(&self.users).get(user_id).cloned()
    }

    fn count(&self) -> usize {
        lock_users(&self.users).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn test_memory_add_and_find() {
        let store = MemoryStore::new();
        store.add_record(User::new("ana", "pw", "Ana", "ana@mail.com"));

        let found = store.find_record_by_id("ana").unwrap();
        assert_eq!(found.email, "ana@mail.com");
        assert!(store.find_record_by_id("bob").is_none());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_memory_same_id_replaces() {
        let store = MemoryStore::new();
        store.add_record(User::new("ana", "old", "Ana", "a@a"));
        store.add_record(User::new("ana", "new", "Ana", "a@a"));

        assert_eq!(store.count(), 1);
        assert_eq!(store.find_record_by_id("ana").unwrap().password, "new");
    }

    #[test]
    fn test_memory_concurrent_adds() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.add_record(User::new(format!("user{}", i), "pw", "", ""));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.count(), 8);
    }

    #[test]
    fn test_json_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            assert_eq!(store.count(), 0);
            store.add_record(User::new("0woogie", "password", "영욱", "aaa111@naver.com"));
        }

        assert!(path.exists());
        let reopened = JsonFileStore::open(&path).unwrap();
        let user = reopened.find_record_by_id("0woogie").unwrap();
        assert_eq!(user.name, "영욱");
        assert_eq!(reopened.count(), 1);
    }

    #[test]
    fn test_json_store_no_temp_file_left() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.add_record(User::new("ana", "pw", "Ana", "a@a"));

        assert!(!dir.path().join("users.json.tmp").exists());
    }

    #[test]
    fn test_json_store_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_json_store_save_failure_keeps_memory_copy() {
        let dir = TempDir::new().unwrap();
        // El directorio padre no existe: la escritura falla
        let path = dir.path().join("missing").join("users.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.add_record(User::new("ana", "pw", "Ana", "a@a"));

        assert!(store.find_record_by_id("ana").is_some());
        assert!(!path.exists());
    }
}
