use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_STORE_FILE: &str = "items.bin";

const STORE_FILE_KEY: &str = "STORE_FILE";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut store_file = String::from(DEFAULT_STORE_FILE);
        if let Ok(path) = env::var(STORE_FILE_KEY) {
            store_file = path;
        }

        let mut map = HashMap::new();
        map.insert(String::from(STORE_FILE_KEY), store_file);

        Config {
            inner: RwLock::new(map),
        }
    }

    pub fn get_store_file(&self) -> String {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(STORE_FILE_KEY)
            .expect("Store file path should always be present in config")
            .clone()
    }

    pub fn set_store_file(&self, path: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(STORE_FILE_KEY), path);
    }
}
