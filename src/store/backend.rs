use std::collections::HashMap;

use crate::error::StoreResult;

/// A string slot store addressed by key
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the whole value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Store kept in memory for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill a slot, useful to simulate data left by an earlier session
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::KeyValueStore;
    use crate::error::StoreResult;

    /// One JSON file per key inside a directory
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// Store in the platform data directory eframe uses for `app_id`
        pub fn for_app(app_id: &str) -> Option<Self> {
            eframe::storage_dir(app_id).map(Self::new)
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn slot_path(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl KeyValueStore for FileStore {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            match fs::read_to_string(self.slot_path(key)) {
                Ok(value) => Ok(Some(value)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
            fs::create_dir_all(&self.dir)?;

            // Readers only ever see the old or the new file
            let path = self.slot_path(key);
            let tmp = self.dir.join(format!("{key}.json.tmp"));
            fs::write(&tmp, value)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::KeyValueStore;
    use crate::error::{StoreError, StoreResult};

    /// Browser `localStorage`
    pub struct LocalStorageStore {
        storage: web_sys::Storage,
    }

    impl LocalStorageStore {
        pub fn new() -> StoreResult<Self> {
            let storage = web_sys::window()
                .ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?
                .local_storage()
                .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
                .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorageStore {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            self.storage
                .get_item(key)
                .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
        }

        fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
        }
    }
}
