//! Saving the item layout to a key-value store.
//!
//! Persistence is best-effort: nothing in here reports failure to the caller. A missing or malformed saved layout is
//! treated the same as one that was never saved.

use {
    std::{
        collections::HashMap,
        fs,
        io,
        path::PathBuf,
    },
    crate::{
        config,
        layout::Layout,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)] Config(#[from] config::Error),
    #[error(transparent)] Io(#[from] io::Error),
    #[error(transparent)] Json(#[from] serde_json::Error),
}

/// The storage the layout is kept in, e.g. a browser's local storage or a directory.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&mut self, key: &str, value: String) -> Result<(), Error>;
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), Error> {
        self.0.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.0.remove(key);
        Ok(())
    }
}

/// Stores each key as a JSON file in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store in the platform's data directory for this app.
    pub fn platform() -> Result<Self, Error> {
        Ok(Self::new(config::dirs()?.data_dir()))
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The saved layout, or `None` if there is none or it isn't a list of lists of strings.
pub fn load_layout(store: &impl KeyValueStore, key: &str) -> Option<Layout> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("failed to read saved layout: {}", e);
            return None
        }
    };
    match serde_json::from_str(&raw) {
        Ok(layout) => Some(layout),
        Err(e) => {
            log::warn!("discarding malformed saved layout: {}", e);
            None
        }
    }
}

pub fn save_layout(store: &mut impl KeyValueStore, key: &str, layout: &Layout) {
    let result = serde_json::to_string(layout).map_err(Error::from).and_then(|raw| store.set(key, raw));
    if let Err(e) = result {
        log::warn!("failed to save layout: {}", e);
    }
}

pub fn clear_layout(store: &mut impl KeyValueStore, key: &str) {
    if let Err(e) = store.remove(key) {
        log::warn!("failed to clear saved layout: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "layout";

    #[test]
    fn never_saved() {
        assert_eq!(load_layout(&MemoryStore::default(), KEY), None);
    }

    #[test]
    fn round_trip() {
        let mut store = MemoryStore::default();
        let layout = Layout(vec![vec![format!("hammer"), format!("blank")], vec![], vec![format!("")]]);
        save_layout(&mut store, KEY, &layout);
        assert_eq!(load_layout(&store, KEY), Some(layout));
        clear_layout(&mut store, KEY);
        assert_eq!(load_layout(&store, KEY), None);
    }

    #[test]
    fn wrong_shapes_are_absent() {
        let mut store = MemoryStore::default();
        for raw in ["", "not json", "{}", "null", r#"["hammer"]"#, "[[1, 2]]", r#"[["a"], "b"]"#, r#"[[null]]"#] {
            store.set(KEY, raw.to_owned()).unwrap();
            assert_eq!(load_layout(&store, KEY), None, "{}", raw);
        }
        store.set(KEY, format!("[]")).unwrap();
        assert_eq!(load_layout(&store, KEY), Some(Layout(Vec::default())));
    }

    #[test]
    fn file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        assert_eq!(load_layout(&store, KEY), None);
        clear_layout(&mut store, KEY);
        save_layout(&mut store, KEY, &Layout::default());
        assert_eq!(load_layout(&store, KEY), Some(Layout::default()));
        clear_layout(&mut store, KEY);
        assert_eq!(load_layout(&store, KEY), None);
    }
}
