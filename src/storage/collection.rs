//! JSON-file-backed collection store.
//!
//! One file per collection, holding the whole collection as a JSON array,
//! the same layout as the legacy local-storage keys. The in-memory
//! snapshot is authoritative; every mutation rewrites the file so a reload
//! observes exactly what the last mutation produced.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::Entity;

struct CollectionInner<T> {
    path: PathBuf,
    key: String,
    items: RwLock<Vec<T>>,
}

/// A mutex-guarded collection with atomic read-modify-write operations
pub struct JsonCollection<T> {
    inner: Arc<CollectionInner<T>>,
}

impl<T> Clone for JsonCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> JsonCollection<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    /// Open the collection stored under `<dir>/<key>.json`, seeding the file
    /// with `seed` on first run.
    pub fn open(dir: &Path, key: &str, seed: Vec<T>) -> AppResult<Self> {
        let path = dir.join(format!("{}.json", key));
        let items = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            persist(&path, &seed)?;
            tracing::debug!(key, count = seed.len(), "seeded collection");
            seed
        };

        Ok(Self {
            inner: Arc::new(CollectionInner {
                path,
                key: key.to_string(),
                items: RwLock::new(items),
            }),
        })
    }

    /// Snapshot of the whole collection, order preserved
    pub fn list(&self) -> AppResult<Vec<T>> {
        self.read(|items| items.to_vec())
    }

    /// Run a closure against the current snapshot under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> AppResult<R> {
        let guard = self
            .inner
            .items
            .read()
            .map_err(|_| poisoned(&self.inner.key))?;
        Ok(f(&guard))
    }

    pub fn get(&self, id: &str) -> AppResult<Option<T>> {
        self.read(|items| items.iter().find(|i| i.id() == id).cloned())
    }

    pub fn insert(&self, item: T) -> AppResult<T> {
        self.with_mut(|items| {
            items.push(item.clone());
            Ok(item)
        })
    }

    /// Replace the item with the given id, keeping its position
    pub fn replace(&self, id: &str, item: T) -> AppResult<T> {
        self.with_mut(|items| {
            let slot = items
                .iter_mut()
                .find(|i| i.id() == id)
                .ok_or_else(|| AppError::NotFound(format!("No record with id {}", id)))?;
            *slot = item.clone();
            Ok(item)
        })
    }

    /// Remove and return the item with the given id
    pub fn remove(&self, id: &str) -> AppResult<T> {
        self.with_mut(|items| {
            let pos = items
                .iter()
                .position(|i| i.id() == id)
                .ok_or_else(|| AppError::NotFound(format!("No record with id {}", id)))?;
            Ok(items.remove(pos))
        })
    }

    /// Atomically mutate the item with the given id and return the updated copy
    pub fn update(&self, id: &str, f: impl FnOnce(&mut T) -> AppResult<()>) -> AppResult<T> {
        self.with_mut(|items| {
            let item = items
                .iter_mut()
                .find(|i| i.id() == id)
                .ok_or_else(|| AppError::NotFound(format!("No record with id {}", id)))?;
            f(item)?;
            Ok(item.clone())
        })
    }

    /// Atomic read-modify-write over the whole collection.
    ///
    /// The closure operates on a working copy; the snapshot and the file are
    /// only swapped in when it succeeds, so a failed operation leaves no
    /// partial effect.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Vec<T>) -> AppResult<R>) -> AppResult<R> {
        let mut guard = self
            .inner
            .items
            .write()
            .map_err(|_| poisoned(&self.inner.key))?;
        let mut working = guard.clone();
        let result = f(&mut working)?;
        persist(&self.inner.path, &working)?;
        *guard = working;
        Ok(result)
    }
}

fn persist<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    let raw = serde_json::to_string_pretty(items)?;
    fs::write(path, raw)?;
    Ok(())
}

fn poisoned(key: &str) -> AppError {
    AppError::Storage(format!("collection '{}' lock poisoned", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Thing {
        id: String,
        label: String,
    }

    impl Entity for Thing {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn thing(id: &str, label: &str) -> Thing {
        Thing {
            id: id.into(),
            label: label.into(),
        }
    }

    #[test]
    fn roundtrip_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let seed = vec![thing("2", "second"), thing("1", "first")];
        let col = JsonCollection::open(dir.path(), "things", seed.clone()).unwrap();
        col.insert(thing("3", "third")).unwrap();

        let reopened = JsonCollection::<Thing>::open(dir.path(), "things", Vec::new()).unwrap();
        let mut expected = seed;
        expected.push(thing("3", "third"));
        assert_eq!(reopened.list().unwrap(), expected);
    }

    #[test]
    fn failed_mutation_leaves_no_partial_effect() {
        let dir = tempfile::tempdir().unwrap();
        let col = JsonCollection::open(dir.path(), "things", vec![thing("1", "first")]).unwrap();

        let result: AppResult<()> = col.with_mut(|items| {
            items.clear();
            Err(AppError::BusinessRule("abort".into()))
        });
        assert!(result.is_err());
        assert_eq!(col.list().unwrap(), vec![thing("1", "first")]);

        let reopened = JsonCollection::<Thing>::open(dir.path(), "things", Vec::new()).unwrap();
        assert_eq!(reopened.list().unwrap(), vec![thing("1", "first")]);
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let col: JsonCollection<Thing> =
            JsonCollection::open(dir.path(), "things", Vec::new()).unwrap();
        assert!(matches!(col.remove("nope"), Err(AppError::NotFound(_))));
    }
}
