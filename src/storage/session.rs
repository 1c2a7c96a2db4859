//! Logged-in user session store.
//!
//! Single-object analog of the collections: the `user` key holds either the
//! current user object or `null`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::{AppError, AppResult};
use crate::models::User;

struct SessionInner {
    path: PathBuf,
    current: RwLock<Option<User>>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl SessionStore {
    pub fn open(dir: &Path, key: &str) -> AppResult<Self> {
        let path = dir.join(format!("{}.json", key));
        let current = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            None
        };

        Ok(Self {
            inner: Arc::new(SessionInner {
                path,
                current: RwLock::new(current),
            }),
        })
    }

    pub fn current(&self) -> AppResult<Option<User>> {
        let guard = self.inner.current.read().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    pub fn set(&self, user: User) -> AppResult<()> {
        let mut guard = self.inner.current.write().map_err(|_| poisoned())?;
        let raw = serde_json::to_string_pretty(&Some(&user))?;
        fs::write(&self.inner.path, raw)?;
        *guard = Some(user);
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        let mut guard = self.inner.current.write().map_err(|_| poisoned())?;
        fs::write(&self.inner.path, "null")?;
        *guard = None;
        Ok(())
    }
}

fn poisoned() -> AppError {
    AppError::Storage("session lock poisoned".to_string())
}
