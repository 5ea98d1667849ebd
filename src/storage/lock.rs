//! Advisory lock shared by every process writing to one logs directory.
//!
//! The remote sensor handler and the camera loop run as separate
//! `catdoor` invocations, so an in-process mutex alone cannot keep them
//! from both logging the same transition. The lock file lives next to the
//! partitions and is held for the whole read/decide/append/aggregate step.

use crate::errors::AppResult;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

pub const LOCK_FILE: &str = ".catdoor.lock";

#[derive(Debug, Clone)]
pub struct DirLock {
    path: PathBuf,
}

impl DirLock {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(LOCK_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the lock is ours. Released when the guard is dropped.
    pub fn acquire(&self) -> AppResult<DirLockGuard> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        file.lock()?;

        Ok(DirLockGuard { file })
    }
}

#[derive(Debug)]
pub struct DirLockGuard {
    file: File,
}

impl Drop for DirLockGuard {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            log::warn!("failed to release store lock: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_handle_waits_for_the_first() {
        let tmp = tempfile::tempdir().unwrap();
        let lock = DirLock::in_dir(&tmp.path().join("logs"));

        let guard = lock.acquire().unwrap();
        assert!(lock.path().is_file());

        let other = File::open(lock.path()).unwrap();
        assert!(other.try_lock().is_err());

        drop(guard);
        assert!(other.try_lock().is_ok());
    }
}
