//! Input cache for storing puzzle inputs locally

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache for puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`, each file holding the
/// raw input verbatim.
#[derive(Debug, Clone)]
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    /// Create a cache rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if input is cached
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.cache_path(year, day).exists()
    }

    /// Get cached input or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.cache_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Store input in cache
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), InputError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            InputError::CacheDir(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        fs::write(self.cache_path(year, day), input)?;
        Ok(())
    }
}
