use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CommonError;

/// Read access to asset bytes behind a path-like identity.
///
/// The editor layer never touches the filesystem directly; everything goes
/// through this trait so tests (and future archive-backed browsing) can
/// substitute an in-memory source.
pub trait FileSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<Vec<u8>, CommonError>;
}

/// Plain filesystem source.
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn load(&self, path: &Path) -> Result<Vec<u8>, CommonError> {
        if !path.is_file() {
            return Err(CommonError::NotFound(path.display().to_string()));
        }
        Ok(fs::read(path)?)
    }
}

/// In-memory source keyed by path string.
#[derive(Default)]
pub struct MemoryFileSource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryFileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(path.into(), bytes);
    }
}

impl FileSource for MemoryFileSource {
    fn load(&self, path: &Path) -> Result<Vec<u8>, CommonError> {
        self.entries
            .get(path.to_string_lossy().as_ref())
            .cloned()
            .ok_or_else(|| CommonError::NotFound(path.display().to_string()))
    }
}
