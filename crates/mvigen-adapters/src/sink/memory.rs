//! In-memory file sink for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use mvigen_core::{
    application::{ApplicationError, ports::FileSink},
    error::MvigenResult,
};

/// In-memory file sink for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSink {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFileSink {
    /// Create a new empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let files = self.files.read().ok()?;
        files.get(path).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let files = self.files.read().unwrap();
        let mut paths: Vec<PathBuf> = files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Clear all contents.
    pub fn clear(&self) {
        self.files.write().unwrap().clear();
    }
}

impl FileSink for MemoryFileSink {
    fn write(&self, directory: &Path, file_name: &str, content: &str) -> MvigenResult<()> {
        let mut files = self.files.write().map_err(|_| ApplicationError::SinkWrite {
            path: directory.join(file_name),
            reason: "sink lock poisoned".into(),
        })?;
        files.insert(directory.join(file_name), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_reads_back() {
        let sink = MemoryFileSink::new();
        sink.write(Path::new("/src/home"), "HomeScreen.kt", "content").unwrap();

        assert_eq!(
            sink.read_file(Path::new("/src/home/HomeScreen.kt")),
            Some("content".to_string())
        );
        assert_eq!(sink.list_files(), vec![PathBuf::from("/src/home/HomeScreen.kt")]);
    }

    #[test]
    fn clones_share_contents() {
        let sink = MemoryFileSink::new();
        let clone = sink.clone();
        sink.write(Path::new("/a"), "B.kt", "x").unwrap();
        assert_eq!(clone.read_file(Path::new("/a/B.kt")), Some("x".to_string()));
    }
}
