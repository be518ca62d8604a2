//! Local filesystem sink using std::fs.

use std::io;
use std::path::Path;

use mvigen_core::{application::ports::FileSink, error::MvigenResult};

/// Production file sink implementation using `std::fs`.
///
/// Creates the target directory (and parents) before writing and
/// overwrites an existing file with the same name.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileSink;

impl LocalFileSink {
    /// Create a new local file sink.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSink for LocalFileSink {
    fn write(&self, directory: &Path, file_name: &str, content: &str) -> MvigenResult<()> {
        std::fs::create_dir_all(directory)
            .map_err(|e| map_io_error(directory, e, "create directory"))?;
        let path = directory.join(file_name);
        std::fs::write(&path, content).map_err(|e| map_io_error(&path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mvigen_core::error::MvigenError {
    use mvigen_core::application::ApplicationError;

    ApplicationError::SinkWrite {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
