//! Rendered output values.

use std::path::PathBuf;

/// One rendered file, ready for the sink.
///
/// Pure output value: the core never mutates or re-reads a `GeneratedFile`
/// it produced. Files from one run share no state; their textual
/// cross-references (imports, type names) are consistent because every
/// renderer derives them from the same feature name and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Directory segments relative to the generation base directory.
    pub dir: Vec<String>,
    pub file_name: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new<S: Into<String>>(
        dir: impl IntoIterator<Item = S>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into_iter().map(Into::into).collect(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Relative path of this file under the base directory.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.dir.iter().collect();
        path.push(&self.file_name);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_joins_segments_and_name() {
        let file = GeneratedFile::new(["home", "viewmodel"], "HomeViewModel.kt", "x");
        assert_eq!(
            file.relative_path(),
            PathBuf::from("home/viewmodel/HomeViewModel.kt")
        );
    }

    #[test]
    fn empty_dir_means_base_directory() {
        let file = GeneratedFile::new(Vec::<String>::new(), "HomeScreen.kt", "x");
        assert_eq!(file.relative_path(), PathBuf::from("HomeScreen.kt"));
    }
}
