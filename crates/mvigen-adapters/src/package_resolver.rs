//! Package resolution from directory layout.

use std::path::{Component, Path, PathBuf};

use mvigen_core::application::ports::PackageResolver;

/// Resolves packages from the directory path.
///
/// With an explicit source root, the package is the dotted relative path
/// from that root. Without one, the path is scanned for the conventional
/// `kotlin` or `java` source-set marker and everything after the last
/// marker becomes the package. A directory matching neither rule resolves
/// to the default package (empty string).
#[derive(Debug, Clone, Default)]
pub struct SourceRootResolver {
    source_root: Option<PathBuf>,
}

impl SourceRootResolver {
    /// Resolver that relies on source-set markers only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver anchored at an explicit source root.
    pub fn with_source_root(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: Some(source_root.into()),
        }
    }
}

impl PackageResolver for SourceRootResolver {
    fn resolve(&self, directory: &Path) -> String {
        if let Some(root) = &self.source_root {
            if let Ok(relative) = directory.strip_prefix(root) {
                return dotted(relative);
            }
        }

        let segments: Vec<String> = directory
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        match segments.iter().rposition(|s| s == "kotlin" || s == "java") {
            Some(marker) => segments[marker + 1..].join("."),
            None => String::new(),
        }
    }
}

fn dotted(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_source_root_wins() {
        let resolver = SourceRootResolver::with_source_root("/project/src");
        assert_eq!(
            resolver.resolve(Path::new("/project/src/com/app/home")),
            "com.app.home"
        );
    }

    #[test]
    fn source_root_itself_is_the_default_package() {
        let resolver = SourceRootResolver::with_source_root("/project/src");
        assert_eq!(resolver.resolve(Path::new("/project/src")), "");
    }

    #[test]
    fn kotlin_marker_is_recognized() {
        let resolver = SourceRootResolver::new();
        assert_eq!(
            resolver.resolve(Path::new("/app/src/main/kotlin/com/app/feature")),
            "com.app.feature"
        );
    }

    #[test]
    fn java_marker_is_recognized() {
        let resolver = SourceRootResolver::new();
        assert_eq!(
            resolver.resolve(Path::new("/app/src/main/java/com/app")),
            "com.app"
        );
    }

    #[test]
    fn last_marker_wins() {
        let resolver = SourceRootResolver::new();
        assert_eq!(
            resolver.resolve(Path::new("/repo/kotlin/tools/src/kotlin/org/x")),
            "org.x"
        );
    }

    #[test]
    fn unrecognized_layout_is_the_default_package() {
        let resolver = SourceRootResolver::new();
        assert_eq!(resolver.resolve(Path::new("/tmp/scratch")), "");
    }

    #[test]
    fn root_outside_directory_falls_back_to_markers() {
        let resolver = SourceRootResolver::with_source_root("/elsewhere");
        assert_eq!(
            resolver.resolve(Path::new("/app/src/main/kotlin/com/app")),
            "com.app"
        );
    }
}
