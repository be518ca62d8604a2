//! File renderers.
//!
//! Each generator is a set of pure functions from (config, settings, base
//! package) to [`GeneratedFile`] values. No I/O happens here; the
//! application service owns validation, ordering, and the sink. Keeping each
//! file's assembly in its own function makes every output unit-testable
//! without any filesystem collaborator.

pub mod repository;
pub mod screen;
pub mod state_container;

/// Append a dotted segment to a package, treating an empty base as the
/// default package (no leading `.`).
pub(crate) fn child_package(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{base}.{segment}")
    }
}

/// Section banner used inside generated state files.
pub(crate) fn section_banner(out: &mut String, title: &str) {
    let rule = "\u{2550}".repeat(63);
    out.push_str(&format!("// {rule}\n// {title}\n// {rule}\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_package_handles_default_package() {
        assert_eq!(child_package("", "home"), "home");
        assert_eq!(child_package("com.app", "home"), "com.app.home");
    }
}
