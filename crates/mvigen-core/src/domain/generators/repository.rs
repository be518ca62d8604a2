//! Repository generator: domain interface plus data-layer implementation.
//!
//! Every declared method returns a cold `Flow` of its result type, so both
//! files import `kotlinx.coroutines.flow.Flow` unconditionally. The
//! implementation stubs each method with `TODO("Not yet implemented")` so
//! the output compiles before any hand-written body exists.

use tracing::debug;

use crate::domain::{
    config::RepositoryConfig,
    generated::GeneratedFile,
    generators::child_package,
    naming::to_pascal,
};

/// Render the interface and implementation files.
///
/// The caller decides beforehand whether an empty method list skips or
/// fails the run; by the time this function runs, `config.methods` is
/// what gets rendered as-is (an empty list yields an empty body).
pub fn render(config: &RepositoryConfig, base_package: &str) -> Vec<GeneratedFile> {
    let class = to_pascal(&config.feature_name);
    debug!(feature = %config.feature_name, %class, methods = config.methods.len(), "rendering repository");

    let domain_package = child_package(&child_package(base_package, "domain"), "repo");
    let data_package = child_package(&child_package(base_package, "data"), "repo");

    vec![
        GeneratedFile::new(
            ["domain".to_string(), "repo".into()],
            format!("{class}Repo.kt"),
            interface_file(&class, &domain_package, config),
        ),
        GeneratedFile::new(
            ["data".to_string(), "repo".into()],
            format!("{class}RepoImpl.kt"),
            implementation_file(&class, &data_package, &domain_package, config),
        ),
    ]
}

fn interface_file(class: &str, domain_package: &str, config: &RepositoryConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("package {domain_package}\n\n"));
    out.push_str("import kotlinx.coroutines.flow.Flow\n\n");
    out.push_str(&format!("interface {class}Repo {{\n"));
    for method in &config.methods {
        out.push('\n');
        out.push_str(&format!(
            "    fun {}({}): Flow<{}>\n",
            method.name,
            method.parameters,
            method.rendered_return_type()
        ));
    }
    out.push_str("}\n");
    out
}

fn implementation_file(
    class: &str,
    data_package: &str,
    domain_package: &str,
    config: &RepositoryConfig,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("package {data_package}\n\n"));
    out.push_str(&format!("import {domain_package}.{class}Repo\n"));
    if config.needs_http_client {
        out.push_str("import io.ktor.client.HttpClient\n");
    }
    out.push_str("import kotlinx.coroutines.flow.Flow\n\n");

    if config.needs_http_client {
        out.push_str(&format!("class {class}RepoImpl(\n"));
        out.push_str("    private val httpClient: HttpClient,\n");
        out.push_str(&format!(") : {class}Repo {{\n"));
    } else {
        out.push_str(&format!("class {class}RepoImpl() : {class}Repo {{\n"));
    }
    for method in &config.methods {
        out.push('\n');
        out.push_str(&format!(
            "    override fun {}({}): Flow<{}> {{\n",
            method.name,
            method.parameters,
            method.rendered_return_type()
        ));
        out.push_str("        TODO(\"Not yet implemented\")\n");
        out.push_str("    }\n");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{EmptyMethodPolicy, RepoMethod};

    fn config(methods: Vec<RepoMethod>, http: bool) -> RepositoryConfig {
        RepositoryConfig {
            feature_name: "user".into(),
            methods,
            needs_http_client: http,
            on_empty_methods: EmptyMethodPolicy::Skip,
        }
    }

    #[test]
    fn interface_and_impl_land_in_fixed_layers() {
        let files = render(&config(vec![], false), "com.app");
        assert_eq!(files.len(), 2);
        assert_eq!(
            files[0].relative_path().to_str().unwrap(),
            "domain/repo/UserRepo.kt"
        );
        assert_eq!(
            files[1].relative_path().to_str().unwrap(),
            "data/repo/UserRepoImpl.kt"
        );
        assert!(files[0].content.starts_with("package com.app.domain.repo\n"));
        assert!(files[1].content.starts_with("package com.app.data.repo\n"));
    }

    #[test]
    fn methods_return_flow_of_declared_type() {
        let files = render(
            &config(
                vec![RepoMethod::new("getUser", "User", "id: String")],
                false,
            ),
            "com.app",
        );
        assert!(files[0]
            .content
            .contains("    fun getUser(id: String): Flow<User>\n"));
        assert!(files[1]
            .content
            .contains("    override fun getUser(id: String): Flow<User> {\n"));
        assert!(files[1].content.contains("TODO(\"Not yet implemented\")"));
    }

    #[test]
    fn blank_return_type_becomes_flow_of_unit() {
        let files = render(&config(vec![RepoMethod::new("getUsers", "", "")], false), "com.app");
        assert!(files[0].content.contains("fun getUsers(): Flow<Unit>"));
        assert!(files[1].content.contains("override fun getUsers(): Flow<Unit>"));
    }

    #[test]
    fn http_client_is_injected_only_when_requested() {
        let with = render(&config(vec![], true), "com.app");
        assert!(with[1].content.contains("import io.ktor.client.HttpClient\n"));
        assert!(with[1].content.contains("class UserRepoImpl(\n    private val httpClient: HttpClient,\n) : UserRepo {"));

        let without = render(&config(vec![], false), "com.app");
        assert!(!without[1].content.contains("HttpClient"));
        assert!(without[1].content.contains("class UserRepoImpl() : UserRepo {"));
    }

    #[test]
    fn interface_file_never_imports_http_client() {
        let files = render(&config(vec![], true), "com.app");
        assert!(!files[0].content.contains("HttpClient"));
    }

    #[test]
    fn default_package_has_no_leading_dot() {
        let files = render(&config(vec![], false), "");
        assert!(files[0].content.starts_with("package domain.repo\n"));
        assert!(files[1].content.contains("import domain.repo.UserRepo\n"));
    }
}
