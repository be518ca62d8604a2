//! Generation Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Validate settings and the feature name
//! 2. Resolve the base package for the target directory
//! 3. Render the requested files
//! 4. Persist them through the file sink
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{FileSink, PackageResolver},
    },
    domain::{
        DomainError, EmptyMethodPolicy, FeatureConfig, GeneratedFile, RepositoryConfig,
        ScreenConfig, StateContainerConfig, TypePathSettings,
        generators::{repository, screen, state_container},
        naming::to_pascal,
    },
    error::MvigenResult,
};

/// Outcome of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Absolute paths of every file written, in write order.
    pub files: Vec<PathBuf>,
    /// True when repository generation was requested but skipped because
    /// no methods were declared.
    pub repository_skipped: bool,
}

impl GenerationReport {
    fn merge(&mut self, other: GenerationReport) {
        self.files.extend(other.files);
        self.repository_skipped |= other.repository_skipped;
    }
}

/// Main generation service.
///
/// Orchestrates validation, package resolution, rendering, and writing.
pub struct GenerationService {
    sink: Box<dyn FileSink>,
    resolver: Box<dyn PackageResolver>,
    settings: TypePathSettings,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        sink: Box<dyn FileSink>,
        resolver: Box<dyn PackageResolver>,
        settings: TypePathSettings,
    ) -> Self {
        Self {
            sink,
            resolver,
            settings,
        }
    }

    /// Generate the state/viewmodel pair into `base_dir`.
    #[instrument(skip_all, fields(feature = %config.feature_name, base_dir = %base_dir.display()))]
    pub fn generate_state_container(
        &self,
        config: &StateContainerConfig,
        base_dir: &Path,
    ) -> MvigenResult<GenerationReport> {
        self.preflight(&config.feature_name)?;
        let base_package = self.resolver.resolve(base_dir);
        let files = state_container::render(config, &self.settings, &base_package);
        self.write_all(base_dir, &files)
    }

    /// Generate the repository interface/implementation pair into `base_dir`.
    ///
    /// With no methods declared, the `Skip` policy returns an empty report
    /// flagged `repository_skipped`; the `Fail` policy errors.
    #[instrument(skip_all, fields(feature = %config.feature_name, base_dir = %base_dir.display()))]
    pub fn generate_repository(
        &self,
        config: &RepositoryConfig,
        base_dir: &Path,
    ) -> MvigenResult<GenerationReport> {
        self.preflight(&config.feature_name)?;
        if config.methods.is_empty() {
            match config.on_empty_methods {
                EmptyMethodPolicy::Skip => {
                    info!("no methods declared, skipping repository");
                    return Ok(GenerationReport {
                        files: vec![],
                        repository_skipped: true,
                    });
                }
                EmptyMethodPolicy::Fail => {
                    return Err(ApplicationError::EmptyMethodList {
                        feature: config.feature_name.clone(),
                    }
                    .into());
                }
            }
        }
        let base_package = self.resolver.resolve(base_dir);
        let files = repository::render(config, &base_package);
        self.write_all(base_dir, &files)
    }

    /// Generate the screen (and optional navigation) into `base_dir`.
    #[instrument(skip_all, fields(feature = %config.feature_name, base_dir = %base_dir.display()))]
    pub fn generate_screen(
        &self,
        config: &ScreenConfig,
        base_dir: &Path,
    ) -> MvigenResult<GenerationReport> {
        self.preflight(&config.feature_name)?;
        let base_package = self.resolver.resolve(base_dir);
        let files = screen::render(config, &self.settings, &base_package);
        self.write_all(base_dir, &files)
    }

    /// Generate a full feature: screen, state container, repository, each
    /// gated by its toggle. The screen's route function injects a viewmodel
    /// exactly when the same run generates one.
    #[instrument(skip_all, fields(feature = %config.feature_name, base_dir = %base_dir.display()))]
    pub fn generate_feature(
        &self,
        config: &FeatureConfig,
        base_dir: &Path,
    ) -> MvigenResult<GenerationReport> {
        self.preflight(&config.feature_name)?;

        let mut report = GenerationReport::default();
        if config.generate_screen {
            report.merge(self.generate_screen(&config.screen(), base_dir)?);
        }
        if config.generate_view_model {
            report.merge(self.generate_state_container(&config.state_container(), base_dir)?);
        }
        if config.generate_repository {
            report.merge(self.generate_repository(&config.repository(), base_dir)?);
        }

        info!(files = report.files.len(), "feature generation completed");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Checks that run before any file is rendered.
    fn preflight(&self, feature_name: &str) -> MvigenResult<()> {
        if to_pascal(feature_name).is_empty() {
            return Err(DomainError::BlankFeatureName {
                name: feature_name.to_string(),
            }
            .into());
        }
        self.settings.validate()?;
        Ok(())
    }

    /// Persist rendered files through the sink.
    fn write_all(
        &self,
        base_dir: &Path,
        files: &[GeneratedFile],
    ) -> MvigenResult<GenerationReport> {
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let directory: PathBuf = base_dir.join(file.dir.iter().collect::<PathBuf>());
            self.sink.write(&directory, &file.file_name, &file.content)?;
            written.push(directory.join(&file.file_name));
        }
        info!(files = written.len(), "files written");
        Ok(GenerationReport {
            files: written,
            repository_skipped: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockFileSink, MockPackageResolver};
    use crate::domain::RepoMethod;
    use crate::error::MvigenError;

    fn resolver(package: &str) -> Box<MockPackageResolver> {
        let package = package.to_string();
        let mut mock = MockPackageResolver::new();
        mock.expect_resolve().returning(move |_| package.clone());
        Box::new(mock)
    }

    fn accepting_sink() -> Box<MockFileSink> {
        let mut mock = MockFileSink::new();
        mock.expect_write().returning(|_, _, _| Ok(()));
        Box::new(mock)
    }

    fn state_config(name: &str) -> StateContainerConfig {
        StateContainerConfig {
            feature_name: name.into(),
            events_enabled: false,
            refresh_enabled: false,
            ui_state_enabled: false,
            load_on_init: false,
            use_cases: vec![],
        }
    }

    #[test]
    fn blank_feature_name_is_rejected_before_rendering() {
        let mut sink = MockFileSink::new();
        sink.expect_write().never();
        let service =
            GenerationService::new(Box::new(sink), resolver("com.app"), TypePathSettings::default());

        let err = service
            .generate_state_container(&state_config("!!!"), Path::new("/src"))
            .unwrap_err();
        assert!(matches!(
            err,
            MvigenError::Domain(DomainError::BlankFeatureName { .. })
        ));
    }

    #[test]
    fn incomplete_settings_are_rejected_before_rendering() {
        let mut settings = TypePathSettings::default();
        settings.set(crate::domain::PathKey::State, "");
        let mut sink = MockFileSink::new();
        sink.expect_write().never();
        let service = GenerationService::new(Box::new(sink), resolver("com.app"), settings);

        let err = service
            .generate_state_container(&state_config("home"), Path::new("/src"))
            .unwrap_err();
        assert!(matches!(
            err,
            MvigenError::Domain(DomainError::SettingsIncomplete { .. })
        ));
    }

    #[test]
    fn state_container_report_lists_written_paths() {
        let service = GenerationService::new(
            accepting_sink(),
            resolver("com.app"),
            TypePathSettings::default(),
        );

        let report = service
            .generate_state_container(&state_config("home"), Path::new("/src"))
            .unwrap();
        assert_eq!(
            report.files,
            vec![
                PathBuf::from("/src/home/viewmodel/state/HomeState.kt"),
                PathBuf::from("/src/home/viewmodel/HomeViewModel.kt"),
            ]
        );
        assert!(!report.repository_skipped);
    }

    #[test]
    fn empty_methods_skip_policy_writes_nothing() {
        let mut sink = MockFileSink::new();
        sink.expect_write().never();
        let service =
            GenerationService::new(Box::new(sink), resolver("com.app"), TypePathSettings::default());

        let config = RepositoryConfig {
            feature_name: "user".into(),
            methods: vec![],
            needs_http_client: false,
            on_empty_methods: EmptyMethodPolicy::Skip,
        };
        let report = service.generate_repository(&config, Path::new("/src")).unwrap();
        assert!(report.files.is_empty());
        assert!(report.repository_skipped);
    }

    #[test]
    fn empty_methods_fail_policy_errors() {
        let service = GenerationService::new(
            accepting_sink(),
            resolver("com.app"),
            TypePathSettings::default(),
        );

        let config = RepositoryConfig {
            feature_name: "user".into(),
            methods: vec![],
            needs_http_client: false,
            on_empty_methods: EmptyMethodPolicy::Fail,
        };
        let err = service.generate_repository(&config, Path::new("/src")).unwrap_err();
        assert!(matches!(
            err,
            MvigenError::Application(ApplicationError::EmptyMethodList { .. })
        ));
    }

    #[test]
    fn sink_failure_propagates() {
        let mut sink = MockFileSink::new();
        sink.expect_write().returning(|dir, name, _| {
            Err(ApplicationError::SinkWrite {
                path: dir.join(name),
                reason: "disk full".into(),
            }
            .into())
        });
        let service =
            GenerationService::new(Box::new(sink), resolver("com.app"), TypePathSettings::default());

        let err = service
            .generate_state_container(&state_config("home"), Path::new("/src"))
            .unwrap_err();
        assert!(matches!(
            err,
            MvigenError::Application(ApplicationError::SinkWrite { .. })
        ));
    }

    #[test]
    fn feature_run_orders_screen_before_state_and_repository() {
        let service = GenerationService::new(
            accepting_sink(),
            resolver("com.app"),
            TypePathSettings::default(),
        );

        let config = FeatureConfig {
            feature_name: "home".into(),
            generate_screen: true,
            generate_view_model: true,
            generate_repository: true,
            events_enabled: false,
            refresh_enabled: false,
            ui_state_enabled: false,
            load_on_init: false,
            use_cases: vec![],
            methods: vec![RepoMethod::new("getHome", "Home", "")],
            needs_http_client: false,
            on_empty_methods: EmptyMethodPolicy::Skip,
            navigation_style: crate::domain::NavigationStyle::None,
            nav_parameters: vec![],
            has_navigation_back: false,
        };
        let report = service.generate_feature(&config, Path::new("/src")).unwrap();
        assert_eq!(
            report.files,
            vec![
                PathBuf::from("/src/home/HomeScreen.kt"),
                PathBuf::from("/src/home/viewmodel/state/HomeState.kt"),
                PathBuf::from("/src/home/viewmodel/HomeViewModel.kt"),
                PathBuf::from("/src/domain/repo/HomeRepo.kt"),
                PathBuf::from("/src/data/repo/HomeRepoImpl.kt"),
            ]
        );
    }

    #[test]
    fn feature_run_reports_skipped_repository() {
        let service = GenerationService::new(
            accepting_sink(),
            resolver("com.app"),
            TypePathSettings::default(),
        );

        let config = FeatureConfig {
            feature_name: "home".into(),
            generate_screen: false,
            generate_view_model: false,
            generate_repository: true,
            events_enabled: false,
            refresh_enabled: false,
            ui_state_enabled: false,
            load_on_init: false,
            use_cases: vec![],
            methods: vec![],
            needs_http_client: false,
            on_empty_methods: EmptyMethodPolicy::Skip,
            navigation_style: crate::domain::NavigationStyle::None,
            nav_parameters: vec![],
            has_navigation_back: false,
        };
        let report = service.generate_feature(&config, Path::new("/src")).unwrap();
        assert!(report.files.is_empty());
        assert!(report.repository_skipped);
    }
}
