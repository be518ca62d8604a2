//! State-container generator: the sealed declaration set and the viewmodel.
//!
//! Emits two files per run:
//!
//! - `<feature>/viewmodel/state/<Pascal>State.kt` — the sealed
//!   State/Event/UIState/Intent declarations, each group gated by its
//!   config flag;
//! - `<feature>/viewmodel/<Pascal>ViewModel.kt` — the controller class
//!   wiring those types together.
//!
//! The two files are rendered independently but stay consistent because
//! every symbol is derived from the same feature name and settings: the
//! viewmodel imports exactly the set of types the state file declares.

use tracing::debug;

use crate::domain::{
    config::StateContainerConfig,
    generated::GeneratedFile,
    generators::{child_package, section_banner},
    naming::{to_camel, to_pascal},
    settings::{PathKey, TypePathSettings},
};

/// Render the state declaration file and the viewmodel file.
pub fn render(
    config: &StateContainerConfig,
    settings: &TypePathSettings,
    base_package: &str,
) -> Vec<GeneratedFile> {
    let folder = to_camel(&config.feature_name);
    let class = to_pascal(&config.feature_name);
    debug!(feature = %config.feature_name, %folder, %class, "rendering state container");

    let feature_package = child_package(base_package, &folder);
    let view_model_package = format!("{feature_package}.viewmodel");
    let state_package = format!("{view_model_package}.state");

    vec![
        GeneratedFile::new(
            [folder.clone(), "viewmodel".into(), "state".into()],
            format!("{class}State.kt"),
            state_file(&class, &state_package, config, settings),
        ),
        GeneratedFile::new(
            [folder, "viewmodel".into()],
            format!("{class}ViewModel.kt"),
            view_model_file(&class, &view_model_package, &state_package, config, settings),
        ),
    ]
}

/// The sealed State/Event/UIState/Intent declaration file.
fn state_file(
    class: &str,
    state_package: &str,
    config: &StateContainerConfig,
    settings: &TypePathSettings,
) -> String {
    let base_state = settings.simple_name_of(PathKey::State);
    let base_event = settings.simple_name_of(PathKey::Event);
    let base_ui_state = settings.simple_name_of(PathKey::UiState);
    let refreshable = settings.simple_name_of(PathKey::Refreshable);
    let base_intent = settings.simple_name_of(PathKey::Intent);

    let mut out = String::new();
    out.push_str(&format!("package {state_package}\n\n"));

    out.push_str(&format!("import {}\n", settings.get(PathKey::State)));
    if config.events_enabled {
        out.push_str(&format!("import {}\n", settings.get(PathKey::Event)));
    }
    if config.ui_state_enabled {
        out.push_str(&format!("import {}\n", settings.get(PathKey::UiState)));
        if config.refresh_enabled {
            out.push_str(&format!("import {}\n", settings.get(PathKey::Refreshable)));
        }
    }
    out.push_str(&format!("import {}\n\n", settings.get(PathKey::Intent)));

    // State - always emitted, exactly four cases.
    section_banner(&mut out, "State");
    out.push_str(&format!("sealed class {class}State : {base_state} {{\n"));
    out.push_str(&format!("    data object Idle : {class}State()\n"));
    out.push_str(&format!("    data object Loading : {class}State()\n"));
    out.push_str(&format!("    data object Success : {class}State()\n"));
    out.push_str(&format!(
        "    data class Error(val message: String) : {class}State()\n"
    ));
    out.push_str("}\n\n");

    if config.events_enabled {
        section_banner(&mut out, "Event");
        out.push_str(&format!("sealed class {class}Event : {base_event} {{\n"));
        out.push_str(&format!("    data object Loading : {class}Event()\n"));
        out.push_str(&format!("    data object Success : {class}Event()\n"));
        out.push_str(&format!(
            "    data class Error(val message: String) : {class}Event()\n"
        ));
        out.push_str("}\n\n");
    }

    if config.ui_state_enabled {
        section_banner(&mut out, "UIState");
        if config.refresh_enabled {
            // The refreshable capability requires the withRefresh copy method.
            out.push_str(&format!("data class {class}UIState(\n"));
            out.push_str("    val isRefresh: Boolean = false,\n");
            out.push_str("    val isLoading: Boolean = false,\n");
            out.push_str("    // TODO: Add your UI state properties here\n");
            out.push_str(&format!(") : {base_ui_state}, {refreshable} {{\n"));
            out.push_str(&format!(
                "    override fun withRefresh(isRefresh: Boolean): {base_ui_state} {{\n"
            ));
            out.push_str("        return copy(isRefresh = isRefresh)\n");
            out.push_str("    }\n");
            out.push_str("}\n");
        } else {
            out.push_str(&format!("data class {class}UIState(\n"));
            out.push_str("    val isLoading: Boolean = false,\n");
            out.push_str("    // TODO: Add your UI state properties here\n");
            out.push_str(&format!(") : {base_ui_state}\n"));
        }
        out.push('\n');
    }

    // Intent - always emitted.
    section_banner(&mut out, "Intent");
    out.push_str(&format!("sealed class {class}Intent : {base_intent} {{\n"));
    out.push_str(&format!("    data object ClearState : {class}Intent()\n"));
    out.push_str(&format!("    data object Load{class} : {class}Intent()\n"));
    if config.refresh_enabled {
        out.push_str(&format!("    data object RefreshRequest : {class}Intent()\n"));
    }
    out.push_str("    // TODO: Add your custom intents here\n");
    out.push_str("}\n");

    out
}

/// The viewmodel class file.
fn view_model_file(
    class: &str,
    view_model_package: &str,
    state_package: &str,
    config: &StateContainerConfig,
    settings: &TypePathSettings,
) -> String {
    let app_view_model = settings.simple_name_of(PathKey::ViewModel);
    let view_model_config = settings.simple_name_of(PathKey::ViewModelConfig);

    let mut out = String::new();
    out.push_str(&format!("package {view_model_package}\n\n"));
    out.push_str(&format!("import {}\n", settings.get(PathKey::ViewModel)));
    out.push_str(&format!("import {}\n", settings.get(PathKey::ViewModelConfig)));
    out.push_str(&format!("import {state_package}.{class}Intent\n"));
    out.push_str(&format!("import {state_package}.{class}State\n"));
    if config.events_enabled {
        out.push_str(&format!("import {state_package}.{class}Event\n"));
    }
    if config.ui_state_enabled {
        out.push_str(&format!("import {state_package}.{class}UIState\n"));
    }
    out.push('\n');

    // Disabled capabilities collapse to Unit in the type parameter list.
    let event_type = if config.events_enabled {
        format!("{class}Event")
    } else {
        "Unit".into()
    };
    let ui_state_type = if config.ui_state_enabled {
        format!("{class}UIState")
    } else {
        "Unit".into()
    };
    let ui_state_init = if config.ui_state_enabled {
        format!("{class}UIState()")
    } else {
        "Unit".into()
    };

    if config.use_cases.is_empty() {
        out.push_str(&format!(
            "class {class}ViewModel() : {app_view_model}<{class}State, {event_type}, {ui_state_type}, {class}Intent>("
        ));
    } else {
        out.push_str(&format!("class {class}ViewModel(\n"));
        for (index, use_case) in config.use_cases.iter().enumerate() {
            let var = to_camel(use_case);
            let ty = to_pascal(use_case);
            let comma = if index < config.use_cases.len() - 1 { "," } else { "" };
            out.push_str(&format!(
                "    private val {var}UseCase: {ty}UseCase{comma}\n"
            ));
        }
        out.push_str(&format!(
            ") : {app_view_model}<{class}State, {event_type}, {ui_state_type}, {class}Intent>("
        ));
    }
    out.push('\n');
    out.push_str(&format!("    initialState = {class}State.Idle,\n"));
    out.push_str(&format!("    initialUIState = {ui_state_init},\n"));
    out.push_str(&format!("    config = {view_model_config}(\n"));
    out.push_str(&format!("        enableRefresh = {},\n", config.refresh_enabled));
    out.push_str(&format!("        enableEvents = {}\n", config.events_enabled));
    out.push_str("    )\n");
    out.push_str(") {\n\n");

    if config.load_on_init {
        out.push_str("    init {\n");
        out.push_str(&format!("        load{class}()\n"));
        out.push_str("    }\n\n");
    }

    // Intent dispatch - one arm per declared intent case.
    out.push_str(&format!(
        "    override fun handleIntent(intent: {class}Intent) {{\n"
    ));
    out.push_str("        when (intent) {\n");
    out.push_str(&format!(
        "            is {class}Intent.ClearState -> setState({class}State.Idle)\n"
    ));
    out.push_str(&format!(
        "            is {class}Intent.Load{class} -> load{class}()\n"
    ));
    if config.refresh_enabled {
        out.push_str(&format!(
            "            is {class}Intent.RefreshRequest -> refreshRequest {{ load{class}() }}\n"
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    out.push_str(&format!(
        "    override fun createErrorState(message: String): {class}State {{\n"
    ));
    out.push_str(&format!("        return {class}State.Error(message)\n"));
    out.push_str("    }\n");

    if config.events_enabled {
        out.push('\n');
        out.push_str(&format!(
            "    override fun createErrorEvent(message: String): {class}Event {{\n"
        ));
        out.push_str(&format!("        return {class}Event.Error(message)\n"));
        out.push_str("    }\n");
    }

    out.push('\n');
    out.push_str(&format!("    private fun load{class}() {{\n"));
    out.push_str("        launch {\n");
    out.push_str(&format!("            setState({class}State.Loading)\n"));
    out.push_str("            // TODO: Implement\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(events: bool, refresh: bool, ui_state: bool) -> StateContainerConfig {
        StateContainerConfig {
            feature_name: "Forget Password".into(),
            events_enabled: events,
            refresh_enabled: refresh,
            ui_state_enabled: ui_state,
            load_on_init: false,
            use_cases: vec![],
        }
    }

    fn settings() -> TypePathSettings {
        TypePathSettings::default()
    }

    #[test]
    fn emits_state_and_view_model_files_under_feature_folder() {
        let files = render(&config(false, false, false), &settings(), "com.app");
        assert_eq!(files.len(), 2);
        assert_eq!(
            files[0].relative_path().to_str().unwrap(),
            "forgetPassword/viewmodel/state/ForgetPasswordState.kt"
        );
        assert_eq!(
            files[1].relative_path().to_str().unwrap(),
            "forgetPassword/viewmodel/ForgetPasswordViewModel.kt"
        );
    }

    #[test]
    fn state_always_has_exactly_four_cases() {
        let files = render(&config(false, false, false), &settings(), "com.app");
        let state = &files[0].content;
        assert!(state.contains("data object Idle : ForgetPasswordState()"));
        assert!(state.contains("data object Loading : ForgetPasswordState()"));
        assert!(state.contains("data object Success : ForgetPasswordState()"));
        assert!(state.contains("data class Error(val message: String) : ForgetPasswordState()"));
    }

    #[test]
    fn events_disabled_omits_event_block_and_import() {
        let files = render(&config(false, true, true), &settings(), "com.app");
        let state = &files[0].content;
        assert!(!state.contains("ForgetPasswordEvent"));
        assert!(!state.contains("import com.afapps.core.viewmodel.BaseEvent"));

        let view_model = &files[1].content;
        assert!(!view_model.contains("ForgetPasswordEvent"));
        assert!(view_model.contains(
            "AppViewModel<ForgetPasswordState, Unit, ForgetPasswordUIState, ForgetPasswordIntent>"
        ));
        assert!(!view_model.contains("createErrorEvent"));
    }

    #[test]
    fn events_enabled_declares_and_imports_event() {
        let files = render(&config(true, false, false), &settings(), "com.app");
        let state = &files[0].content;
        assert!(state.contains("sealed class ForgetPasswordEvent : BaseEvent {"));
        assert!(state.contains("import com.afapps.core.viewmodel.BaseEvent"));

        let view_model = &files[1].content;
        assert!(view_model.contains(
            "import com.app.forgetPassword.viewmodel.state.ForgetPasswordEvent"
        ));
        assert!(view_model.contains("createErrorEvent"));
    }

    #[test]
    fn refresh_enabled_ui_state_gains_refresh_capability() {
        let files = render(&config(false, true, true), &settings(), "com.app");
        let state = &files[0].content;
        assert!(state.contains("val isRefresh: Boolean = false,"));
        assert!(state.contains("val isLoading: Boolean = false,"));
        assert!(state.contains(") : BaseUIState, Refreshable {"));
        assert!(state.contains("override fun withRefresh(isRefresh: Boolean): BaseUIState {"));
        assert!(state.contains("import com.afapps.core.viewmodel.Refreshable"));
    }

    #[test]
    fn refresh_disabled_ui_state_has_no_refresh_capability() {
        let files = render(&config(false, false, true), &settings(), "com.app");
        let state = &files[0].content;
        assert!(!state.contains("isRefresh"));
        assert!(!state.contains("Refreshable"));
        assert!(state.contains(") : BaseUIState\n"));
    }

    #[test]
    fn intent_cases_follow_refresh_flag() {
        let with_refresh = render(&config(false, true, true), &settings(), "com.app");
        let state = &with_refresh[0].content;
        assert!(state.contains("data object ClearState : ForgetPasswordIntent()"));
        assert!(state.contains("data object LoadForgetPassword : ForgetPasswordIntent()"));
        assert!(state.contains("data object RefreshRequest : ForgetPasswordIntent()"));

        let without = render(&config(false, false, true), &settings(), "com.app");
        assert!(!without[0].content.contains("RefreshRequest"));
    }

    #[test]
    fn view_model_dispatches_every_intent_case() {
        let files = render(&config(false, true, true), &settings(), "com.app");
        let view_model = &files[1].content;
        assert!(view_model.contains(
            "is ForgetPasswordIntent.ClearState -> setState(ForgetPasswordState.Idle)"
        ));
        assert!(view_model.contains(
            "is ForgetPasswordIntent.LoadForgetPassword -> loadForgetPassword()"
        ));
        assert!(view_model.contains(
            "is ForgetPasswordIntent.RefreshRequest -> refreshRequest { loadForgetPassword() }"
        ));
    }

    #[test]
    fn use_cases_become_constructor_parameters() {
        let mut cfg = config(false, false, false);
        cfg.use_cases = vec!["Login".into(), "FetchProfile".into()];
        let files = render(&cfg, &settings(), "com.app");
        let view_model = &files[1].content;
        assert!(view_model.contains("    private val loginUseCase: LoginUseCase,\n"));
        assert!(view_model.contains("    private val fetchProfileUseCase: FetchProfileUseCase\n"));
    }

    #[test]
    fn config_booleans_are_forwarded_to_base_constructor() {
        let files = render(&config(true, true, true), &settings(), "com.app");
        let view_model = &files[1].content;
        assert!(view_model.contains("config = ViewModelConfig("));
        assert!(view_model.contains("enableRefresh = true,"));
        assert!(view_model.contains("enableEvents = true"));
    }

    #[test]
    fn load_on_init_adds_init_block() {
        let mut cfg = config(false, false, false);
        cfg.load_on_init = true;
        let files = render(&cfg, &settings(), "com.app");
        assert!(files[1].content.contains("    init {\n        loadForgetPassword()\n    }\n"));

        cfg.load_on_init = false;
        let files = render(&cfg, &settings(), "com.app");
        assert!(!files[1].content.contains("init {"));
    }

    #[test]
    fn empty_base_package_renders_default_package() {
        let files = render(&config(false, false, false), &settings(), "");
        assert!(files[0]
            .content
            .starts_with("package forgetPassword.viewmodel.state\n"));
    }

    #[test]
    fn rendering_is_referentially_transparent() {
        let cfg = config(true, true, true);
        assert_eq!(
            render(&cfg, &settings(), "com.app"),
            render(&cfg, &settings(), "com.app")
        );
    }
}
