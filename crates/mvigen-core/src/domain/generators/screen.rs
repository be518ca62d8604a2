//! Screen generator: composable Route/Screen pair plus optional navigation.
//!
//! The route function is the public entry (internal visibility, wired into
//! navigation); the screen function is private and holds the actual UI
//! stub. Navigation parameters flow route to screen by name, so a typed
//! destination's fields always line up with the screen's parameters.

use tracing::debug;

use crate::domain::{
    config::{NavigationStyle, ScreenConfig},
    generated::GeneratedFile,
    generators::child_package,
    naming::{to_camel, to_pascal, to_snake},
    settings::{PathKey, TypePathSettings},
};

/// Render the screen file and, depending on the style, a navigation file.
pub fn render(
    config: &ScreenConfig,
    settings: &TypePathSettings,
    base_package: &str,
) -> Vec<GeneratedFile> {
    let folder = to_camel(&config.feature_name);
    let class = to_pascal(&config.feature_name);
    debug!(feature = %config.feature_name, %class, style = %config.navigation_style, "rendering screen");

    let screen_package = child_package(base_package, &folder);

    let mut files = vec![GeneratedFile::new(
        [folder.clone()],
        format!("{class}Screen.kt"),
        screen_file(&class, &screen_package, config),
    )];

    match config.navigation_style {
        NavigationStyle::None => {}
        NavigationStyle::Simple => files.push(GeneratedFile::new(
            [folder.clone(), "navigation".into()],
            format!("{class}Navigation.kt"),
            simple_navigation_file(&class, &folder, &screen_package, config, settings),
        )),
        NavigationStyle::TypeSafe => files.push(GeneratedFile::new(
            [folder.clone(), "navigation".into()],
            format!("{class}Navigation.kt"),
            type_safe_navigation_file(&class, &folder, &screen_package, config, settings),
        )),
    }

    files
}

/// Route and screen parameters include navigation arguments only in the
/// type-safe style; a plain string route cannot carry them.
fn carries_nav_parameters(config: &ScreenConfig) -> bool {
    config.navigation_style == NavigationStyle::TypeSafe && !config.nav_parameters.is_empty()
}

fn screen_file(class: &str, screen_package: &str, config: &ScreenConfig) -> String {
    let view_model_package = format!("{screen_package}.viewmodel");
    let state_package = format!("{view_model_package}.state");

    let mut out = String::new();
    out.push_str(&format!("package {screen_package}\n\n"));
    out.push_str("import androidx.compose.runtime.Composable\n");
    if config.inject_view_model {
        out.push_str(&format!("import {view_model_package}.{class}ViewModel\n"));
        out.push_str(&format!("import {state_package}.{class}Intent\n"));
        out.push_str(&format!("import {state_package}.{class}State\n"));
        out.push_str(&format!("import {state_package}.{class}UIState\n"));
        out.push_str("import kotlinx.coroutines.flow.StateFlow\n");
        out.push_str("import org.koin.compose.viewmodel.koinViewModel\n");
    }
    out.push('\n');

    // Route function.
    let mut route_params = Vec::new();
    if carries_nav_parameters(config) {
        for param in &config.nav_parameters {
            route_params.push(format!("{}: {}", param.name, param.ty));
        }
    }
    if config.inject_view_model {
        route_params.push(format!("viewModel: {class}ViewModel = koinViewModel()"));
    }
    if config.has_navigation_back {
        route_params.push("navigationBack: () -> Unit".into());
    }

    out.push_str("@Composable\n");
    out.push_str(&format!("internal fun {class}Route"));
    push_parameter_list(&mut out, &route_params);
    out.push_str(" {\n");

    let mut call_args = Vec::new();
    if carries_nav_parameters(config) {
        for param in &config.nav_parameters {
            call_args.push(format!("{} = {}", param.name, param.name));
        }
    }
    if config.inject_view_model {
        call_args.push("apiState = viewModel.state".into());
        call_args.push("uiState = viewModel.uiState".into());
        call_args.push("onIntent = viewModel::handleIntent".into());
    }
    if config.has_navigation_back {
        call_args.push("navigationBack = navigationBack".into());
    }
    if call_args.is_empty() {
        out.push_str(&format!("    {class}Screen()\n"));
    } else {
        out.push_str(&format!("    {class}Screen(\n"));
        for (index, arg) in call_args.iter().enumerate() {
            let comma = if index < call_args.len() - 1 { "," } else { "" };
            out.push_str(&format!("        {arg}{comma}\n"));
        }
        out.push_str("    )\n");
    }
    out.push_str("}\n\n");

    // Screen function.
    let mut screen_params = Vec::new();
    if carries_nav_parameters(config) {
        for param in &config.nav_parameters {
            screen_params.push(format!("{}: {}", param.name, param.ty));
        }
    }
    if config.inject_view_model {
        screen_params.push(format!("apiState: StateFlow<{class}State>"));
        screen_params.push(format!("uiState: StateFlow<{class}UIState>"));
        screen_params.push(format!("onIntent: ({class}Intent) -> Unit = {{}}"));
    }
    if config.has_navigation_back {
        screen_params.push("navigationBack: () -> Unit".into());
    }

    out.push_str("@Composable\n");
    out.push_str(&format!("private fun {class}Screen"));
    push_parameter_list(&mut out, &screen_params);
    out.push_str(" {\n");
    out.push_str("    // TODO: Implement your screen here\n");
    out.push_str("}\n");

    out
}

fn simple_navigation_file(
    class: &str,
    folder: &str,
    screen_package: &str,
    config: &ScreenConfig,
    settings: &TypePathSettings,
) -> String {
    let navigation_package = format!("{screen_package}.navigation");
    let route_constant = format!("{}_ROUTE", to_snake(class).to_uppercase());
    let composable_route = settings.simple_name_of(PathKey::ComposableRoute);

    let mut out = String::new();
    out.push_str(&format!("package {navigation_package}\n\n"));
    out.push_str("import androidx.navigation.NavController\n");
    out.push_str("import androidx.navigation.NavGraphBuilder\n");
    out.push_str("import androidx.navigation.NavOptions\n");
    out.push_str(&format!("import {}\n", settings.get(PathKey::ComposableRoute)));
    out.push_str(&format!("import {screen_package}.{class}Route\n\n"));

    out.push_str(&format!("const val {route_constant} = \"{folder}_route\"\n\n"));

    out.push_str(&format!(
        "fun NavController.navigateTo{class}(navOptions: NavOptions? = null) {{\n"
    ));
    out.push_str(&format!("    navigate({route_constant}, navOptions)\n"));
    out.push_str("}\n\n");

    out.push_str(&format!("fun NavGraphBuilder.{folder}Screen"));
    let builder_params: Vec<String> = if config.has_navigation_back {
        vec!["navigationBack: () -> Unit".into()]
    } else {
        vec![]
    };
    push_parameter_list(&mut out, &builder_params);
    out.push_str(" {\n");
    out.push_str(&format!("    {composable_route}({route_constant}) {{\n"));
    if config.has_navigation_back {
        out.push_str(&format!(
            "        {class}Route(navigationBack = navigationBack)\n"
        ));
    } else {
        out.push_str(&format!("        {class}Route()\n"));
    }
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

fn type_safe_navigation_file(
    class: &str,
    folder: &str,
    screen_package: &str,
    config: &ScreenConfig,
    settings: &TypePathSettings,
) -> String {
    let navigation_package = format!("{screen_package}.navigation");
    let composable_safe_type = settings.simple_name_of(PathKey::ComposableSafeType);

    let mut out = String::new();
    out.push_str(&format!("package {navigation_package}\n\n"));
    out.push_str("import androidx.navigation.NavController\n");
    out.push_str("import androidx.navigation.NavGraphBuilder\n");
    out.push_str("import androidx.navigation.NavOptions\n");
    out.push_str(&format!(
        "import {}\n",
        settings.get(PathKey::ComposableSafeType)
    ));
    out.push_str("import kotlinx.serialization.Serializable\n");
    out.push_str(&format!("import {screen_package}.{class}Route\n\n"));

    out.push_str("@Serializable\n");
    if config.nav_parameters.is_empty() {
        out.push_str(&format!("data class {class}Destination()\n\n"));
    } else {
        out.push_str(&format!("data class {class}Destination(\n"));
        for param in &config.nav_parameters {
            out.push_str(&format!("    val {}: {},\n", param.name, param.ty));
        }
        out.push_str(")\n\n");
    }

    out.push_str(&format!("fun NavController.navigateTo{class}(\n"));
    for param in &config.nav_parameters {
        out.push_str(&format!("    {}: {},\n", param.name, param.ty));
    }
    out.push_str("    navOptions: NavOptions? = null,\n");
    out.push_str(") {\n");
    let arg_names: Vec<&str> = config
        .nav_parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    out.push_str(&format!(
        "    navigate({class}Destination({}), navOptions)\n",
        arg_names.join(", ")
    ));
    out.push_str("}\n\n");

    out.push_str(&format!("fun NavGraphBuilder.{folder}Screen"));
    let builder_params: Vec<String> = if config.has_navigation_back {
        vec!["navigationBack: () -> Unit".into()]
    } else {
        vec![]
    };
    push_parameter_list(&mut out, &builder_params);
    out.push_str(" {\n");
    out.push_str(&format!("    {composable_safe_type}<{class}Destination>(\n"));
    out.push_str("        content = { args, _ ->\n");
    if config.nav_parameters.is_empty() && !config.has_navigation_back {
        out.push_str(&format!("            {class}Route()\n"));
    } else {
        out.push_str(&format!("            {class}Route(\n"));
        for param in &config.nav_parameters {
            out.push_str(&format!(
                "                {} = args.{},\n",
                param.name, param.name
            ));
        }
        if config.has_navigation_back {
            out.push_str("                navigationBack = navigationBack,\n");
        }
        out.push_str("            )\n");
    }
    out.push_str("        }\n");
    out.push_str("    )\n");
    out.push_str("}\n");

    out
}

/// Render a Kotlin parameter list: `()` when empty, otherwise one
/// parameter per line with trailing commas.
fn push_parameter_list(out: &mut String, params: &[String]) {
    if params.is_empty() {
        out.push_str("()");
        return;
    }
    out.push_str("(\n");
    for param in params {
        out.push_str(&format!("    {param},\n"));
    }
    out.push(')');
}
