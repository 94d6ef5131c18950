//! Behavioural tests for CLI configuration loading.

use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use taplist::{OperationMode, TaplistConfig};

/// State for CLI configuration scenarios.
///
/// Layers are kept as JSON values because `MergeComposer` doesn't implement
/// Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    config: Slot<TaplistConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Builds and stores the configuration from the accumulated layers.
fn build_config(state: &ConfigState) {
    let mut composer = MergeComposer::new();

    let defaults = serde_json::to_value(TaplistConfig::default())
        .unwrap_or_else(|error| panic!("failed to serialise defaults: {error}"));
    composer.push_defaults(defaults);

    if let Some(env) = state.env_layer.get() {
        composer.push_environment(env);
    }

    if let Some(cli) = state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match TaplistConfig::merge_from_layers(composer.layers()) {
        Ok(config) => {
            state.config.set(config);
        }
        Err(error) => {
            panic!("failed to merge configuration: {error}");
        }
    }
}

fn built_config(state: &ConfigState) -> TaplistConfig {
    state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"))
}

// --- Given steps ---

#[given("an environment base_url {url}")]
fn env_base_url(config_state: &ConfigState, url: String) {
    config_state
        .env_layer
        .set(json!({"base_url": url.trim_matches('"')}));
}

#[given("an environment per_page {per_page:u8}")]
fn env_per_page(config_state: &ConfigState, per_page: u8) {
    config_state.env_layer.set(json!({"per_page": per_page}));
}

// --- When steps ---

#[when("the CLI receives base_url {url}")]
fn cli_receives_base_url(config_state: &ConfigState, url: String) {
    config_state
        .cli_layer
        .set(json!({"base_url": url.trim_matches('"')}));
    build_config(config_state);
}

#[when("the CLI receives print_pages {pages:u32}")]
fn cli_receives_print_pages(config_state: &ConfigState, pages: u32) {
    config_state.cli_layer.set(json!({"print_pages": pages}));
    build_config(config_state);
}

#[when("the CLI receives no options")]
fn cli_receives_no_options(config_state: &ConfigState) {
    build_config(config_state);
}

// --- Then steps ---

#[then("the configured base URL is {expected}")]
fn assert_base_url(config_state: &ConfigState, expected: String) {
    let config = built_config(config_state);
    assert_eq!(
        config.base_url(),
        expected.trim_matches('"'),
        "base_url mismatch"
    );
}

#[then("the page size is {expected:u8}")]
fn assert_page_size(config_state: &ConfigState, expected: u8) {
    let config = built_config(config_state);
    let per_page = config
        .per_page()
        .unwrap_or_else(|error| panic!("page size should be valid: {error}"));
    assert_eq!(per_page.value(), expected, "per_page mismatch");
}

#[then("the operation mode is interactive")]
fn assert_interactive(config_state: &ConfigState) {
    let config = built_config(config_state);
    assert_eq!(config.operation_mode(), OperationMode::Interactive);
}

#[then("the operation mode is print with {pages:u32} pages")]
fn assert_print_mode(config_state: &ConfigState, pages: u32) {
    let config = built_config(config_state);
    assert_eq!(config.operation_mode(), OperationMode::Print { pages });
}

#[then("validation fails mentioning {text}")]
fn assert_validation_error(config_state: &ConfigState, text: String) {
    let config = built_config(config_state);
    let error = config
        .validate()
        .expect_err("validation should reject the configuration");
    let expected = text.trim_matches('"');
    assert!(
        error.to_string().contains(expected),
        "expected `{expected}` in `{error}`"
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn cli_base_url_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn env_page_size_used(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn defaults_apply(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn print_pages_selects_print_mode(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn oversized_page_size_rejected(config_state: ConfigState) {
    let _ = config_state;
}
