//! Build-time configuration with an optional runtime override.
//!
//! Values come from `option_env!` at compile time; static deployments can
//! override them through `window.LOCALCONVERT_CONFIG` without rebuilding.
//! Everything here is public, never put secrets in it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// API base used when no build or runtime value is provided.
pub const DEFAULT_API_BASE_URL: &str = "https://hoangnv.space/api";

/// Front-end configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(value) = option_env!("LOCALCONVERT_API_BASE_URL").and_then(normalize_value) {
            config.api_base_url = value;
        }
        if let Some(level) = option_env!("LOCALCONVERT_LOG_LEVEL").and_then(parse_level) {
            config.log_level = level;
        }

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url.as_deref().and_then(normalize_value) {
        config.api_base_url = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_level) {
        config.log_level = level;
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_level(value: &str) -> Option<log::Level> {
    log::Level::from_str(value.trim()).ok()
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("LOCALCONVERT_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(feature = "csr")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}
