//! Configuration Commands
//!
//! Reads the runtime overrides the hosting page may publish before the
//! bundle loads.

use site_core::config::ConfigOverrides;
use site_core::SiteConfig;
use wasm_bindgen::prelude::*;

/// Global object the hosting page may define
const RUNTIME_CONFIG_KEY: &str = "__PROCORP_CONFIG__";

/// Runtime overrides from `window.__PROCORP_CONFIG__`, if present
pub fn load_runtime_overrides() -> Result<Option<ConfigOverrides>, String> {
    let Some(win) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(RUNTIME_CONFIG_KEY))
        .map_err(|e| format!("Config lookup error: {:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| format!("Config format error: {}", e))
}

/// Build-time configuration with runtime overrides applied
pub fn load_site_config() -> SiteConfig {
    let config = SiteConfig::from_build_env();
    match load_runtime_overrides() {
        Ok(Some(overrides)) => config.merge(overrides),
        Ok(None) => config,
        Err(e) => {
            // The logger is not installed yet at this point
            web_sys::console::warn_1(&format!("[config] ignoring runtime config: {}", e).into());
            config
        }
    }
}
