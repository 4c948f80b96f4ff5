use api::config::AppConfig;
use dioxus::prelude::*;

/// Runtime configuration provided by the launcher, or the defaults when no
/// provider is mounted.
pub fn use_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_default()
}
