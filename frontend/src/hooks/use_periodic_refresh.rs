use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for periodic refresh behavior
#[derive(Clone, PartialEq)]
pub struct PeriodicRefreshConfig {
    pub interval_ms: u32,
    /// Run once on mount instead of waiting a full interval
    pub run_immediately: bool,
}

impl Default for PeriodicRefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: 60000, // 1 minute
            run_immediately: true,
        }
    }
}

/// Hook that calls `refresh_fn` every `interval_ms` while the component is mounted
///
/// The interval is re-armed when the config changes and cancelled on unmount.
#[hook]
pub fn use_periodic_refresh(config: PeriodicRefreshConfig, refresh_fn: Callback<()>) {
    use_effect_with(config, move |config| {
        if config.run_immediately {
            refresh_fn.emit(());
        }

        let interval = Interval::new(config.interval_ms, move || {
            refresh_fn.emit(());
        });
        Logger::debug_with_component(
            "periodic-refresh-hook",
            &format!("Refresh armed every {}ms", config.interval_ms),
        );

        move || {
            drop(interval);
            Logger::debug_with_component("periodic-refresh-hook", "Periodic refresh cleaned up");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = PeriodicRefreshConfig::default();
        assert_eq!(config.interval_ms, 60000);
        assert!(config.run_immediately);
    }
}
