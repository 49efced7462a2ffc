use std::sync::Once;

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

static INIT: Once = Once::new();

pub struct Logger;

impl Logger {
    /// Send `tracing` events (including the domain crate's) to the browser
    /// console and install the panic hook. Later calls are no-ops.
    pub fn init(max_level: Level) {
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            let config = WASMLayerConfigBuilder::new().set_max_level(max_level).build();
            tracing_wasm::set_as_global_default_with_config(config);
        });
    }

    pub fn debug_with_component(component: &str, message: &str) {
        tracing::debug!(component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        tracing::info!(component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        tracing::warn!(component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        tracing::error!(component, "{}", message);
    }
}
