//! Logger bootstrap for the CLI, the bench runner and the WASM module.
//!
//! The solver itself only emits `log` records: the grid at `debug`, search
//! counters at `debug`, and the word count at `info`. Which of those are shown is
//! decided here, once per process.
//!
//! On native builds, setting `BOGGLE_DEBUG` (to anything) lowers the level to
//! `Debug`, and `RUST_LOG` overrides both. In the browser the JS caller passes the
//! flag to `initialize` instead.

/// Environment variable that switches the native CLI to debug logging.
#[cfg(not(target_arch = "wasm32"))]
pub const DEBUG_ENV_VAR: &str = "BOGGLE_DEBUG";

/// `true` when [`DEBUG_ENV_VAR`] is set in the environment, whatever its value.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Install the global logger at `Debug` when `debug_enabled`, else `Info`.
///
/// Only the first call installs anything; later calls are no-ops.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    init_console(debug_enabled);

    #[cfg(not(target_arch = "wasm32"))]
    init_env_logger(debug_enabled);
}

#[cfg(target_arch = "wasm32")]
fn init_console(debug_enabled: bool) {
    let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

    if let Err(e) = console_log::init_with_level(level) {
        // already installed, or no console: say so once and run silent
        let msg = format!("boggle: console logging unavailable ({e})");
        web_sys::console::error_1(&msg.into());
        return;
    }
    log::info!("console logger at {level:?}");
}

#[cfg(not(target_arch = "wasm32"))]
fn init_env_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // CLI output goes to stdout; log lines stay terse on stderr
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger at {level:?} ({DEBUG_ENV_VAR} set: {})", debug_requested());
    }
}
