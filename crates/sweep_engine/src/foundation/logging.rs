//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter.
///
/// `RUST_LOG` still wins when it is set. Calling this twice is harmless:
/// the logger installed first stays in place.
pub fn init_with_level(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if let Err(err) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("Keeping the existing logger: {err}");
    }
}
