//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Records go to standard error. The default filter is `info`; `RUST_LOG`
/// overrides it.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
