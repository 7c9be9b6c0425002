// infogain/src/logger.rs
//! Logging setup for the CLI. All log output goes to stderr so that stdout
//! carries only computed values.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// An explicit `level` overrides `RUST_LOG`; otherwise `RUST_LOG` is honored
/// and defaults to `warn`. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
