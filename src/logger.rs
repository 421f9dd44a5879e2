//! Logger bootstrap for binaries and tests. The library itself only emits
//! through the `log` facade.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` (overridable through `RUST_LOG`). The table
/// only reports warnings such as delete misses; its resize traces stay off.
/// Safe to call repeatedly; only the first call has an effect.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chained_hashtable", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed (e.g. by a test harness).
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{Level, Metadata};

    use super::*;

    fn table_enabled(level: Level) -> bool {
        log::logger().enabled(
            &Metadata::builder()
                .level(level)
                .target("chained_hashtable::hash_table")
                .build(),
        )
    }

    #[test]
    fn table_warnings_pass_and_resize_traces_do_not() {
        initialize_logger();
        initialize_logger();
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(table_enabled(Level::Warn));
            assert!(!table_enabled(Level::Debug));
        }
    }
}
