use log::LevelFilter;

/// `level` sets the global filter; per-module directives from `RUST_LOG` are kept.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
