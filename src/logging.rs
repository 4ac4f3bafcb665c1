use std::sync::Once;

/// Logger configuration.
///
/// `level` takes precedence over the `RUST_LOG` environment variable
/// which in turn takes precedence over the default `info` level.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub level: Option<log::LevelFilter>,
}

static INIT: Once = Once::new();

/// Initialize the global logger. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(level) = config.level {
            builder.filter_level(level);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.format_timestamp_millis();

        // a logger may already be installed by the test harness
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}
