use std::sync::Once;

use log::LevelFilter;

/// Logger setup for the studio binary.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`
/// with the GPU stack's modules capped at `Warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"turtle_studio=debug,wgpu_core=warn"`.
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Modules that log per-frame detail at `info`.
const NOISY_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

/// Installs the global logger. Later calls do nothing.
///
/// Call first thing in `main` so startup failures get reported.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        match &filter {
            Some(spec) => {
                builder.parse_filters(spec);
            }
            None => {
                builder.filter_level(config.default_level);
                for module in NOISY_MODULES {
                    builder.filter_module(module, LevelFilter::Warn);
                }
            }
        }
        builder.write_style(config.write_style);

        // A test harness may have installed its own logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized (filter: {})", filter.as_deref().unwrap_or("default"));
        }
    });
}

fn resolve_filter(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit
        .or(env)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_environment() {
        let got = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(got.as_deref(), Some("debug"));
    }

    #[test]
    fn environment_used_when_no_explicit_filter() {
        assert_eq!(resolve_filter(None, Some("warn".into())).as_deref(), Some("warn"));
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        assert_eq!(resolve_filter(None, Some("  ".into())), None);
        assert_eq!(resolve_filter(None, None), None);
    }
}
