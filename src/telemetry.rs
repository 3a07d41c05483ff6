//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `server.log_level` is the filter.
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if uses_json_output(config) {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(true).try_init()
    }
}

/// Production always logs JSON; elsewhere the `json_logs` flag decides.
fn uses_json_output(config: &AppConfig) -> bool {
    config.is_production() || config.features.json_logs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn development_logs_text_by_default() {
        assert!(!uses_json_output(&AppConfig::default()));
    }

    #[test]
    fn json_flag_switches_output_outside_production() {
        let mut config = AppConfig::default();
        config.features.json_logs = true;
        assert!(uses_json_output(&config));
    }

    #[test]
    fn production_always_logs_json() {
        let mut config = AppConfig::default();
        config.server.environment = Environment::Production;
        assert!(uses_json_output(&config));
    }
}
