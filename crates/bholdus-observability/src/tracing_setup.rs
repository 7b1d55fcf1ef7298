//! `tracing` subscriber setup for the CLI and embedding services.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log level per component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Global default level: "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// Override per component: crate name → level
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    /// Emit JSON structured logs (true) or human-readable text (false)
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: BTreeMap::new(),
            json: false,
        }
    }
}

impl LogConfig {
    /// `EnvFilter` directive string, e.g. `"info,bholdus_events=debug"`.
    pub fn directives(&self) -> String {
        let mut directives = self.level.clone();
        for (component, level) in &self.components {
            directives.push_str(&format!(",{}={}", component.replace('-', "_"), level));
        }
        directives
    }

    /// `RUST_LOG` when set, otherwise [`directives`](Self::directives).
    /// A directive string that does not parse keeps only the global level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.directives()))
            .unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install the global subscriber. Output goes to stderr; stdout carries
/// command output. Call once at startup.
pub fn init_tracing(config: &LogConfig) {
    let output = if config.json {
        fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(output)
        .with(config.env_filter())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_names_become_targets() {
        let mut config = LogConfig::default();
        config
            .components
            .insert("bholdus-events".into(), "debug".into());
        assert_eq!(config.directives(), "info,bholdus_events=debug");
    }

    #[test]
    fn overrides_parse_as_filter_directives() {
        let mut config = LogConfig {
            level: "warn".into(),
            ..LogConfig::default()
        };
        config.components.insert("bholdus-events".into(), "trace".into());
        config.components.insert("bholdus-cli".into(), "info".into());
        assert_eq!(config.directives(), "warn,bholdus_cli=info,bholdus_events=trace");
        assert!(EnvFilter::try_new(config.directives()).is_ok());

        config.components.insert("bholdus-events".into(), "loud".into());
        assert!(EnvFilter::try_new(config.directives()).is_err());
    }

    #[test]
    fn yaml_defaults() {
        let config: LogConfig = serde_yaml::from_str("json: true\n").unwrap();
        assert_eq!(config.level, "info");
        assert!(config.json);
        assert!(config.components.is_empty());
    }
}
