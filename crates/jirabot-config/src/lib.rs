//! Config module.

use std::env;

/// Jira logo, used when the project has no avatar.
pub const JIRA_LOGO: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAACRElEQVRYhbWXsUscQRTGf4iIyHHIISIWIsHisMgfkNIiBJFwiKQIkipVqpA/wEZEggSxEkmZwiKI5A84REKKkIMQrINYBQmHBDmEHJdNMW+42dk3d3O76wcDu2/e973vZvfN7EF+PAfaMjYL6AzFJFBRYh0gkdEBpryciuQVwjPgFugCu068CvQcAz1g2pnfEc6taOTGL6dIAjxw5nad+FsnvuhxrosYuPbElrz5Rc8Ucu9yfhcxsAncYZZ4fwTeO+HcUcILWgFqOXg1si9vFBrAXB7iEMySfYQZzGCeWxdoAq+Bh8BYjoJjwn0jWrYrqsOIbdIvUQLseTmPgHXgiYx1ibnYU3RuYpyfKMQ/mNWx+KzkfHHmZ4Tj55zGGNhQiAlw5OQ8VeYbzvxRQCNqUxoHLgMCa07eRyd+4sTXAtwrYCLGAJje1URugLrkVIHvMuyLVZccjfsitrhFMyD0k36bTtA/cOZkTuOckaOTFtA7IgEuSG9ONeBHILctWrnwGNO/mvA3zAk4LddaThfTpoXwKiBuVyL0yxPhloLtAUVCY7us4hb7IxQ/KLu4xWFE8cP7Kg6mld4PKH5BvoNrZBMfBphohKnFMAusyvU48ClgoA3M34eBUynwUu6ngK8BE1Gn3ihYccR79Jd5nuyXsx0rZRo498Q7mK8dMDudZuC8rOLLgQI7Ts5xIGe5DANbinCP9AfmEul/SnZslWHgTBFuKnna8a3lpRCzadSVWMiAj6GPIMbAX+/+H9BS8loyN4ibwX9j/jIXDkk+pgAAAABJRU5ErkJggg==";

/// Default maximum length for descriptions and comment bodies.
pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 140;

/// Default excluded source user (a GitLab bridge posting its own notifications).
pub const DEFAULT_EXCLUDED_SOURCE_USER: &str = "gitlab";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
    /// Log a line for each ignored event.
    pub log_ignored_events: bool,
    /// Also dump the payload of ignored events.
    pub log_ignored_payloads: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Max length for descriptions and comment bodies.
    pub description_max_length: usize,
    /// Message icon when the project has no avatar.
    pub fallback_icon_url: String,
    /// Changelog fields to render. Empty means all fields.
    pub changelog_fields: Vec<String>,
}

/// Bot configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Identifier of the user whose events are always ignored.
    pub excluded_source_user: String,
    /// Rendering options.
    pub render: RenderConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            excluded_source_user: env_to_str(
                "JIRABOT_EXCLUDED_SOURCE_USER",
                DEFAULT_EXCLUDED_SOURCE_USER,
            ),
            render: RenderConfig {
                description_max_length: env_to_usize(
                    "JIRABOT_DESCRIPTION_MAX_LENGTH",
                    DEFAULT_DESCRIPTION_MAX_LENGTH,
                ),
                fallback_icon_url: env_to_str("JIRABOT_FALLBACK_ICON_URL", JIRA_LOGO),
                changelog_fields: env_to_list("JIRABOT_CHANGELOG_FIELDS"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("JIRABOT_LOGGING_USE_BUNYAN", false),
                log_ignored_events: env_to_bool("JIRABOT_LOG_IGNORED_EVENTS", true),
                log_ignored_payloads: env_to_bool("JIRABOT_LOG_IGNORED_PAYLOADS", false),
            },
            version,
        }
    }

    /// Is the changelog field rendered?
    pub fn renders_changelog_field(&self, field: &str) -> bool {
        self.render.changelog_fields.is_empty()
            || self.render.changelog_fields.iter().any(|f| f == field)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_source_user: DEFAULT_EXCLUDED_SOURCE_USER.into(),
            render: RenderConfig {
                description_max_length: DEFAULT_DESCRIPTION_MAX_LENGTH,
                fallback_icon_url: JIRA_LOGO.into(),
                changelog_fields: vec![],
            },
            logging: LoggingConfig {
                use_bunyan: false,
                log_ignored_events: true,
                log_ignored_payloads: false,
            },
            version: "0.0.0".into(),
        }
    }
}

/// Unset gives `default`, an unparsable value gives 0 so validation rejects it.
fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.trim().parse().unwrap_or(0))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| parse_bool(&e)).unwrap_or(default)
}

fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn env_to_list(name: &str) -> Vec<String> {
    parse_list(&env_to_str(name, ""))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
