use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use daybook_aggregate::{parse_roles, AnalyzerConfig, Grouping, ScorePolicy};
use daybook_protocol::RoleFlags;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("unknown log format `{other}`")),
        }
    }
}

/// Settings read from `DAYBOOK_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    stopwords_path: Option<PathBuf>,
    analyzer: AnalyzerConfig,
    log_format: LogFormat,
}

impl Config {
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let stopwords_path = lookup("DAYBOOK_STOPWORDS")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let score_policy = parse_or(&lookup, "DAYBOOK_SCORE_POLICY", ScorePolicy::default())?;
        let grouping = parse_or(&lookup, "DAYBOOK_GROUPING", Grouping::default())?;
        let log_format = parse_or(&lookup, "DAYBOOK_LOG_FORMAT", LogFormat::default())?;

        let allowed_roles = match lookup("DAYBOOK_ALLOWED_ROLES") {
            Some(raw) => parse_roles(&raw).map_err(|error| ConfigError::Invalid {
                name: "DAYBOOK_ALLOWED_ROLES",
                source: anyhow::Error::new(error),
            })?,
            None => RoleFlags::default(),
        };

        Ok(Self {
            stopwords_path,
            analyzer: AnalyzerConfig {
                score_policy,
                grouping,
                allowed_roles,
            },
            log_format,
        })
    }

    pub fn stopwords_path(&self) -> Option<&PathBuf> {
        self.stopwords_path.as_ref()
    }

    pub fn analyzer(&self) -> &AnalyzerConfig {
        &self.analyzer
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn set_stopwords_path(&mut self, path: PathBuf) {
        self.stopwords_path = Some(path);
    }

    pub fn analyzer_mut(&mut self) -> &mut AnalyzerConfig {
        &mut self.analyzer
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    match lookup(name) {
        Some(raw) => raw.parse::<T>().map_err(|error| ConfigError::Invalid {
            name,
            source: error.into(),
        }),
        None => Ok(default),
    }
}
