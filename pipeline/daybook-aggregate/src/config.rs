use std::str::FromStr;

use daybook_protocol::RoleFlags;
use thiserror::Error;

use crate::merge::{Grouping, Merger, ScorePolicy};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingError {
    #[error("unknown score policy `{0}` (expected `average` or `sum`)")]
    ScorePolicy(String),
    #[error("unknown grouping `{0}` (expected `seed` or `transitive`)")]
    Grouping(String),
    #[error("unknown dependency role `{0}`")]
    Role(String),
}

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzerConfig {
    pub score_policy: ScorePolicy,
    pub grouping: Grouping,
    pub allowed_roles: RoleFlags,
}

impl AnalyzerConfig {
    pub fn merger(&self) -> Merger {
        Merger::new(self.score_policy, self.grouping)
    }
}

impl FromStr for ScorePolicy {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" | "avg" | "mean" => Ok(ScorePolicy::Average),
            "sum" => Ok(ScorePolicy::Sum),
            _ => Err(SettingError::ScorePolicy(s.to_string())),
        }
    }
}

impl FromStr for Grouping {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" | "seed-tokens" | "single-pass" => Ok(Grouping::SeedTokens),
            "transitive" => Ok(Grouping::Transitive),
            _ => Err(SettingError::Grouping(s.to_string())),
        }
    }
}

/// Parses a comma-separated list of dependency labels, e.g. `DOBJ,IOBJ,POBJ`.
pub fn parse_roles(list: &str) -> Result<RoleFlags, SettingError> {
    let mut roles = RoleFlags::empty();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let flag = RoleFlags::from_name(&name.to_ascii_uppercase())
            .ok_or_else(|| SettingError::Role(name.to_string()))?;
        roles |= flag;
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.score_policy, ScorePolicy::Average);
        assert_eq!(config.grouping, Grouping::SeedTokens);
        assert_eq!(config.allowed_roles, RoleFlags::OBJECTS);
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!("Sum".parse::<ScorePolicy>(), Ok(ScorePolicy::Sum));
        assert_eq!(" transitive ".parse::<Grouping>(), Ok(Grouping::Transitive));
        assert_eq!(
            "median".parse::<ScorePolicy>(),
            Err(SettingError::ScorePolicy("median".to_string()))
        );
    }

    #[test]
    fn test_parse_roles() {
        assert_eq!(parse_roles("dobj, POBJ"), Ok(RoleFlags::DOBJ | RoleFlags::POBJ));
        assert_eq!(parse_roles("objects,nsubj"), Ok(RoleFlags::OBJECTS | RoleFlags::NSUBJ));
        assert_eq!(parse_roles("AMOD"), Err(SettingError::Role("AMOD".to_string())));
    }
}
