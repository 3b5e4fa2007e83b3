//! Environment variable lookup and parsing.
//!
//! Configuration is read through [`Env`] rather than `std::env` directly so
//! that loaders can be exercised in tests with a fixed set of variables.

use crate::error::ConfigError;
use std::collections::HashMap;
use std::str::FromStr;

/// Source of configuration variables.
#[derive(Debug, Clone)]
pub enum Env {
    /// The current process environment
    Process,
    /// A fixed set of variables
    Fixed(HashMap<String, String>),
}

impl Env {
    /// Read from the process environment.
    #[must_use]
    pub const fn process() -> Self {
        Self::Process
    }

    /// Read from a fixed set of variables.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Get a variable, treating blank values as unset.
    #[must_use]
    pub fn optional(&self, name: &str) -> Option<String> {
        let value = match self {
            Self::Process => std::env::var(name).ok(),
            Self::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Get a variable that must be set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the variable is unset or blank.
    pub fn require(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name).ok_or_else(|| ConfigError::missing(name))
    }

    /// Parse a variable, falling back to `default` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the variable is set but does not parse.
    pub fn parse_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(val) => val
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string())),
            None => Ok(default),
        }
    }

    /// Parse an optional variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the variable is set but does not parse.
    pub fn parse_optional<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(name)
            .map(|val| {
                val.trim()
                    .parse()
                    .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_unset() {
        let env = Env::from_pairs([("EMPTY", ""), ("SPACES", "   "), ("SET", "value")]);
        assert_eq!(env.optional("EMPTY"), None);
        assert_eq!(env.optional("SPACES"), None);
        assert_eq!(env.optional("SET").as_deref(), Some("value"));
    }

    #[test]
    fn test_require() {
        let env = Env::from_pairs([("PRESENT", "x")]);
        assert_eq!(env.require("PRESENT").unwrap(), "x");
        assert_eq!(
            env.require("ABSENT").unwrap_err(),
            ConfigError::missing("ABSENT")
        );
    }

    #[test]
    fn test_parse_or() {
        let env = Env::from_pairs([("ATTEMPTS", " 5 "), ("BAD", "five")]);
        assert_eq!(env.parse_or("ATTEMPTS", 3u32).unwrap(), 5);
        assert_eq!(env.parse_or("UNSET", 3u32).unwrap(), 3);
        assert!(matches!(
            env.parse_or("BAD", 3u32),
            Err(ConfigError::Invalid { ref name, .. }) if name == "BAD"
        ));
    }

    #[test]
    fn test_parse_optional() {
        let env = Env::from_pairs([("PORT", "3128"), ("BAD_PORT", "http")]);
        assert_eq!(env.parse_optional::<u16>("PORT").unwrap(), Some(3128));
        assert_eq!(env.parse_optional::<u16>("UNSET").unwrap(), None);
        assert!(env.parse_optional::<u16>("BAD_PORT").is_err());
    }
}
