//! `key=value` argument parsing.

use std::collections::BTreeMap;

use crate::error::PluginError;
use crate::response::Details;

/// Parsed view of a plugin's command-line tokens.
///
/// Keys iterate in sorted order. Built once per invocation and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: BTreeMap<String, String>,
}

impl ParameterMap {
    /// Split every token on its first `=`. Tokens without `=` are dropped and
    /// the first occurrence of a repeated key wins.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeMap::new();
        for token in tokens {
            if let Some((key, value)) = token.as_ref().split_once('=') {
                entries
                    .entry(key.to_owned())
                    .or_insert_with(|| value.to_owned());
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value of a required parameter. Absent and empty values are both missing.
    pub fn require(&self, key: &str) -> Result<&str, PluginError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(PluginError::MissingParameter(key.to_owned())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The whole map as success details.
    pub fn to_details(&self) -> Details {
        self.entries.clone()
    }
}

/// Typed parameters built from a [`ParameterMap`] at the invocation boundary.
pub trait FromParameters: Sized {
    fn from_parameters(params: &ParameterMap) -> Result<Self, PluginError>;
}
