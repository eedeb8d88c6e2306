//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a rewrap.toml, and if present we load settings from there.
//! This provides the wrapper call name and the indentation the host editor would use.

use crate::document::IndentationPreference;
use facet::Facet;
use std::fs;
use std::path::Path;

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from rewrap.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "Control".to_string())]
    /// Name of the wrapper call inserted by a wrap, renamed by the user afterwards.
    pub wrapper: String,
    #[facet(default = true)]
    /// Indent with spaces rather than tabs.
    pub insert_spaces: bool,
    #[facet(default = 4)]
    /// Width of one indentation level when indenting with spaces.
    pub tab_size: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from rewrap.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new("rewrap.toml"))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| Self::parse(&contents))
            .unwrap_or_default()
    }

    #[must_use]
    /// Parses TOML preferences, filling any missing keys with defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// The indentation preference these settings describe.
    pub fn indentation(&self) -> IndentationPreference {
        IndentationPreference {
            uses_spaces: self.insert_spaces,
            width: self.tab_size,
        }
    }
}

impl Default for Config {
    /// The `#[facet(default)]` values, read by parsing an empty file.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
