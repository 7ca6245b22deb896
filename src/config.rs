//! Harness configuration
//!
//! The CLI collects raw values (flags with environment fallbacks);
//! `HarnessConfig::resolve` validates them and fills in defaults.

use crate::wordlists::DEFAULT_WORD_LIST;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration that cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("could not determine the number of logical cores: {0}")]
    Parallelism(#[source] io::Error),
}

/// Validated harness settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Word list the harness (and the reference solver) reads
    pub word_list: PathBuf,
    /// Most solver processes running at once
    pub threads: NonZeroUsize,
}

impl HarnessConfig {
    /// Resolve raw settings
    ///
    /// A missing word list defaults to `WORDS`; a missing thread count
    /// defaults to the number of logical cores.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroThreads` for an explicit zero, or
    /// `ConfigError::Parallelism` if the core count is needed but unknown.
    pub fn resolve(word_list: Option<PathBuf>, threads: Option<usize>) -> Result<Self, ConfigError> {
        let threads = match threads {
            Some(n) => NonZeroUsize::new(n).ok_or(ConfigError::ZeroThreads)?,
            None => std::thread::available_parallelism().map_err(ConfigError::Parallelism)?,
        };

        Ok(Self {
            word_list: word_list.unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST)),
            threads,
        })
    }
}
