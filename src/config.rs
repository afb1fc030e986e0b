//! Run configuration for the include builder.
//!
//! The CLI assembles a [`Config`] once at startup; it is immutable for the
//! rest of the run. Configuration covers the WordPress environment to fetch
//! from, optional HTTP Basic Auth credentials for the staging host, and the
//! directory that receives the rendered include files.

// Internal imports (std, crate)
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

// External imports (alphabetized)
use clap::ValueEnum;
use url::Url;

/// Fixed timeout applied to every HTTP request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// WordPress environment to fetch from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// Production site (creativecommons.org)
    Prod,
    /// Staging site (stage.creativecommons.org), behind HTTP Basic Auth
    Stage,
}

impl Environment {
    /// Returns the WordPress domain serving this environment
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Prod => "creativecommons.org",
            Self::Stage => "stage.creativecommons.org",
        }
    }

    /// Returns the environment as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Stage => "stage",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HTTP Basic Auth credentials for the staging host
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Immutable configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the WordPress site, without trailing slash
    pub base_url: String,
    /// Credentials sent with every request (stage only)
    pub credentials: Option<Credentials>,
    /// Debug mode: list fetched entries without writing include files
    pub debug: bool,
    /// Directory receiving the rendered include files
    pub output_dir: PathBuf,
}

impl Config {
    /// Build and validate a run configuration.
    ///
    /// The prod environment must not carry credentials; the stage
    /// environment requires both a username and a password. `base_url`
    /// overrides the environment's `https://{domain}` default (used by
    /// tests to point at a mock server).
    pub fn new(
        env: Environment,
        base_url: Option<Url>,
        username: Option<String>,
        password: Option<String>,
        debug: bool,
        output_dir: PathBuf,
    ) -> Result<Self> {
        let credentials = match env {
            Environment::Prod => {
                if username.is_some() || password.is_some() {
                    return Err(Error::config(
                        "the prod environment does not use HTTP Basic Auth: \
                         do not use the --username and --password options",
                    ));
                }
                None
            }
            Environment::Stage => match (username, password) {
                (Some(username), Some(password)) => Some(Credentials { username, password }),
                _ => {
                    return Err(Error::config(
                        "the stage environment requires both the --username \
                         and --password options for HTTP Basic Auth",
                    ));
                }
            },
        };

        let base_url = match base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => format!("https://{}", env.domain()),
        };

        Ok(Self {
            base_url,
            credentials,
            debug,
            output_dir,
        })
    }
}

/// Read an environment variable, treating empty values as unset
pub fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
