//! Interval Resolver Module
//!
//! Derives how long an auction stays open from configuration.

use std::env;
use std::time::Duration;

/// Environment variable holding the auction lifetime.
pub const AUCTION_INTERVAL_VAR: &str = "AUCTION_INTERVAL";

/// Lifetime used when the configured value is absent or unusable.
pub const DEFAULT_AUCTION_INTERVAL: Duration = Duration::from_secs(2 * 60);

// == Parse Interval ==
/// Parses a human readable duration (`30ms`, `45s`, `2m`, `1h 30m`).
///
/// Absent, empty and malformed values degrade to
/// [`DEFAULT_AUCTION_INTERVAL`] instead of failing. A well-formed zero is
/// kept; such an auction closes as soon as its task runs.
pub fn parse_interval(raw: Option<&str>) -> Duration {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| humantime::parse_duration(v).ok())
        .unwrap_or(DEFAULT_AUCTION_INTERVAL)
}

// == Interval Resolver ==
/// Where an auction's lifetime comes from.
///
/// Resolved once per created auction, so a changed variable applies to the
/// next creation without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalResolver {
    /// Read and parse the named environment variable on every resolve
    FromEnv(String),
    /// Always the same duration
    Fixed(Duration),
}

impl IntervalResolver {
    pub fn from_env(var: impl Into<String>) -> Self {
        IntervalResolver::FromEnv(var.into())
    }

    pub fn fixed(interval: Duration) -> Self {
        IntervalResolver::Fixed(interval)
    }

    /// Returns the lifetime to use for an auction created now.
    pub fn resolve(&self) -> Duration {
        match self {
            IntervalResolver::FromEnv(var) => parse_interval(env::var(var).ok().as_deref()),
            IntervalResolver::Fixed(interval) => *interval,
        }
    }
}

impl Default for IntervalResolver {
    fn default() -> Self {
        IntervalResolver::from_env(AUCTION_INTERVAL_VAR)
    }
}
