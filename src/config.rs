//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::auction::{ClosurePolicy, IntervalResolver, AUCTION_INTERVAL_VAR};

/// Process-wide operating mode, read from `APP_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    Dev,
    Test,
    #[default]
    Prod,
}

impl AppMode {
    /// Picks the governing-context policy for closure tasks.
    ///
    /// Only `test` ties closures to the creating request, so a harness can
    /// cancel them; every other mode lets the closure outlive the request.
    pub fn closure_policy(self) -> ClosurePolicy {
        match self {
            AppMode::Test => ClosurePolicy::RequestScoped,
            AppMode::Dev | AppMode::Prod => ClosurePolicy::Detached,
        }
    }
}

impl FromStr for AppMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(AppMode::Dev),
            "test" => Ok(AppMode::Test),
            "prod" => Ok(AppMode::Prod),
            other => Err(format!("unknown app mode '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Operating mode
    pub app_mode: AppMode,
    /// Source of the auction lifetime, resolved per created auction
    pub auction_interval: IntervalResolver,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `APP_MODE` - `dev`, `test` or `prod` (default: prod)
    /// - `AUCTION_INTERVAL` - auction lifetime such as `30s` or `2m`, read on
    ///   every creation (default: 2 minutes)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            app_mode: env::var("APP_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            auction_interval: IntervalResolver::from_env(AUCTION_INTERVAL_VAR),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            app_mode: AppMode::Prod,
            auction_interval: IntervalResolver::from_env(AUCTION_INTERVAL_VAR),
        }
    }
}
