//! Host capabilities the option defaults depend on.
//!
//! Defaults for the job name and container image are derived from the
//! wall clock and the invoking user. Both lookups go through [`Environment`]
//! so resolution can be made deterministic.

use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the invoking user's name.
pub const USER_ENV_VAR: &str = "USER";

/// Source of the user identity and current time used when computing defaults.
pub trait Environment {
    /// The invoking user's name, or `None` if it is not known.
    fn current_user(&self) -> Option<String>;

    /// Nanoseconds since the Unix epoch.
    fn now_nanos(&self) -> u128;
}

/// Reads `$USER` from the process environment and time from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn current_user(&self) -> Option<String> {
        std::env::var(USER_ENV_VAR).ok()
    }

    fn now_nanos(&self) -> u128 {
        now()
    }
}

/// An [`Environment`] that always answers with the values it was built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub user: Option<String>,
    pub now_nanos: u128,
}

impl FixedEnvironment {
    pub fn new(user: Option<&str>, now_nanos: u128) -> Self {
        Self {
            user: user.map(str::to_string),
            now_nanos,
        }
    }
}

impl Environment for FixedEnvironment {
    fn current_user(&self) -> Option<String> {
        self.user.clone()
    }

    fn now_nanos(&self) -> u128 {
        self.now_nanos
    }
}

/// Current time in nanoseconds since the Unix epoch.
///
/// A clock set before the epoch reads as zero.
pub fn now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
