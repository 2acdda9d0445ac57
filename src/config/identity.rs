//! Resolve the [`System`] record for the machine fleek is running on.
use super::{GitIdentity, System};
use crate::error::{FleekError, Result};
use crate::exec::Executor;
use crate::platform::Platform;

/// Environment lookup, injectable so tests need not touch the process env.
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Builds a [`System`] from the current user, host and platform.
#[derive(Debug)]
pub struct Resolver<'a> {
    executor: &'a dyn Executor,
    platform: Platform,
    env: EnvLookup,
}

impl<'a> Resolver<'a> {
    /// Resolver for the running process.
    #[must_use]
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self {
            executor,
            platform: Platform::detect(),
            env: process_env,
        }
    }

    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub const fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    /// Login name from `USER`, then `LOGNAME`.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::Identity`] if neither variable is set.
    pub fn username(&self) -> Result<String> {
        ["USER", "LOGNAME"]
            .into_iter()
            .filter_map(self.env)
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .ok_or_else(|| FleekError::Identity("could not determine username".to_string()))
    }

    /// Host name from the `hostname` command, then `HOSTNAME`.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::Identity`] if no non-empty name is found.
    pub fn hostname(&self) -> Result<String> {
        self.executor
            .run("hostname", &[])
            .inspect_err(|e| tracing::debug!("hostname command failed: {e:#}"))
            .ok()
            .map(|result| result.stdout.trim().to_string())
            .filter(|h| !h.is_empty())
            .or_else(|| (self.env)("HOSTNAME").map(|h| h.trim().to_string()))
            .filter(|h| !h.is_empty())
            .ok_or_else(|| FleekError::Identity("could not determine hostname".to_string()))
    }

    /// Build the [`System`] for this machine with the given git identity.
    ///
    /// Architecture and OS come from the platform as-is; unsupported values
    /// are left for validation to reject.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::Identity`] if the username or hostname cannot be
    /// determined.
    pub fn resolve(&self, git_name: &str, git_email: &str) -> Result<System> {
        let username = self.username()?;
        let hostname = self.hostname()?;
        tracing::debug!(
            "resolved system {username}@{hostname} ({} {})",
            self.platform.os,
            self.platform.arch
        );
        Ok(System {
            hostname,
            username,
            arch: self.platform.arch.to_string(),
            os: self.platform.os.to_string(),
            git: GitIdentity {
                name: git_name.to_string(),
                email: git_email.to_string(),
            },
        })
    }
}

/// Resolve the current machine's [`System`].
///
/// # Errors
///
/// Returns [`FleekError::Identity`] if the username or hostname cannot be
/// determined.
pub fn new_system(git_name: &str, git_email: &str, executor: &dyn Executor) -> Result<System> {
    Resolver::new(executor).resolve(git_name, git_email)
}
