//! The `.fleek.yml` configuration model.
//!
//! [`Config`] is the typed form of the file. Everything that reads or writes
//! it goes through [`store::ConfigStore`], which pairs the model with a
//! [`layout::Layout`] and a [`validation::Validator`].
pub mod bling;
pub mod bootstrap;
pub mod canonical;
pub mod identity;
pub mod layout;
pub mod store;
pub mod validation;

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Options merged into the home-manager flake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flake directory, relative to `$HOME` unless absolute.
    #[serde(rename = "flakedir")]
    pub flake_dir: String,
    /// Allow packages with unfree licenses.
    pub unfree: bool,
    /// `bash` or `zsh`.
    pub shell: String,
    /// `low`, `default` or `high`.
    pub bling: String,
    /// Remote repository the flake directory is cloned from.
    #[serde(rename = "repo")]
    pub repository: String,
    /// Display name of this configuration.
    pub name: String,
    /// Nix packages to install.
    #[serde(deserialize_with = "null_as_empty")]
    pub packages: Vec<String>,
    /// home-manager programs to enable.
    #[serde(deserialize_with = "null_as_empty")]
    pub programs: Vec<String>,
    /// Shell alias name to command.
    #[serde(deserialize_with = "null_as_empty")]
    pub aliases: BTreeMap<String, String>,
    /// Extra `PATH` entries, in order.
    #[serde(deserialize_with = "null_as_empty")]
    pub paths: Vec<String>,
    /// Set once the user opts out of further management.
    pub ejected: bool,
    /// Machines this configuration is applied to.
    #[serde(deserialize_with = "null_as_empty")]
    pub systems: Vec<System>,
}

/// One managed machine/user pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct System {
    /// Machine host name.
    pub hostname: String,
    /// Login name of the managed user.
    pub username: String,
    /// CPU architecture, e.g. `x86_64`.
    pub arch: String,
    /// Operating system, `linux` or `darwin`.
    pub os: String,
    /// Identity used for git commits on this machine.
    pub git: GitIdentity,
}

/// Git author identity for a [`System`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitIdentity {
    /// `user.name`
    pub name: String,
    /// `user.email`
    pub email: String,
}

impl System {
    /// Home directory of this system's user.
    ///
    /// ```
    /// use fleek_cli::config::System;
    ///
    /// let mac = System { username: "jane".into(), os: "darwin".into(), ..System::default() };
    /// assert_eq!(mac.home_dir(), std::path::Path::new("/Users/jane"));
    /// ```
    #[must_use]
    pub fn home_dir(&self) -> PathBuf {
        let base = if self.os == "darwin" { "/Users" } else { "/home" };
        PathBuf::from(base).join(&self.username)
    }
}

impl Config {
    /// Whether `name` is in the package list.
    #[must_use]
    pub fn has_package(&self, name: &str) -> bool {
        self.packages.iter().any(|p| p == name)
    }

    /// Whether `name` is in the program list.
    #[must_use]
    pub fn has_program(&self, name: &str) -> bool {
        self.programs.iter().any(|p| p == name)
    }
}

/// Empty collections are written as a bare key, so read YAML null as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
