//! Mutation and persistence of the configuration file.
//!
//! Every change is applied to a copy of the current [`Config`], validated,
//! written to disk, and only then committed to the in-memory model.  A failed
//! validation or write leaves both the file and the model untouched.
use std::path::{Path, PathBuf};

use super::layout::{CONFIG_FILE_NAME, Layout};
use super::validation::Validator;
use super::{Config, canonical};
use crate::error::{FleekError, Result};
use crate::exec::Executor;
use crate::resources::symlink::SymlinkResource;
use crate::resources::{self, Resource as _};

/// How [`ConfigStore::add_program`] treats a program that is already listed.
///
/// Packages are always de-duplicated; programs historically were not, so
/// repeated adds accumulate unless [`ProgramDuplicates::Ignore`] is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgramDuplicates {
    /// Append every time.
    #[default]
    Allow,
    /// Treat an already-listed program like an already-listed package.
    Ignore,
}

/// Whether a mutation runs the validator before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Validate,
    Skip,
}

/// A loaded configuration bound to its on-disk location.
///
/// The location is resolved once, when the store is created, and every
/// write goes back to that same file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    validator: Validator,
    program_duplicates: ProgramDuplicates,
    config: Config,
}

impl ConfigStore {
    /// A store for `config` at its canonical location under `layout`.
    #[must_use]
    pub fn new(layout: &Layout, config: Config) -> Self {
        Self::at(layout.location(&config), config)
    }

    fn at(path: PathBuf, config: Config) -> Self {
        Self {
            path,
            validator: Validator::default(),
            program_duplicates: ProgramDuplicates::default(),
            config,
        }
    }

    /// Read the configuration behind `$HOME/.fleek.yml`.
    ///
    /// The link is resolved here, so later writes land in the file that was
    /// read even if its `flakedir` names some other directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(layout: &Layout) -> Result<Self> {
        let path = resolve_link(&layout.link());
        let text =
            std::fs::read_to_string(&path).map_err(|e| FleekError::io("reading", &path, e))?;
        let config: Config = serde_yaml::from_str(&text)?;
        tracing::debug!(
            "read {} ({} packages, {} programs, {} systems)",
            path.display(),
            config.packages.len(),
            config.programs.len(),
            config.systems.len()
        );
        Ok(Self::at(path, config))
    }

    /// Set how [`ConfigStore::add_program`] handles an already-listed program.
    #[must_use]
    pub const fn with_program_duplicates(mut self, policy: ProgramDuplicates) -> Self {
        self.program_duplicates = policy;
        self
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the store, keeping only the configuration.
    #[must_use]
    pub fn into_config(self) -> Config {
        self.config
    }

    /// The file this configuration is read from and written to.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.path
    }

    /// Directory holding [`ConfigStore::location`].
    #[must_use]
    pub fn user_flake_dir(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// Validate the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::Invalid`] with the first violated rule.
    pub fn validate(&self) -> Result<()> {
        Ok(self.validator.validate(&self.config)?)
    }

    /// Write the current configuration in canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be encoded or written.
    pub fn save(&self) -> Result<()> {
        write(&self.path, &self.config)
    }

    /// Add a package. Already-listed packages are a no-op: nothing is
    /// validated or written.
    ///
    /// # Errors
    ///
    /// Returns a validation or write error; the configuration is unchanged.
    pub fn add_package(&mut self, name: &str) -> Result<()> {
        if self.config.has_package(name) {
            tracing::debug!("package {name} already present");
            return Ok(());
        }
        let mut next = self.config.clone();
        next.packages.push(name.to_string());
        self.commit(next, Gate::Validate)
    }

    /// Remove a package, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::PackageNotFound`] if it is not listed, or a
    /// validation or write error; the configuration is unchanged.
    pub fn remove_package(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.config.packages.iter().position(|p| p == name) else {
            return Err(FleekError::PackageNotFound(name.to_string()));
        };
        let mut next = self.config.clone();
        next.packages.remove(index);
        self.commit(next, Gate::Validate)
    }

    /// Add a program. Whether a listed program is appended again depends on
    /// the store's [`ProgramDuplicates`] policy.
    ///
    /// # Errors
    ///
    /// Returns a validation or write error; the configuration is unchanged.
    pub fn add_program(&mut self, name: &str) -> Result<()> {
        if self.program_duplicates == ProgramDuplicates::Ignore && self.config.has_program(name) {
            tracing::debug!("program {name} already present");
            return Ok(());
        }
        let mut next = self.config.clone();
        next.programs.push(name.to_string());
        self.commit(next, Gate::Validate)
    }

    /// Remove the first occurrence of a program.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::ProgramNotFound`] if it is not listed, or a
    /// validation or write error; the configuration is unchanged.
    pub fn remove_program(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.config.programs.iter().position(|p| p == name) else {
            return Err(FleekError::ProgramNotFound(name.to_string()));
        };
        let mut next = self.config.clone();
        next.programs.remove(index);
        self.commit(next, Gate::Validate)
    }

    /// Mark the configuration as ejected and write it.
    ///
    /// Ejecting is the escape hatch, so it is not gated on validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be encoded or written.
    pub fn eject(&mut self) -> Result<()> {
        let mut next = self.config.clone();
        next.ejected = true;
        self.commit(next, Gate::Skip)
    }

    fn commit(&mut self, next: Config, gate: Gate) -> Result<()> {
        if gate == Gate::Validate {
            self.validator.validate(&next)?;
        }
        write(&self.path, &next)?;
        self.config = next;
        Ok(())
    }
}

/// Follow one level of symlink at `link`; a plain file resolves to itself.
fn resolve_link(link: &Path) -> PathBuf {
    let Ok(target) = std::fs::read_link(link) else {
        return link.to_path_buf();
    };
    match link.parent() {
        Some(dir) if target.is_relative() => dir.join(target),
        _ => target,
    }
}

/// Write `config` in canonical form to `path`.
pub(super) fn write(path: &Path, config: &Config) -> Result<()> {
    let yaml = canonical::to_string(config)?;
    resources::fs::write_file(path, &yaml)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// Clone `repo` into `$HOME/<flake_dir>` and link `$HOME/.fleek.yml` to the
/// `.fleek.yml` inside it.
///
/// The link is only touched after the clone succeeds.
///
/// # Errors
///
/// Returns [`FleekError::Clone`] if git fails, or
/// [`FleekError::InvalidResource`] if the repository has no `.fleek.yml`.
pub fn clone_repo(
    layout: &Layout,
    flake_dir: &str,
    repo: &str,
    executor: &dyn Executor,
) -> Result<()> {
    let dest = layout.user_flake_dir(flake_dir);
    let dest_str = dest.to_string_lossy();
    tracing::debug!("cloning {repo} into {dest_str}");
    executor
        .run("git", &["clone", "-q", repo, &*dest_str])
        .map_err(|e| FleekError::Clone {
            repo: repo.to_string(),
            reason: format!("{e:#}"),
        })?;

    SymlinkResource::new(dest.join(CONFIG_FILE_NAME), layout.link()).ensure()?;
    Ok(())
}
