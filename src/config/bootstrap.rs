//! First-run setup: write a starter configuration or adopt a cloned one.
use std::path::Path;

use super::layout::Layout;
use super::store::{self, ConfigStore};
use super::{Config, System};
use crate::error::{FleekError, Result};
use crate::exec::Executor;
use crate::resources::{self, Resource as _};
use crate::resources::symlink::SymlinkResource;

/// Flake directory used when none is given, relative to `$HOME`.
pub const DEFAULT_FLAKE_DIR: &str = ".config/home-manager";

/// The starter configuration for a single `system`.
#[must_use]
pub fn sample_config(flake_dir: &str, system: System) -> Config {
    let cd_target = if Path::new(flake_dir).is_absolute() {
        flake_dir.to_string()
    } else {
        format!("~/{flake_dir}")
    };
    Config {
        flake_dir: flake_dir.to_string(),
        unfree: true,
        shell: "bash".to_string(),
        bling: "default".to_string(),
        repository: String::new(),
        name: "My Fleek Configuration".to_string(),
        packages: vec!["helix".to_string()],
        programs: vec!["dircolors".to_string()],
        aliases: [("cdfleek".to_string(), format!("cd {cd_target}"))].into(),
        paths: vec!["$HOME/bin".to_string(), "$HOME/.local/bin".to_string()],
        ejected: false,
        systems: vec![system],
    }
}

/// Write the starter configuration and link `$HOME/.fleek.yml` to it.
///
/// Neither an existing configuration file nor a regular file sitting at
/// `$HOME/.fleek.yml` is replaced unless `force` is set. Nothing is written
/// when either check fails.
///
/// # Errors
///
/// Returns [`FleekError::RefuseOverwrite`] if either file exists and `force`
/// is not set, or an I/O error if the directory, file or link cannot be
/// created.
pub fn write_sample_config(
    layout: &Layout,
    flake_dir: &str,
    system: System,
    force: bool,
) -> Result<ConfigStore> {
    let config = sample_config(flake_dir, system);
    let location = layout.location(&config);
    let link = layout.link();
    let link_is_file = link.symlink_metadata().is_ok_and(|m| m.is_file());

    if !force {
        if location.exists() {
            return Err(FleekError::RefuseOverwrite { path: location });
        }
        if link_is_file {
            return Err(FleekError::RefuseOverwrite { path: link });
        }
    }

    let dir = layout.user_flake_dir(flake_dir);
    std::fs::create_dir_all(&dir).map_err(|e| FleekError::io("creating directory", &dir, e))?;
    store::write(&location, &config)?;
    if link_is_file {
        tracing::warn!("replacing {}", link.display());
        resources::fs::remove_existing(&link)?;
    }
    SymlinkResource::new(location, link).ensure()?;
    tracing::info!("wrote sample configuration to {}", dir.display());

    Ok(ConfigStore::new(layout, config))
}

/// Clone an existing configuration repository and open it.
///
/// # Errors
///
/// Returns a clone, link or parse error.
pub fn join(
    layout: &Layout,
    flake_dir: &str,
    repo: &str,
    executor: &dyn Executor,
) -> Result<ConfigStore> {
    store::clone_repo(layout, flake_dir, repo, executor)?;
    ConfigStore::open(layout)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::test_helpers::linux_system;
    use crate::config::validation::Validator;
    use crate::exec::test_helpers::MockExecutor;

    #[test]
    fn sample_config_is_valid() {
        let config = sample_config(DEFAULT_FLAKE_DIR, linux_system());
        assert_eq!(Validator::default().validate(&config), Ok(()));
        assert_eq!(config.shell, "bash");
        assert_eq!(config.bling, "default");
        assert_eq!(config.aliases["cdfleek"], "cd ~/.config/home-manager");
    }

    #[test]
    fn absolute_flake_dir_alias() {
        let config = sample_config("/srv/flake", linux_system());
        assert_eq!(config.aliases["cdfleek"], "cd /srv/flake");
    }

    #[cfg(unix)]
    #[test]
    fn writes_file_and_links_home() {
        let home = tempfile::tempdir().unwrap();
        let layout = Layout::new(home.path());

        let store = write_sample_config(&layout, DEFAULT_FLAKE_DIR, linux_system(), false).unwrap();

        let location = store.location();
        assert!(location.is_file());
        assert_eq!(std::fs::read_link(layout.link()).unwrap(), location);
        let reopened = ConfigStore::open(&layout).unwrap();
        assert_eq!(reopened.config(), store.config());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let home = tempfile::tempdir().unwrap();
        let layout = Layout::new(home.path());
        let location = layout.user_flake_dir(DEFAULT_FLAKE_DIR).join(".fleek.yml");
        std::fs::create_dir_all(location.parent().unwrap()).unwrap();
        std::fs::write(&location, b"name: mine\n# keep me\n").unwrap();

        let err = write_sample_config(&layout, DEFAULT_FLAKE_DIR, linux_system(), false).unwrap_err();

        assert!(matches!(err, FleekError::RefuseOverwrite { ref path } if *path == location));
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read(&location).unwrap(), b"name: mine\n# keep me\n");
        assert!(layout.link().symlink_metadata().is_err());
    }

    #[test]
    fn refuses_to_replace_regular_file_at_home_link() {
        let home = tempfile::tempdir().unwrap();
        let layout = Layout::new(home.path());
        std::fs::write(layout.link(), "# my hand-written config\n").unwrap();

        let err = write_sample_config(&layout, DEFAULT_FLAKE_DIR, linux_system(), false).unwrap_err();

        assert!(matches!(err, FleekError::RefuseOverwrite { ref path } if *path == layout.link()));
        assert_eq!(
            std::fs::read_to_string(layout.link()).unwrap(),
            "# my hand-written config\n"
        );
        assert!(!layout.user_flake_dir(DEFAULT_FLAKE_DIR).exists());
    }

    #[cfg(unix)]
    #[test]
    fn force_replaces_regular_file_at_home_link() {
        let home = tempfile::tempdir().unwrap();
        let layout = Layout::new(home.path());
        std::fs::write(layout.link(), "# my hand-written config\n").unwrap();

        let store = write_sample_config(&layout, DEFAULT_FLAKE_DIR, linux_system(), true).unwrap();

        assert_eq!(std::fs::read_link(layout.link()).unwrap(), store.location());
    }

    #[cfg(unix)]
    #[test]
    fn replaces_existing_home_link() {
        let home = tempfile::tempdir().unwrap();
        let layout = Layout::new(home.path());
        let old = home.path().join("old.yml");
        std::fs::write(&old, "old").unwrap();
        std::os::unix::fs::symlink(&old, layout.link()).unwrap();

        let store = write_sample_config(&layout, DEFAULT_FLAKE_DIR, linux_system(), false).unwrap();

        assert_eq!(std::fs::read_link(layout.link()).unwrap(), store.location());
        assert_eq!(std::fs::read_to_string(&old).unwrap(), "old");
    }

    #[test]
    fn force_overwrites_existing_file() {
        let home = tempfile::tempdir().unwrap();
        let layout = Layout::new(home.path());
        let location = layout.user_flake_dir(DEFAULT_FLAKE_DIR).join(".fleek.yml");
        std::fs::create_dir_all(location.parent().unwrap()).unwrap();
        std::fs::write(&location, "name: mine\n").unwrap();

        write_sample_config(&layout, DEFAULT_FLAKE_DIR, linux_system(), true).unwrap();

        let text = std::fs::read_to_string(&location).unwrap();
        assert!(text.contains("name: My Fleek Configuration\n"));
    }

    #[test]
    fn join_propagates_clone_failure() {
        let home = tempfile::tempdir().unwrap();
        let exec = MockExecutor::fail("fatal: repository not found");
        let err = join(&Layout::new(home.path()), DEFAULT_FLAKE_DIR, "nope", &exec).unwrap_err();
        assert!(matches!(err, FleekError::Clone { .. }));
    }
}
