//! Validation of a [`Config`] snapshot.
//!
//! Rules run in a fixed order and the first violation wins: flake directory,
//! shell, bling level, then each system's architecture followed by its OS.
use super::Config;
use crate::error::ConfigError;

/// The accepted values for each enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Accepted `shell` values.
    pub shells: &'static [&'static str],
    /// Accepted `bling` values.
    pub bling_levels: &'static [&'static str],
    /// Accepted `systems[].arch` values.
    pub architectures: &'static [&'static str],
    /// Accepted `systems[].os` values.
    pub operating_systems: &'static [&'static str],
}

impl Rules {
    /// The value sets fleek supports.
    pub const STANDARD: Self = Self {
        shells: &["bash", "zsh"],
        bling_levels: &["low", "default", "high"],
        architectures: &["aarch64", "x86_64"],
        operating_systems: &["linux", "darwin"],
    };
}

impl Default for Rules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A single validation rule.
pub trait ConfigValidator {
    /// Check `config` against this rule.
    ///
    /// # Errors
    ///
    /// Returns the violated rule.
    fn validate(&self, config: &Config, rules: &Rules) -> Result<(), ConfigError>;

    /// Human-readable name of the rule.
    fn name(&self) -> &'static str;
}

#[derive(Debug)]
struct FlakeDirValidator;

impl ConfigValidator for FlakeDirValidator {
    fn validate(&self, config: &Config, _rules: &Rules) -> Result<(), ConfigError> {
        if config.flake_dir.is_empty() {
            return Err(ConfigError::MissingFlakeDir);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "flakedir"
    }
}

#[derive(Debug)]
struct ShellValidator;

impl ConfigValidator for ShellValidator {
    fn validate(&self, config: &Config, rules: &Rules) -> Result<(), ConfigError> {
        if !rules.shells.contains(&config.shell.as_str()) {
            return Err(ConfigError::InvalidShell {
                value: config.shell.clone(),
                valid: rules.shells.join(", "),
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}

#[derive(Debug)]
struct BlingValidator;

impl ConfigValidator for BlingValidator {
    fn validate(&self, config: &Config, rules: &Rules) -> Result<(), ConfigError> {
        if !rules.bling_levels.contains(&config.bling.as_str()) {
            return Err(ConfigError::InvalidBling {
                value: config.bling.clone(),
                valid: rules.bling_levels.join(", "),
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bling"
    }
}

/// Checks every system, architecture before OS.
#[derive(Debug)]
struct SystemsValidator;

impl ConfigValidator for SystemsValidator {
    fn validate(&self, config: &Config, rules: &Rules) -> Result<(), ConfigError> {
        for system in &config.systems {
            if !rules.architectures.contains(&system.arch.as_str()) {
                return Err(ConfigError::InvalidArch {
                    hostname: system.hostname.clone(),
                    value: system.arch.clone(),
                    valid: rules.architectures.join(", "),
                });
            }
            if !rules.operating_systems.contains(&system.os.as_str()) {
                return Err(ConfigError::InvalidOs {
                    hostname: system.hostname.clone(),
                    value: system.os.clone(),
                    valid: rules.operating_systems.join(", "),
                });
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "systems"
    }
}

/// Rule order is part of the contract: callers see the most fundamental
/// failure first.
const VALIDATORS: &[&dyn ConfigValidator] = &[
    &FlakeDirValidator,
    &ShellValidator,
    &BlingValidator,
    &SystemsValidator,
];

/// Runs every rule against a configuration snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    rules: Rules,
}

impl Validator {
    /// A validator checking against `rules`.
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The value sets in use.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Validate `config`, returning the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] in rule order.
    pub fn validate(&self, config: &Config) -> Result<(), ConfigError> {
        for validator in VALIDATORS {
            if let Err(e) = validator.validate(config, &self.rules) {
                tracing::debug!("validation rule '{}' failed: {e}", validator.name());
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::{linux_system, valid_config};
    use crate::config::System;

    fn validate(config: &Config) -> Result<(), ConfigError> {
        Validator::default().validate(config)
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(validate(&valid_config()), Ok(()));
    }

    #[test]
    fn every_enumerated_value_passes() {
        let rules = Rules::STANDARD;
        for shell in rules.shells {
            for bling in rules.bling_levels {
                for arch in rules.architectures {
                    for os in rules.operating_systems {
                        let mut config = valid_config();
                        config.shell = (*shell).to_string();
                        config.bling = (*bling).to_string();
                        config.systems[0].arch = (*arch).to_string();
                        config.systems[0].os = (*os).to_string();
                        assert_eq!(validate(&config), Ok(()), "{shell}/{bling}/{arch}/{os}");
                    }
                }
            }
        }
    }

    #[test]
    fn empty_flake_dir_is_rejected() {
        let mut config = valid_config();
        config.flake_dir = String::new();
        assert_eq!(validate(&config), Err(ConfigError::MissingFlakeDir));
    }

    #[test]
    fn unknown_shell_is_rejected() {
        let mut config = valid_config();
        config.shell = "fish".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidShell { value, .. }) if value == "fish"
        ));
    }

    #[test]
    fn unknown_bling_is_rejected() {
        let mut config = valid_config();
        config.bling = "extreme".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidBling { .. })
        ));
    }

    #[test]
    fn unknown_arch_is_rejected() {
        let mut config = valid_config();
        config.systems[0].arch = "riscv64".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidArch { value, .. }) if value == "riscv64"
        ));
    }

    #[test]
    fn unknown_os_is_rejected() {
        let mut config = valid_config();
        config.systems[0].os = "windows".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidOs { .. })
        ));
    }

    #[test]
    fn values_are_case_sensitive() {
        let mut config = valid_config();
        config.shell = "Bash".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn check_order_is_flakedir_shell_bling_arch_os() {
        let mut config = valid_config();
        config.flake_dir = String::new();
        config.shell = "fish".to_string();
        config.bling = "extreme".to_string();
        config.systems[0].arch = "riscv64".to_string();
        config.systems[0].os = "windows".to_string();
        assert_eq!(validate(&config), Err(ConfigError::MissingFlakeDir));

        config.flake_dir = "flake".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidShell { .. })));

        config.shell = "bash".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidBling { .. })));

        config.bling = "low".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidArch { .. })));

        config.systems[0].arch = "aarch64".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidOs { .. })));
    }

    #[test]
    fn systems_are_checked_in_order() {
        let mut config = valid_config();
        config.systems = vec![
            System {
                hostname: "first".to_string(),
                os: "plan9".to_string(),
                ..linux_system()
            },
            System {
                hostname: "second".to_string(),
                arch: "mips".to_string(),
                ..linux_system()
            },
        ];
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidOs { hostname, .. }) if hostname == "first"
        ));
    }

    #[test]
    fn no_systems_passes() {
        let mut config = valid_config();
        config.systems.clear();
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn custom_rules_are_honoured() {
        const FISH_ONLY: Rules = Rules {
            shells: &["fish"],
            ..Rules::STANDARD
        };
        let mut config = valid_config();
        config.shell = "fish".to_string();
        assert_eq!(Validator::new(FISH_ONLY).validate(&config), Ok(()));
        assert!(validate(&config).is_err());
    }

    #[test]
    fn error_lists_valid_values() {
        let mut config = valid_config();
        config.bling = "none".to_string();
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fleek.yml: invalid bling level, valid levels are: low, default, high"
        );
    }
}
