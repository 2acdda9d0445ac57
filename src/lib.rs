//! Configuration core for fleek, a friendlier front end to home-manager.
//!
//! Everything fleek knows about a user's setup lives in one YAML file,
//! `.fleek.yml`, kept inside the home-manager flake directory and linked from
//! `$HOME/.fleek.yml`.
//!
//! - **[`config`]**: the typed model, validation, canonical YAML, mutation
//!   and persistence
//! - **[`resources`]**: idempotent `check + apply` primitives (the home link)
//! - **[`exec`]**: process execution behind a mockable trait
//! - **[`commands`]**: subcommand handlers wired up by the `fleek` binary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod resources;
