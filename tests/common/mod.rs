// Shared helpers for integration tests.
//
// Provides a temporary home directory, a scripted process executor and a
// fluent builder so each integration test can set up an isolated fleek
// installation without touching the real `$HOME`.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::bail;
use fleek_cli::config::layout::Layout;
use fleek_cli::config::store::ConfigStore;
use fleek_cli::config::{Config, GitIdentity, System};
use fleek_cli::exec::{ExecResult, Executor};
use fleek_cli::logging::Logger;

/// A machine that passes validation.
pub fn linux_system() -> System {
    System {
        hostname: "box".to_string(),
        username: "jane".to_string(),
        arch: "x86_64".to_string(),
        os: "linux".to_string(),
        git: GitIdentity {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        },
    }
}

/// One scripted reply: what a command prints, or that it fails.
#[derive(Debug, Clone)]
pub enum Reply {
    Stdout(String),
    Fail(String),
    /// Succeed and, like `git clone`, leave a `.fleek.yml` with these
    /// contents in the directory named by the last argument.
    Clone(String),
}

/// An [`Executor`] that answers from a script and records every call.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Executor for ScriptedExecutor {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        let line = format!("{program} {}", args.join(" ")).trim_end().to_string();
        self.calls.lock().expect("calls lock").push(line.clone());
        let reply = self.replies.lock().expect("replies lock").pop_front();
        let stdout = match reply {
            Some(Reply::Stdout(out)) => out,
            Some(Reply::Fail(err)) => bail!("{line} failed (exit 1): {err}"),
            Some(Reply::Clone(contents)) => {
                let dest = Path::new(args.last().expect("clone destination"));
                std::fs::create_dir_all(dest).expect("create clone dir");
                std::fs::write(dest.join(".fleek.yml"), contents).expect("write cloned config");
                String::new()
            }
            None => bail!("unexpected call: {line}"),
        };
        Ok(ExecResult {
            stdout,
            stderr: String::new(),
            success: true,
            code: Some(0),
        })
    }
}

/// An isolated home directory backed by a [`tempfile::TempDir`].
pub struct IntegrationTestContext {
    pub home: tempfile::TempDir,
    pub layout: Layout,
    pub log: Logger,
}

impl IntegrationTestContext {
    /// An empty home with no configuration.
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp dir");
        let layout = Layout::new(home.path());
        Self {
            home,
            layout,
            log: Logger::new("test"),
        }
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    /// `$HOME/<flakedir>/.fleek.yml` for `config`.
    pub fn location(&self, config: &Config) -> PathBuf {
        self.layout.location(config)
    }

    /// Re-read the configuration through `$HOME/.fleek.yml`.
    pub fn reload(&self) -> Config {
        ConfigStore::open(&self.layout)
            .expect("open config")
            .into_config()
    }

    /// Raw text of the file behind the home link.
    pub fn read_link_target(&self) -> String {
        std::fs::read_to_string(self.layout.link()).expect("read config")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
    config: Option<Config>,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
            config: None,
        }
    }

    /// Install `config` at its location and link it from `$HOME`.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> IntegrationTestContext {
        if let Some(config) = self.config {
            let location = self.ctx.layout.location(&config);
            std::fs::create_dir_all(location.parent().expect("flake dir")).expect("mkdir");
            ConfigStore::new(&self.ctx.layout, config)
                .save()
                .expect("save config");
            link(&location, &self.ctx.layout.link());
        }
        self.ctx
    }
}

#[cfg(unix)]
fn link(source: &Path, target: &Path) {
    std::os::unix::fs::symlink(source, target).expect("symlink");
}

#[cfg(windows)]
fn link(source: &Path, target: &Path) {
    std::os::windows::fs::symlink_file(source, target).expect("symlink");
}
