//! Bling levels and the package/program bundles each one pulls in.
use std::fmt;
use std::str::FromStr;

const LOW_PACKAGES: &[&str] = &["htop", "git", "github-cli", "glab"];
const DEFAULT_PACKAGES: &[&str] = &["fzf", "ripgrep", "vscode"];
const HIGH_PACKAGES: &[&str] = &[
    "lazygit", "jq", "yq", "neovim", "neofetch", "btop", "cheat",
];
const LOW_PROGRAMS: &[&str] = &["starship"];
const DEFAULT_PROGRAMS: &[&str] = &["direnv"];
const HIGH_PROGRAMS: &[&str] = &["exa", "bat", "atuin", "zoxide"];

/// How many optional extras a configuration includes.
///
/// Levels are cumulative: `default` includes everything in `low`, and `high`
/// includes everything in `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bling {
    Low,
    Default,
    High,
}

impl Bling {
    /// All levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Default, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Default => "default",
            Self::High => "high",
        }
    }

    /// Packages installed at this level.
    #[must_use]
    pub fn packages(self) -> Vec<&'static str> {
        self.collect(LOW_PACKAGES, DEFAULT_PACKAGES, HIGH_PACKAGES)
    }

    /// Programs enabled at this level.
    #[must_use]
    pub fn programs(self) -> Vec<&'static str> {
        self.collect(LOW_PROGRAMS, DEFAULT_PROGRAMS, HIGH_PROGRAMS)
    }

    fn collect(
        self,
        low: &[&'static str],
        default: &[&'static str],
        high: &[&'static str],
    ) -> Vec<&'static str> {
        let tiers = [(Self::Low, low), (Self::Default, default), (Self::High, high)];
        tiers
            .into_iter()
            .filter(|(level, _)| *level <= self)
            .flat_map(|(_, items)| items.iter().copied())
            .collect()
    }
}

impl fmt::Display for Bling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown bling level '{s}'"))
    }
}
