//! Detection of the running operating system and architecture.
use std::fmt;

/// Operating system family, named the way `.fleek.yml` spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// `linux`
    Linux,
    /// `darwin` (macOS)
    Darwin,
    /// Any other target; carries the Rust `target_os` name.
    Other(&'static str),
}

impl Os {
    /// Map a Rust `target_os` value to the configuration vocabulary.
    #[must_use]
    pub const fn from_target(target: &'static str) -> Self {
        match target.as_bytes() {
            b"linux" => Self::Linux,
            b"macos" => Self::Darwin,
            _ => Self::Other(target),
        }
    }

    /// Name as written in `.fleek.yml`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Other(name) => *name,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Operating system family.
    pub os: Os,
    /// CPU architecture (`x86_64`, `aarch64`, ...).
    pub arch: &'static str,
}

impl Platform {
    /// Detect the current platform.
    ///
    /// Unsupported targets are reported as-is; validation is where they get
    /// rejected.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            os: Os::from_target(std::env::consts::OS),
            arch: normalize_arch(std::env::consts::ARCH),
        }
    }

    /// Create a platform with explicit values (for testing).
    #[must_use]
    pub const fn new(os: Os, arch: &'static str) -> Self {
        Self { os, arch }
    }
}

/// Normalize architecture aliases to the names nix uses.
const fn normalize_arch(arch: &'static str) -> &'static str {
    match arch.as_bytes() {
        b"arm64" => "aarch64",
        b"amd64" => "x86_64",
        _ => arch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_from_target_maps_macos_to_darwin() {
        assert_eq!(Os::from_target("macos"), Os::Darwin);
        assert_eq!(Os::from_target("linux"), Os::Linux);
        assert_eq!(Os::from_target("windows"), Os::Other("windows"));
    }

    #[test]
    fn os_display() {
        assert_eq!(Os::Linux.to_string(), "linux");
        assert_eq!(Os::Darwin.to_string(), "darwin");
        assert_eq!(Os::Other("freebsd").to_string(), "freebsd");
    }

    #[test]
    fn normalize_arch_aliases() {
        assert_eq!(normalize_arch("arm64"), "aarch64");
        assert_eq!(normalize_arch("amd64"), "x86_64");
        assert_eq!(normalize_arch("x86_64"), "x86_64");
        assert_eq!(normalize_arch("riscv64"), "riscv64");
    }

    #[test]
    fn platform_detect_matches_target() {
        let p = Platform::detect();
        assert_eq!(p.os == Os::Darwin, cfg!(target_os = "macos"));
        assert!(!p.arch.is_empty());
    }

    #[test]
    fn platform_new_darwin() {
        let p = Platform::new(Os::Darwin, "aarch64");
        assert_eq!(p.os, Os::Darwin);
        assert_eq!(p.arch, "aarch64");
    }
}
