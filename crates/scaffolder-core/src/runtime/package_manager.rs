//! Supported package managers and their availability

use crate::error::ScaffoldError;
use crate::runtime::command;
use std::fmt;
use std::str::FromStr;

/// Package managers that can install a scaffolded project's dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments that install a project's declared dependencies
    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// Command line that runs a package.json script
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            other => format!("{} {}", other.program(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.program() == s)
            .ok_or_else(|| ScaffoldError::InvalidPackageManager {
                name: s.to_string(),
            })
    }
}

/// Availability check result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if a package manager is available
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    check_program(package_manager.program())
}

/// Check `program`; available means `--version` exited with status 0
pub fn check_program(program: &str) -> RuntimeInfo {
    let available = command::probe_available(program);
    RuntimeInfo {
        name: program.to_string(),
        version: available.then(|| command::probe_version(program)).flatten(),
        available,
    }
}
