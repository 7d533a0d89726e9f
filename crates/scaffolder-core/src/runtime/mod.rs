//! External tool execution
//!
//! This module provides:
//! - Probing and running external programs (package managers)
//! - The supported package manager set and availability checks

pub mod command;
pub mod package_manager;

pub use command::{probe_available, probe_version, run_command, CommandOutcome};
pub use package_manager::{check_package_manager, check_program, PackageManager, RuntimeInfo};
