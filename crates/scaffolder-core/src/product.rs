//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface each scaffolding binary implements to
//! configure the shared workflow for its own templates and branding.

use crate::runtime::PackageManager;
use std::path::{Path, PathBuf};

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name, version)
/// - Where its templates live
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Version printed by `--version` and in the intro banner
    fn version(&self) -> &'static str;

    /// Environment variable name for overriding the templates directory
    fn templates_dir_env(&self) -> &'static str;

    /// Templates directory used when nothing overrides it
    fn bundled_templates_dir(&self) -> PathBuf;

    /// Generate the "next steps" instructions after project creation
    ///
    /// `installed` is false when the dependency install was skipped.
    fn next_steps(&self, dir: &Path, package_manager: PackageManager, installed: bool)
        -> Vec<String>;
}
