//! Template discovery and copying
//!
//! This module provides:
//! - Template listing from a local templates directory (TemplateCatalog)
//! - Recursive file tree copying
//! - Resolution of which templates directory to use

pub mod catalog;
pub mod copier;

use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

pub use catalog::{list_templates, Template, TemplateCatalog};
pub use copier::copy_tree;

/// Pick the templates directory for this run
///
/// An explicit path wins, then the product's environment variable, then a
/// `templates/` directory shipped next to the executable, and finally the
/// product's bundled templates directory.
pub fn locate_templates_root<C: ProductConfig>(config: &C, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = std::env::var_os(config.templates_dir_env()).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => config.bundled_templates_dir(),
    }
}
