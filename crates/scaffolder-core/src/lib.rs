//! Scaffolder Core - Shared library for project scaffolding CLIs
//!
//! This library copies a template directory into a new project folder, renames
//! the package in its `package.json`, and optionally installs dependencies with
//! a package manager. Binaries plug in their own branding and template location
//! through [`ProductConfig`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template listing, tree copying, name validation,
//!   external command execution
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, `ProjectRequest` and
//!   project initialization for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{project, templates::TemplateCatalog, ProjectRequest, ProjectTarget};
//!
//! let catalog = TemplateCatalog::load(&templates_root)?;
//! let target = ProjectTarget::resolve(&cwd, "my-app")?;
//! let request = ProjectRequest::new(target, catalog.select("node")?.clone());
//! project::initialize(&request).await?;
//! ```

pub mod error;
pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use project::{initialize, install_dependencies, is_valid_name, ProjectRequest, ProjectTarget};
pub use runtime::{probe_available, run_command, CommandOutcome, PackageManager};
pub use templates::{copy_tree, list_templates, Template, TemplateCatalog};

#[cfg(feature = "tui")]
pub use tui::run;
