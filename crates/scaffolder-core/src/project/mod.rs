//! Project creation
//!
//! This module provides:
//! - Package name validation
//! - Project request types and destination resolution
//! - Project initialization (folder, copy, fixups)
//! - Dependency installation

pub mod initializer;
pub mod install;
pub mod name;
pub mod request;

pub use initializer::initialize;
pub use install::install_dependencies;
pub use name::is_valid_name;
pub use request::{ProjectRequest, ProjectTarget};
