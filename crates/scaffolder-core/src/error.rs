//! Error types for scaffolder-core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using scaffolder-core's error type
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Boxed cause for fixups that can fail on either I/O or parsing
pub type FixupCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a scaffolding run can fail
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Template root is missing or unreadable
    #[error("Cannot read templates from {}", .path.display())]
    TemplatesUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template root exists but holds no template directory
    #[error("No templates found in {}", .path.display())]
    NoTemplates { path: PathBuf },

    /// Requested template label is not in the catalog
    #[error("'{label}' isn't a valid template.")]
    InvalidTemplateSelection {
        label: String,
        available: Vec<String>,
    },

    /// Project name fails the package name grammar
    #[error("'{name}' isn't a valid project name.")]
    InvalidProjectName { name: String },

    /// Package manager is not one of the supported ones
    #[error("'{name}' isn't a valid package manager.")]
    InvalidPackageManager { name: String },

    /// I/O failure while creating the project folder or copying files
    #[error("Failed to copy {}", .path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// package.json or .gitignore rewrite failed
    #[error("Failed to update {}", .path.display())]
    FixupFailed {
        path: PathBuf,
        #[source]
        source: FixupCause,
    },

    /// `<pm> --version` did not succeed
    #[error("'{name} --version' did not succeed")]
    PackageManagerUnavailable { name: String },

    /// Subprocess could not be spawned or exited non-zero
    #[error("'{program}' {}", describe_exit(.code))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        #[source]
        source: Option<io::Error>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "did not run to completion".to_string(),
    }
}

impl ScaffoldError {
    /// Short stage headline shown before the detailed message
    pub fn headline(&self) -> String {
        match self {
            Self::TemplatesUnavailable { .. } | Self::NoTemplates { .. } => {
                "Loading templates failed!".to_string()
            }
            Self::InvalidTemplateSelection { .. } => "Selecting template failed!".to_string(),
            Self::InvalidProjectName { .. } => "Project name is invalid!".to_string(),
            Self::InvalidPackageManager { .. } => "Selecting package manager failed!".to_string(),
            Self::CopyFailed { .. } => "Copying files failed!".to_string(),
            Self::FixupFailed { .. } => "Overwriting package name failed!".to_string(),
            Self::PackageManagerUnavailable { name } => {
                format!("You haven't installed the {} package manager!", name)
            }
            Self::CommandFailed { .. } => "Installing dependencies failed!".to_string(),
        }
    }
}
