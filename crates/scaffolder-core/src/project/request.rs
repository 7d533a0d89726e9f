//! Project request types and destination resolution

use crate::error::{Result, ScaffoldError};
use crate::project::name::is_valid_name;
use crate::runtime::PackageManager;
use crate::templates::Template;
use std::path::{Component, Path, PathBuf};

/// Where the project goes and what its package is called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// Final path component of `destination`
    pub name: String,
    pub destination: PathBuf,
}

impl ProjectTarget {
    /// Resolve user input against `cwd`
    ///
    /// `input` may be a nested or absolute path; the package name is its last
    /// component and must be a valid package name.
    pub fn resolve(cwd: &Path, input: &str) -> Result<Self> {
        let destination = resolve_path(cwd, input);
        let name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !is_valid_name(&name) {
            return Err(ScaffoldError::InvalidProjectName { name });
        }

        Ok(Self { name, destination })
    }
}

/// Everything needed to scaffold one project
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub name: String,
    pub destination: PathBuf,
    pub template: Template,
    /// `None` until the user has picked one (or when install is skipped)
    pub package_manager: Option<PackageManager>,
}

impl ProjectRequest {
    pub fn new(target: ProjectTarget, template: Template) -> Self {
        Self {
            name: target.name,
            destination: target.destination,
            template,
            package_manager: None,
        }
    }

    pub fn with_package_manager(mut self, package_manager: Option<PackageManager>) -> Self {
        self.package_manager = package_manager;
        self
    }
}

/// Join `input` onto `cwd` and fold away `.` and `..` without touching the filesystem
pub fn resolve_path(cwd: &Path, input: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in cwd.join(input).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_resolve_path_normalizes() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(cwd, "app"), PathBuf::from("/work/app"));
        assert_eq!(resolve_path(cwd, "./a/../app/"), PathBuf::from("/work/app"));
        assert_eq!(resolve_path(cwd, "../app"), PathBuf::from("/app"));
        assert_eq!(resolve_path(cwd, "/abs/app"), PathBuf::from("/abs/app"));
        assert_eq!(resolve_path(cwd, "."), PathBuf::from("/work"));
    }

    #[cfg(unix)]
    #[test]
    fn test_target_name_is_last_component() {
        let target = ProjectTarget::resolve(Path::new("/work"), "apps/web/my-app").unwrap();
        assert_eq!(target.name, "my-app");
        assert_eq!(target.destination, PathBuf::from("/work/apps/web/my-app"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dot_uses_current_directory_name() {
        let target = ProjectTarget::resolve(Path::new("/work/site"), ".").unwrap();
        assert_eq!(target.name, "site");
        assert_eq!(target.destination, PathBuf::from("/work/site"));
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let cwd = std::env::temp_dir();
        for input in ["MyApp", "nested/Bad", "has space"] {
            let err = ProjectTarget::resolve(&cwd, input).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidProjectName { .. }),
                "{input} should be rejected"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_root_has_no_name() {
        let err = ProjectTarget::resolve(Path::new("/"), "..").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidProjectName { name } if name.is_empty()));
    }
}
