//! Project creation: folder, template copy and post-copy fixups

use crate::error::{FixupCause, Result, ScaffoldError};
use crate::project::request::ProjectRequest;
use crate::templates::copier;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name templates use for `.gitignore`, which does not survive packaging
pub const GITIGNORE_PLACEHOLDER: &str = "_gitignore";

/// Create the project described by `request`
///
/// Returns the copied files relative to the template root. Stops at the
/// first failing step; files already written are left in place.
pub async fn initialize(request: &ProjectRequest) -> Result<Vec<PathBuf>> {
    create_folder(&request.destination).await?;
    let copied_files = copy_template(&request.template.root_path, &request.destination).await?;
    apply_fixups(&request.destination, &request.name).await?;
    Ok(copied_files)
}

/// Create `path` (and parents) unless it already exists
pub async fn create_folder(path: &Path) -> Result<()> {
    let exists = fs::try_exists(path).await.unwrap_or(false);
    if !exists {
        fs::create_dir_all(path)
            .await
            .map_err(|source| ScaffoldError::CopyFailed {
                path: path.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

/// Copy the template tree on the blocking pool
pub async fn copy_template(source: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    let (src, dst) = (source.to_path_buf(), destination.to_path_buf());
    tokio::task::spawn_blocking(move || copier::copy_tree(&src, &dst))
        .await
        .map_err(|e| ScaffoldError::CopyFailed {
            path: source.to_path_buf(),
            source: io::Error::other(e),
        })?
}

/// Post-copy fixups, in order: package name, then `.gitignore`
pub async fn apply_fixups(project_dir: &Path, name: &str) -> Result<()> {
    rewrite_package_name(&project_dir.join("package.json"), name).await?;
    restore_gitignore(project_dir).await?;
    Ok(())
}

/// Set the `name` field of a package.json, keeping every other key in place
pub async fn rewrite_package_name(package_json: &Path, name: &str) -> Result<()> {
    let fixup_failed = |source: FixupCause| ScaffoldError::FixupFailed {
        path: package_json.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(package_json)
        .await
        .map_err(|e| fixup_failed(e.into()))?;
    let mut pkg: Value = serde_json::from_str(&content).map_err(|e| fixup_failed(e.into()))?;

    let fields = pkg
        .as_object_mut()
        .ok_or_else(|| fixup_failed("package.json is not a JSON object".into()))?;
    fields.insert("name".to_string(), Value::String(name.to_string()));

    let mut output = serde_json::to_string_pretty(&pkg).map_err(|e| fixup_failed(e.into()))?;
    output.push('\n');
    fs::write(package_json, output)
        .await
        .map_err(|e| fixup_failed(e.into()))?;

    Ok(())
}

/// Rename `_gitignore` to `.gitignore` when the template ships one
pub async fn restore_gitignore(project_dir: &Path) -> Result<()> {
    let placeholder = project_dir.join(GITIGNORE_PLACEHOLDER);
    if !fs::try_exists(&placeholder).await.unwrap_or(false) {
        return Ok(());
    }

    fs::rename(&placeholder, project_dir.join(".gitignore"))
        .await
        .map_err(|e| ScaffoldError::FixupFailed {
            path: placeholder.clone(),
            source: e.into(),
        })
}
