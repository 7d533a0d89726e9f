//! Template discovery from a local templates directory

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};

/// A selectable template: one directory under the templates root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Directory name, used as the template identifier
    pub label: String,
    /// Absolute path to the template's files
    pub root_path: PathBuf,
}

/// List the templates found directly under `root`, sorted by label
///
/// Only directories count as templates; stray files are skipped.
pub fn list_templates(root: &Path) -> Result<Vec<Template>> {
    let unavailable = |source| ScaffoldError::TemplatesUnavailable {
        path: root.to_path_buf(),
        source,
    };

    let mut templates = Vec::new();
    for entry in std::fs::read_dir(root).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        // Follows symlinks, so a linked template directory still counts
        if !entry.path().is_dir() {
            continue;
        }
        templates.push(Template {
            label: entry.file_name().to_string_lossy().into_owned(),
            root_path: entry.path(),
        });
    }

    templates.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(templates)
}

/// Templates loaded from one root directory
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Load the catalog, failing if the root holds no template at all
    pub fn load(root: &Path) -> Result<Self> {
        let templates = list_templates(root)?;
        if templates.is_empty() {
            return Err(ScaffoldError::NoTemplates {
                path: root.to_path_buf(),
            });
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn labels(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.label.clone()).collect()
    }

    /// Look up a template by its label
    pub fn find(&self, label: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.label == label)
    }

    /// Like [`find`](Self::find), but a miss is an `InvalidTemplateSelection`
    pub fn select(&self, label: &str) -> Result<&Template> {
        self.find(label)
            .ok_or_else(|| ScaffoldError::InvalidTemplateSelection {
                label: label.to_string(),
                available: self.labels(),
            })
    }
}
