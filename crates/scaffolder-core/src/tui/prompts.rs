//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::{self, is_valid_name, ProjectRequest, ProjectTarget};
use crate::runtime::PackageManager;
use crate::templates::{self, Template, TemplateCatalog};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Project name or path, relative to the current directory
    pub project_name: Option<String>,

    /// Template name to use
    pub template: Option<String>,

    /// Package manager to install dependencies with
    pub package_manager: Option<String>,

    /// Skip dependency installation
    pub skip_install: bool,
}

/// How a run ended when nothing failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Cancelled,
}

/// Answer to an interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

/// Unwrap a prompt answer or end the run as cancelled
macro_rules! answer {
    ($prompted:expr) => {
        match $prompted {
            Prompted::Value(value) => value,
            Prompted::Cancelled => return cancel(),
        }
    };
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<Outcome> {
    cliclack::intro(format!("{} v{}", config.display_name(), config.version()).blue())?;

    // Checked up front so a bad flag is reported before any prompt
    let requested = parse_package_manager(args.package_manager.as_deref())?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    // Step 1: Project name (flag if valid, otherwise prompt)
    let target = match args.project_name.as_deref() {
        Some(input) => match ProjectTarget::resolve(&cwd, input) {
            Ok(target) => target,
            Err(e) => {
                cliclack::log::error(e.to_string())?;
                answer!(prompt_project_name(&cwd)?)
            }
        },
        None => answer!(prompt_project_name(&cwd)?),
    };

    // Step 2: Load templates
    let root = templates::locate_templates_root(config, args.template_dir.as_deref());
    let catalog = TemplateCatalog::load(&root)?;

    // Step 3: Select template
    let template = match args.template.as_deref() {
        Some(label) => catalog.select(label)?.clone(),
        None => answer!(select_template(&catalog)?),
    };

    let request = ProjectRequest::new(target, template);

    // Step 4: Create project
    create_project(&request).await?;

    // Step 5: Pick a package manager
    if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
        finish(config, &request.destination, requested.unwrap_or_default(), false)?;
        return Ok(Outcome::Created);
    }

    let package_manager = match requested {
        Some(pm) => pm,
        None => {
            if !answer!(confirm_install()?) {
                finish(config, &request.destination, PackageManager::default(), false)?;
                return Ok(Outcome::Created);
            }
            answer!(select_package_manager()?)
        }
    };
    let request = request.with_package_manager(Some(package_manager));

    // Step 6: Install dependencies
    install(&request).await?;

    finish(config, &request.destination, package_manager, true)?;
    Ok(Outcome::Created)
}

/// Whether prompts can be answered in this session
fn is_interactive() -> bool {
    io::stdin().is_terminal() && console::Term::stderr().is_term()
}

/// Show a prompt, mapping Esc / Ctrl+C to `Cancelled`
///
/// Without a terminal nobody can answer, so the prompt is reported and the
/// run ends as cancelled before anything else happens.
fn interact<T>(message: &str, prompt: impl FnOnce() -> io::Result<T>) -> Result<Prompted<T>> {
    if !is_interactive() {
        cliclack::log::warning(format!("{} (needs an interactive terminal)", message))?;
        return Ok(Prompted::Cancelled);
    }

    match prompt() {
        Ok(value) => Ok(Prompted::Value(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Prompted::Cancelled),
        Err(e) => Err(e.into()),
    }
}

fn cancel() -> Result<Outcome> {
    cliclack::outro_cancel("Operation cancelled!")?;
    Ok(Outcome::Cancelled)
}

fn prompt_project_name(cwd: &Path) -> Result<Prompted<ProjectTarget>> {
    const MESSAGE: &str = "Your project name:";

    let input = interact(MESSAGE, || {
        cliclack::input(MESSAGE)
            .placeholder("project")
            .validate(|value: &String| {
                let name = Path::new(value)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if value.is_empty() {
                    Err("Project name is required!")
                } else if !is_valid_name(&name) {
                    Err("Project name is invalid!")
                } else {
                    Ok(())
                }
            })
            .interact::<String>()
    })?;

    Ok(match input {
        Prompted::Value(input) => Prompted::Value(ProjectTarget::resolve(cwd, &input)?),
        Prompted::Cancelled => Prompted::Cancelled,
    })
}

fn select_template(catalog: &TemplateCatalog) -> Result<Prompted<Template>> {
    const MESSAGE: &str = "Select template:";

    let templates = catalog.templates();
    let selected = interact(MESSAGE, || {
        // Indices as values, so the select does not need to own templates
        let mut select = cliclack::select(MESSAGE).initial_value(0usize);
        for (idx, template) in templates.iter().enumerate() {
            select = select.item(idx, &template.label, "");
        }
        select.interact()
    })?;

    Ok(match selected {
        Prompted::Value(idx) => Prompted::Value(templates[idx].clone()),
        Prompted::Cancelled => Prompted::Cancelled,
    })
}

fn confirm_install() -> Result<Prompted<bool>> {
    const MESSAGE: &str = "Installing dependencies now?";

    interact(MESSAGE, || {
        cliclack::confirm(MESSAGE).initial_value(true).interact()
    })
}

fn select_package_manager() -> Result<Prompted<PackageManager>> {
    const MESSAGE: &str = "Select package manager:";

    interact(MESSAGE, || {
        let mut select = cliclack::select(MESSAGE).initial_value(PackageManager::default());
        for pm in PackageManager::ALL {
            select = select.item(pm, pm.program(), "");
        }
        select.interact()
    })
}

/// Parse the package manager flag; an unknown name is reported, not fatal
fn parse_package_manager(flag: Option<&str>) -> Result<Option<PackageManager>> {
    let Some(name) = flag else {
        return Ok(None);
    };

    match name.parse::<PackageManager>() {
        Ok(pm) => Ok(Some(pm)),
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            Ok(None)
        }
    }
}

async fn create_project(request: &ProjectRequest) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Copying files...");

    match project::initialize(request).await {
        Ok(copied_files) => {
            spinner.stop(format!(
                "Copying files succeeded! ({} files from '{}' into {})",
                copied_files.len(),
                request.template.label,
                request.destination.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error(format!(
                "Stopped creating {}",
                request.destination.display()
            ));
            Err(e.into())
        }
    }
}

async fn install(request: &ProjectRequest) -> Result<()> {
    let package_manager = request.package_manager.unwrap_or_default();
    cliclack::log::step(format!(
        "Installing dependencies with {}...",
        package_manager
    ))?;

    project::install_dependencies(package_manager, &request.destination).await?;

    cliclack::log::success("Installing dependencies succeeded!")?;
    Ok(())
}

fn finish<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    package_manager: PackageManager,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(project_dir, package_manager, installed);

    if !steps.is_empty() {
        println!();
        println!("  {}", "Next steps".bold());
        println!();
        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step.cyan());
        }
        println!();
    }

    cliclack::outro("done.")?;
    Ok(())
}

/// Pull the scaffolding error out of an anyhow chain, if that is what failed
pub fn scaffold_error(err: &anyhow::Error) -> Option<&ScaffoldError> {
    err.downcast_ref::<ScaffoldError>()
}
