//! Dependency installation through a package manager

use crate::error::{Result, ScaffoldError};
use crate::runtime::{check_package_manager, command, CommandOutcome, PackageManager};
use colored::Colorize;
use std::path::Path;

/// Install the project's dependencies with `package_manager`
///
/// Checks `<pm> --version` first so a missing package manager is reported as
/// such rather than as a failed install. Output of the install is streamed.
pub async fn install_dependencies(
    package_manager: PackageManager,
    project_dir: &Path,
) -> Result<CommandOutcome> {
    let info = check_package_manager(package_manager);
    if !info.available {
        return Err(ScaffoldError::PackageManagerUnavailable {
            name: info.name,
        });
    }

    let args = package_manager.install_args();
    println!();
    println!(
        "{} {} {}",
        "Running:".dimmed(),
        format!("{} {}", package_manager, args.join(" ")).yellow(),
        format!("({})", info.version.as_deref().unwrap_or("unknown")).dimmed()
    );
    println!();

    let outcome = command::run_command(package_manager.program(), args, project_dir).await?;
    println!();
    Ok(outcome)
}
