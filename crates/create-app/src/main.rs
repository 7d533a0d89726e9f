//! create-app CLI - Project scaffolding from local Node.js templates

use clap::Parser;
use scaffolder_core::runtime::PackageManager;
use scaffolder_core::tui::{scaffold_error, CreateArgs, Outcome};
use scaffolder_core::{ProductConfig, ScaffoldError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// create-app product configuration
#[derive(Clone)]
pub struct CreateAppConfig;

impl ProductConfig for CreateAppConfig {
    fn name(&self) -> &'static str {
        "create-app"
    }

    fn display_name(&self) -> &'static str {
        "Create App"
    }

    fn version(&self) -> &'static str {
        CLI_VERSION
    }

    fn templates_dir_env(&self) -> &'static str {
        "CREATE_APP_TEMPLATES_DIR"
    }

    fn bundled_templates_dir(&self) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
    }

    fn next_steps(&self, dir: &Path, pm: PackageManager, installed: bool) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Install dependencies if that was skipped
        if !installed {
            steps.push(format!("{} install", pm));
        }

        // Step 3: Start the app
        steps.push(pm.run_script("start"));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-app")]
#[command(about = "CLI for scaffolding Node.js projects from templates")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Project name to be used
    #[arg(short = 'p', long = "project-name")]
    pub project_name: Option<String>,

    /// Name of the template to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Select the package manager: npm, pnpm, yarn or bun (alias: -pm)
    #[arg(short = 'm', long = "package-manager")]
    pub package_manager: Option<String>,

    /// Skip installing dependencies
    #[arg(short, long = "skip-install")]
    pub skip_install: bool,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Show the current version of the cli
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            project_name: args.project_name,
            template: args.template,
            package_manager: args.package_manager,
            skip_install: args.skip_install,
        }
    }
}

/// Options whose value is the following argument
const VALUE_FLAGS: [&str; 7] = [
    "-p",
    "--project-name",
    "-t",
    "--template",
    "-m",
    "--package-manager",
    "--template-dir",
];

/// Rewrite `-pm` to `-m`; clap short flags are a single character
///
/// Only a `-pm` in flag position is rewritten: the value of an option and
/// everything after `--` pass through untouched.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut normalized = Vec::new();
    let mut expects_value = false;
    let mut past_separator = false;

    for arg in args {
        if past_separator || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        if arg == "--" {
            past_separator = true;
        } else if arg == "-pm" {
            expects_value = true;
            normalized.push(OsString::from("-m"));
            continue;
        } else {
            expects_value = VALUE_FLAGS.iter().any(|flag| arg == *flag);
        }
        normalized.push(arg);
    }

    normalized
}

/// Log a fatal error: stage headline, then the underlying detail
fn report(err: &anyhow::Error) {
    let headline = scaffold_error(err)
        .map(ScaffoldError::headline)
        .unwrap_or_else(|| "Something went wrong!".to_string());
    let detail = err
        .chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");

    let _ = cliclack::log::error(headline);
    let _ = cliclack::log::info(detail);
    if let Some(ScaffoldError::InvalidTemplateSelection { available, .. }) = scaffold_error(err) {
        let _ = cliclack::log::info(format!("Available templates: {}", available.join(", ")));
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = CreateAppConfig;

    if args.version {
        println!("v{}", config.version());
        return ExitCode::SUCCESS;
    }

    let result = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(Outcome::Created | Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
