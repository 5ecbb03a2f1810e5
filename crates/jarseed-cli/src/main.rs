//! Jarseed - local repository bootstrapper
//!
//! Usage:
//!   jarseed -d "org.slf4j:slf4j-api:1.7.36"             # install ../libs into ../repo
//!   jarseed -d "..." -l vendor/libs -r vendor/repo -v 7.0.2
//!   jarseed -d "..." --format json                       # machine-readable report

mod instructions;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jarseed_core::context::{SetupContext, SetupOverrides};
use jarseed_core::error::SetupError;
use jarseed_core::installer::{MavenInstaller, ensure_tool};
use jarseed_core::orchestration::{RunReport, SetupOrchestrator};

use crate::instructions::Instructions;

#[derive(Parser)]
#[command(name = "jarseed", version)]
#[command(
    about = "Sets up a local project Maven repository from vendor library archives",
    long_about = None
)]
struct Cli {
    /// Public Maven dependencies (group:artifact:version, space separated)
    /// listed in the descriptor ahead of the vendor archives
    #[arg(short = 'd', long)]
    dependencies: Option<String>,

    /// Directory containing the vendor archives [default: ../libs]
    #[arg(short = 'l', long)]
    libs: Option<PathBuf>,

    /// The project's Maven repository [default: ../repo]
    #[arg(short = 'r', long)]
    repo: Option<PathBuf>,

    /// Version of the generated descriptor [default: 6.0.1]
    #[arg(short = 'v', long = "rtc-version")]
    rtc_version: Option<String>,

    /// Maven executable to run (name on PATH or path)
    #[arg(short = 'm', long)]
    maven: Option<String>,

    /// Config file (defaults to ./jarseed.toml, then the user config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory relative paths and the descriptor output are based on
    #[arg(short = 'w', long)]
    work_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, default_value = "table")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable next steps
    #[default]
    Table,
    /// Machine-readable JSON report
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = exit_code(&err);
        if code == 1 || code == 3 {
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
        }
        std::process::exit(code);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "jarseed=debug,jarseed_core=debug"
    } else {
        "jarseed=info,jarseed_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let work_dir = match cli.work_dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    tracing::debug!(work_dir = %work_dir.display(), "starting setup");

    let overrides = SetupOverrides {
        dependencies: cli.dependencies,
        source_dir: cli.libs,
        repository_root: cli.repo,
        descriptor_version: cli.rtc_version,
        executable: cli.maven,
    };
    let context = SetupContext::load(overrides, cli.config.as_deref(), work_dir)?;

    let executable = ensure_tool(context.executable())?;
    let installer = MavenInstaller::new(executable, context.repository_root());

    let report = SetupOrchestrator::new(installer).run(&context)?;

    match cli.format {
        OutputFormat::Table => Instructions::new().render(&report)?,
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}

fn print_json(report: &RunReport) -> Result<()> {
    let output = serde_json::json!({
        "schema_version": 1,
        "seeds": report.seeds,
        "installed": report.installed,
        "descriptor": report.descriptor,
        "repository_root": report.repository_root,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SetupError>()
        .map(SetupError::exit_code)
        .unwrap_or(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_options() {
        let cli = Cli::try_parse_from([
            "jarseed",
            "-d",
            "org.slf4j:slf4j-api:1.7.36",
            "-l",
            "vendor/libs",
            "-r",
            "vendor/repo",
            "-v",
            "7.0.2",
        ])
        .unwrap();

        assert_eq!(cli.dependencies.as_deref(), Some("org.slf4j:slf4j-api:1.7.36"));
        assert_eq!(cli.libs, Some(PathBuf::from("vendor/libs")));
        assert_eq!(cli.repo, Some(PathBuf::from("vendor/repo")));
        assert_eq!(cli.rtc_version.as_deref(), Some("7.0.2"));
        assert!(!cli.verbose);
    }

    #[test]
    fn dependencies_are_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["jarseed"]).unwrap();
        assert!(cli.dependencies.is_none());
        assert!(matches!(cli.format, OutputFormat::Table));
    }

    #[test]
    fn exit_code_follows_setup_error() {
        let err = anyhow::Error::new(SetupError::ToolNotFound {
            tool: "mvn".to_string(),
        });
        assert_eq!(exit_code(&err), 3);

        let err = anyhow::Error::new(SetupError::configuration("missing"));
        assert_eq!(exit_code(&err), 1);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 4);
    }
}
