//! Command-line interface implementation for apex.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Answers, Architecture, Database};

/// Command-line arguments structure for apex.
#[derive(Parser, Debug)]
#[command(
    name = "apex",
    author,
    version,
    about = "Apex scaffolds Go projects with selectable architectures",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Go project
    New(NewArgs),
}

/// Options of `apex new`. Every answer given here skips its prompt.
#[derive(clap::Args, Debug, Default)]
pub struct NewArgs {
    /// Project name, also the name of the generated directory
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Go module path (defaults to the project name)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Project architecture
    #[arg(short, long, value_enum)]
    pub arch: Option<Architecture>,

    /// Database driver to wire in
    #[arg(short, long, value_enum)]
    pub database: Option<Database>,

    /// Use GORM for data access
    #[arg(long, conflicts_with = "no_gorm")]
    pub gorm: bool,

    /// Use database/sql instead of GORM
    #[arg(long)]
    pub no_gorm: bool,

    /// Generate Dockerfile and compose file
    #[arg(long, conflicts_with = "no_docker")]
    pub docker: bool,

    /// Skip Docker files
    #[arg(long)]
    pub no_docker: bool,

    /// Read answers from a JSON or YAML file
    #[arg(long, value_name = "FILE", conflicts_with = "stdin")]
    pub answers: Option<PathBuf>,

    /// Read answers as JSON or YAML from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Accept defaults for every unanswered question instead of prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Directory in which the project directory is created (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite the files of an existing project directory
    #[arg(short, long)]
    pub force: bool,

    /// Do not run `go mod init` and `go mod tidy` after generation
    #[arg(long)]
    pub skip_hooks: bool,
}

impl NewArgs {
    /// Answers given directly on the command line.
    pub fn flag_answers(&self) -> Answers {
        Answers {
            name: self.name.clone(),
            module: self.module.clone(),
            architecture: self.arch,
            database: self.database,
            docker: switch(self.docker, self.no_docker),
            use_gorm: switch(self.gorm, self.no_gorm),
        }
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
