use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Service catalog table generator
#[derive(Parser, Debug)]
#[command(
    name = "svctab",
    about = "Generates the services overview table from the service catalog",
    version,
    long_about = "svctab scans the service catalog directory, extracts the attributes each \
                  service declares, and renders a markdown overview table into the project \
                  documentation. Deprecated services are excluded from the table."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity of diagnostic output"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate the services overview table",
        long_about = "Scans the service catalog under the given base path and writes the \
                      rendered table to the documentation directory.\n\n\
                      Examples:\n  \
                      svctab generate\n  \
                      svctab generate /path/to/project\n  \
                      svctab generate --check\n  \
                      svctab generate --output docs/overview.md"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "PATH",
        help = "Project base path (defaults to current directory)"
    )]
    pub base_path: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the table to FILE (relative to the base path) instead of the default"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        help = "Verify the committed table is up to date instead of writing it"
    )]
    pub check: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Run summary output format"
    )]
    pub format: SummaryFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormatArg {
    Human,
    Json,
}

impl From<SummaryFormatArg> for super::output::SummaryFormat {
    fn from(arg: SummaryFormatArg) -> Self {
        match arg {
            SummaryFormatArg::Human => super::output::SummaryFormat::Human,
            SummaryFormatArg::Json => super::output::SummaryFormat::Json,
        }
    }
}
