use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::services::report::ReportFormat;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a case mix scenario and print the simulation summary
    Simulate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Optional file to write the full report to
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the written report
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Available theatre time in minutes, overriding the scenario
        #[arg(short = 't', long)]
        available_time: Option<u32>,
    },
    /// Print the procedure catalog
    Catalog {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = CatalogFormat::Table)]
        format: CatalogFormat,
    },
    /// Write an empty scenario file listing every procedure
    Template {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => ReportFormat::Yaml,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Table,
    Yaml,
    Json,
}
