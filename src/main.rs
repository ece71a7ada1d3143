use std::process::ExitCode;

use casemix::commands::base_commands::{CliArgs, Commands};
use casemix::commands::catalog_cmd::catalog_command;
use casemix::commands::simulate_cmd::simulate_command;
use casemix::commands::template_cmd::template_command;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Simulate {
            input,
            output,
            format,
            available_time,
        } => simulate_command(&input, output.as_deref(), format, available_time),
        Commands::Catalog { format } => catalog_command(format),
        Commands::Template { output } => template_command(&output),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "casemix", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
