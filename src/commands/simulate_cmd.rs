use crate::commands::CommandError;
use crate::commands::base_commands::OutputFormat;
use crate::commands::report_format::format_simulation_report;
use crate::services::report::simulate_from_scenario_file;

pub fn simulate_command(
    input: &str,
    output: Option<&str>,
    format: OutputFormat,
    available_time: Option<u32>,
) -> Result<(), CommandError> {
    let report = simulate_from_scenario_file(input, available_time)
        .map_err(|e| CommandError::new("simulate case mix", e))?;

    println!("{}", format_simulation_report(&report));

    if let Some(output) = output {
        let contents = report
            .serialize(format.into())
            .map_err(|e| CommandError::new("serialize simulation report", e))?;
        std::fs::write(output, contents)
            .map_err(|e| CommandError::new("write simulation report", e))?;
        println!("Simulation report written to {output}");
    }
    Ok(())
}
