use crate::commands::CommandError;
use crate::services::scenario_yaml::serialize_scenario_template;

pub fn template_command(output: &str) -> Result<(), CommandError> {
    let mut buffer = Vec::new();
    serialize_scenario_template(&mut buffer)
        .map_err(|e| CommandError::new("serialize scenario template", e))?;
    std::fs::write(output, buffer).map_err(|e| CommandError::new("write scenario template", e))?;
    println!("Scenario template written to {output}");
    Ok(())
}
