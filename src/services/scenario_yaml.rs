use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::case_mix_input::{
    CaseMixInput, CaseMixInputError, DEFAULT_AVAILABLE_TIME_MINUTES, MAX_CASES_PER_PROCEDURE,
};
use crate::domain::procedure::find_procedure;
use crate::services::case_mix::CaseMixParameters;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown procedure: {0}")]
    UnknownProcedure(String),
    #[error("procedure listed more than once: {0}")]
    DuplicateProcedure(String),
    #[error("{procedure} lists {flags} case entries but count is {count}")]
    TooManyCaseFlags {
        procedure: String,
        count: usize,
        flags: usize,
    },
    #[error("{procedure} count {count} exceeds the limit of {max} cases")]
    CaseCountTooLarge {
        procedure: String,
        count: usize,
        max: usize,
    },
    #[error("parameter {name} must be at most {max} (got {value})")]
    ParameterOutOfRange {
        name: &'static str,
        value: u32,
        max: u32,
    },
    #[error("parameter {name} must be a finite, non-negative number (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error(transparent)]
    Input(#[from] CaseMixInputError),
}

pub const MAX_LISTS_PER_YEAR: u32 = 10_000;
pub const MAX_BASELINE_CASES_PER_LIST: u32 = 100;

/// A scenario loaded from disk: the session input plus the parameters to
/// evaluate it with.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub input: CaseMixInput,
    pub parameters: CaseMixParameters,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    available_time_minutes: Option<u32>,
    #[serde(default)]
    parameters: CaseMixParameters,
    #[serde(default)]
    procedures: Vec<ProcedureRecord>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcedureRecord {
    name: String,
    count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cases: Vec<CaseFlagsRecord>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseFlagsRecord {
    #[serde(default)]
    high_risk: bool,
    #[serde(default)]
    extra_complex: bool,
}

pub fn load_scenario_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioYamlError> {
    let path = path.as_ref();
    log::debug!("reading scenario from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord = serde_yaml::from_str(input)?;
    validate_parameters(&record.parameters)?;

    let mut case_mix = CaseMixInput::new();
    case_mix.available_time_minutes = record
        .available_time_minutes
        .unwrap_or(DEFAULT_AVAILABLE_TIME_MINUTES);

    let mut seen: Vec<&str> = Vec::new();
    for procedure in &record.procedures {
        let name = procedure.name.as_str();
        if find_procedure(name).is_none() {
            return Err(ScenarioYamlError::UnknownProcedure(procedure.name.clone()));
        }
        if seen.contains(&name) {
            return Err(ScenarioYamlError::DuplicateProcedure(procedure.name.clone()));
        }
        seen.push(name);

        let count = procedure.count.unwrap_or(procedure.cases.len());
        if count > MAX_CASES_PER_PROCEDURE {
            return Err(ScenarioYamlError::CaseCountTooLarge {
                procedure: procedure.name.clone(),
                count,
                max: MAX_CASES_PER_PROCEDURE,
            });
        }
        if procedure.cases.len() > count {
            return Err(ScenarioYamlError::TooManyCaseFlags {
                procedure: procedure.name.clone(),
                count,
                flags: procedure.cases.len(),
            });
        }

        case_mix.set_case_count(name, count)?;
        for (index, flags) in procedure.cases.iter().enumerate() {
            case_mix.set_case_flags(name, index + 1, flags.high_risk, flags.extra_complex)?;
        }
    }

    Ok(Scenario {
        input: case_mix,
        parameters: record.parameters,
    })
}

fn validate_parameters(parameters: &CaseMixParameters) -> Result<(), ScenarioYamlError> {
    let checks = [
        ("target_utilisation_percent", parameters.target_utilisation_percent),
        ("baseline_utilisation_percent", parameters.baseline_utilisation_percent),
        ("revenue_per_hour", parameters.revenue_per_hour),
    ];
    for (name, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(ScenarioYamlError::InvalidParameter { name, value });
        }
    }

    let limits = [
        ("lists_per_year", parameters.lists_per_year, MAX_LISTS_PER_YEAR),
        (
            "baseline_cases_per_list",
            parameters.baseline_cases_per_list,
            MAX_BASELINE_CASES_PER_LIST,
        ),
    ];
    for (name, value, max) in limits {
        if value > max {
            return Err(ScenarioYamlError::ParameterOutOfRange { name, value, max });
        }
    }
    Ok(())
}

/// Writes `input` back out as a scenario file, with `parameters` spelled
/// out in full.
pub fn serialize_scenario<W: Write>(
    writer: &mut W,
    input: &CaseMixInput,
    parameters: &CaseMixParameters,
) -> io::Result<()> {
    let record = ScenarioRecord {
        available_time_minutes: Some(input.available_time_minutes),
        parameters: *parameters,
        procedures: input
            .entries()
            .iter()
            .map(|entry| ProcedureRecord {
                name: entry.procedure.name.to_string(),
                count: Some(entry.cases.len()),
                cases: entry
                    .cases
                    .iter()
                    .map(|flags| CaseFlagsRecord {
                        high_risk: flags.high_risk,
                        extra_complex: flags.extra_complex,
                    })
                    .collect(),
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

/// Writes a scenario listing every catalog procedure with no cases, using
/// the default available time and parameters.
pub fn serialize_scenario_template<W: Write>(writer: &mut W) -> io::Result<()> {
    serialize_scenario(writer, &CaseMixInput::new(), &CaseMixParameters::default())
}
