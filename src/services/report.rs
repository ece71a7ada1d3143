use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::domain::summary::{ProcedureBreakdown, SimulationSummary};
use crate::services::case_mix::{annual_case_difference, group_by_procedure, meets_target, summarize};
use crate::services::scenario_yaml::{load_scenario_from_yaml_file, Scenario, ScenarioYamlError};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to load scenario: {0}")]
    Scenario(#[from] ScenarioYamlError),
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub data_source: String,
    pub available_time_minutes: u32,
    pub target_utilisation_percent: f64,
    pub meets_target: bool,
    pub lists_per_year: u32,
    pub baseline_cases_per_list: u32,
    pub summary: SimulationSummary,
    pub annual_case_difference: i128,
    pub breakdown: Vec<ProcedureBreakdown>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

impl SimulationReport {
    pub fn serialize(&self, format: ReportFormat) -> Result<String, ReportError> {
        Ok(match format {
            ReportFormat::Yaml => serde_yaml::to_string(self)?,
            ReportFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

pub fn build_report(scenario: &Scenario, data_source: &str) -> SimulationReport {
    let selections = scenario.input.selections();
    let available_time_minutes = scenario.input.available_time_minutes;
    let summary = summarize(&selections, available_time_minutes, &scenario.parameters);

    SimulationReport {
        data_source: data_source.to_string(),
        available_time_minutes,
        target_utilisation_percent: scenario.parameters.target_utilisation_percent,
        meets_target: meets_target(summary.utilisation_percent, &scenario.parameters),
        lists_per_year: scenario.parameters.lists_per_year,
        baseline_cases_per_list: scenario.parameters.baseline_cases_per_list,
        summary,
        annual_case_difference: annual_case_difference(&summary.annual()),
        breakdown: group_by_procedure(&selections),
    }
}

/// Loads a scenario file and evaluates it. `available_time_override`
/// replaces the file's available time when given.
pub fn simulate_from_scenario_file(
    scenario_path: &str,
    available_time_override: Option<u32>,
) -> Result<SimulationReport, ReportError> {
    let mut scenario = load_scenario_from_yaml_file(scenario_path)?;
    if let Some(minutes) = available_time_override {
        log::debug!("overriding available time with {minutes} min");
        scenario.input.available_time_minutes = minutes;
    }

    let report = build_report(&scenario, &data_source_name(scenario_path));
    log::info!(
        "{}: {} cases, {:.1}% utilisation",
        report.data_source,
        report.summary.total_cases,
        report.summary.utilisation_percent
    );
    Ok(report)
}

fn data_source_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
