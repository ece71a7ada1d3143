pub mod case_mix;
pub mod report;
pub mod scenario_yaml;
