use serde::Serialize;

use crate::domain::case_selection::CaseDetail;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct CaseTotals {
    pub total_cases: u64,
    pub total_points: f64,
    pub total_time_minutes: u64,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnnualProjection {
    pub annual_utilisation_revenue: f64,
    pub annual_baseline_cases: u64,
    pub annual_total_cases: u64,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationSummary {
    pub total_cases: u64,
    pub total_points: f64,
    pub total_time_minutes: u64,
    pub utilisation_percent: f64,
    pub utilisation_revenue: f64,
    pub annual_utilisation_revenue: f64,
    pub annual_baseline_cases: u64,
    pub annual_total_cases: u64,
}

impl SimulationSummary {
    pub fn annual(&self) -> AnnualProjection {
        AnnualProjection {
            annual_utilisation_revenue: self.annual_utilisation_revenue,
            annual_baseline_cases: self.annual_baseline_cases,
            annual_total_cases: self.annual_total_cases,
        }
    }
}

/// The cases of one procedure, in selection order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProcedureBreakdown {
    pub procedure: String,
    pub cases: Vec<CaseDetail>,
}
