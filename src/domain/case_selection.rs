use serde::Serialize;

use crate::domain::procedure::{
    ProcedureType, EXTRA_COMPLEX_EXTRA_MINUTES, HIGH_RISK_EXTRA_MINUTES,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseMetrics {
    pub points: f64,
    pub time_minutes: u32,
}

/// Points and theatre time for one case of `procedure`. Modifiers are purely
/// additive and may be combined.
pub fn compute_case_metrics(
    procedure: &ProcedureType,
    high_risk: bool,
    extra_complex: bool,
) -> CaseMetrics {
    let mut points = procedure.base_points;
    let mut time_minutes = procedure.base_time_minutes;

    if high_risk {
        points += procedure.risk_points_delta;
        time_minutes += HIGH_RISK_EXTRA_MINUTES;
    }
    if extra_complex {
        points += procedure.complex_points_delta;
        time_minutes += EXTRA_COMPLEX_EXTRA_MINUTES;
    }

    CaseMetrics {
        points,
        time_minutes,
    }
}

/// One case added under a procedure. `case_index` is 1-based within that
/// procedure's cases.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSelection<'a> {
    pub procedure: &'a ProcedureType,
    pub case_index: usize,
    pub high_risk: bool,
    pub extra_complex: bool,
}

impl<'a> CaseSelection<'a> {
    pub fn new(procedure: &'a ProcedureType, case_index: usize) -> Self {
        Self {
            procedure,
            case_index,
            high_risk: false,
            extra_complex: false,
        }
    }

    pub fn with_flags(mut self, high_risk: bool, extra_complex: bool) -> Self {
        self.high_risk = high_risk;
        self.extra_complex = extra_complex;
        self
    }

    pub fn metrics(&self) -> CaseMetrics {
        compute_case_metrics(self.procedure, self.high_risk, self.extra_complex)
    }

    pub fn effective_points(&self) -> f64 {
        self.metrics().points
    }

    pub fn effective_time_minutes(&self) -> u32 {
        self.metrics().time_minutes
    }

    pub fn to_detail(&self) -> CaseDetail {
        let metrics = self.metrics();
        CaseDetail {
            procedure: self.procedure.name.to_string(),
            case_number: self.case_index,
            points: metrics.points,
            time_minutes: metrics.time_minutes,
            high_risk: self.high_risk,
            extra_complex: self.extra_complex,
        }
    }
}

/// Owned snapshot of a selection with its derived values, for reports.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CaseDetail {
    pub procedure: String,
    pub case_number: usize,
    pub points: f64,
    pub time_minutes: u32,
    pub high_risk: bool,
    pub extra_complex: bool,
}
