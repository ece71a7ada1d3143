use serde::Serialize;

/// Minutes added to a case flagged as high risk.
pub const HIGH_RISK_EXTRA_MINUTES: u32 = 15;
/// Minutes added to a case flagged as extra complex.
pub const EXTRA_COMPLEX_EXTRA_MINUTES: u32 = 30;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProcedureType {
    pub name: &'static str,
    pub base_points: f64,
    pub base_time_minutes: u32,
    pub risk_points_delta: f64,
    pub complex_points_delta: f64,
}

/// The fixed procedure catalog, in display order.
pub static PROCEDURE_CATALOG: [ProcedureType; 5] = [
    ProcedureType {
        name: "Hernia",
        base_points: 1.3,
        base_time_minutes: 80,
        risk_points_delta: 0.25,
        complex_points_delta: 0.5,
    },
    ProcedureType {
        name: "Lap Cholecystectomy",
        base_points: 1.6,
        base_time_minutes: 96,
        risk_points_delta: 0.25,
        complex_points_delta: 0.5,
    },
    ProcedureType {
        name: "Sleeve Gastrectomy",
        base_points: 2.0,
        base_time_minutes: 120,
        risk_points_delta: 0.25,
        complex_points_delta: 0.5,
    },
    ProcedureType {
        name: "Gastric Bypass",
        base_points: 2.5,
        base_time_minutes: 150,
        risk_points_delta: 0.25,
        complex_points_delta: 0.5,
    },
    ProcedureType {
        name: "Revision Surgery/Complex",
        base_points: 4.0,
        base_time_minutes: 210,
        risk_points_delta: 0.25,
        complex_points_delta: 0.5,
    },
];

pub fn find_procedure(name: &str) -> Option<&'static ProcedureType> {
    PROCEDURE_CATALOG.iter().find(|procedure| procedure.name == name)
}
