use crate::domain::case_selection::CaseSelection;
use crate::domain::procedure::{find_procedure, ProcedureType};

// One selection per flag pair, numbered from 1
pub fn cases_of<'a>(procedure: &'a ProcedureType, flags: &[(bool, bool)]) -> Vec<CaseSelection<'a>> {
    flags
        .iter()
        .enumerate()
        .map(|(index, (high_risk, extra_complex))| {
            CaseSelection::new(procedure, index + 1).with_flags(*high_risk, *extra_complex)
        })
        .collect()
}

/// One plain sleeve gastrectomy, then a plain and a high risk + extra complex
/// gastric bypass.
pub fn sleeve_and_bypass_mix() -> Vec<CaseSelection<'static>> {
    let sleeve = find_procedure("Sleeve Gastrectomy").unwrap();
    let bypass = find_procedure("Gastric Bypass").unwrap();

    let mut selections = cases_of(sleeve, &[(false, false)]);
    selections.extend(cases_of(bypass, &[(false, false), (true, true)]));
    selections
}

pub const SCENARIO_YAML: &str = "available_time_minutes: 400
procedures:
  - name: Gastric Bypass
    count: 3
    cases:
      - { high_risk: true, extra_complex: true }
      - { high_risk: true, extra_complex: true }
      - { high_risk: true, extra_complex: true }
";
