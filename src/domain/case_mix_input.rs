use thiserror::Error;

use crate::domain::case_selection::CaseSelection;
use crate::domain::procedure::{ProcedureType, PROCEDURE_CATALOG};

pub const DEFAULT_AVAILABLE_TIME_MINUTES: u32 = 510;
/// Upper bound on the cases one procedure may hold in a session.
pub const MAX_CASES_PER_PROCEDURE: usize = 1_000;

#[derive(Error, Debug, PartialEq)]
pub enum CaseMixInputError {
    #[error("unknown procedure: {0}")]
    UnknownProcedure(String),
    #[error("{procedure} cannot hold {count} cases (at most {max})")]
    TooManyCases {
        procedure: String,
        count: usize,
        max: usize,
    },
    #[error("case {case_number} is out of range for {procedure} ({count} cases selected)")]
    CaseOutOfRange {
        procedure: String,
        case_number: usize,
        count: usize,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFlags {
    pub high_risk: bool,
    pub extra_complex: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureEntry {
    pub procedure: &'static ProcedureType,
    pub cases: Vec<CaseFlags>,
}

/// The user-entered state of one session: available time plus, for each
/// catalog procedure, how many cases are selected and their modifier flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseMixInput {
    pub available_time_minutes: u32,
    entries: Vec<ProcedureEntry>,
}

impl Default for CaseMixInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseMixInput {
    pub fn new() -> Self {
        Self {
            available_time_minutes: DEFAULT_AVAILABLE_TIME_MINUTES,
            entries: PROCEDURE_CATALOG
                .iter()
                .map(|procedure| ProcedureEntry {
                    procedure,
                    cases: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ProcedureEntry] {
        &self.entries
    }

    pub fn case_count(&self, procedure_name: &str) -> Result<usize, CaseMixInputError> {
        Ok(self.entry(procedure_name)?.cases.len())
    }

    /// Resizes the case list of a procedure. Flags of cases that survive the
    /// resize are kept; new cases start without modifiers.
    pub fn set_case_count(
        &mut self,
        procedure_name: &str,
        count: usize,
    ) -> Result<(), CaseMixInputError> {
        if count > MAX_CASES_PER_PROCEDURE {
            return Err(CaseMixInputError::TooManyCases {
                procedure: procedure_name.to_string(),
                count,
                max: MAX_CASES_PER_PROCEDURE,
            });
        }
        let entry = self.entry_mut(procedure_name)?;
        entry.cases.resize(count, CaseFlags::default());
        Ok(())
    }

    pub fn set_case_flags(
        &mut self,
        procedure_name: &str,
        case_number: usize,
        high_risk: bool,
        extra_complex: bool,
    ) -> Result<(), CaseMixInputError> {
        let entry = self.entry_mut(procedure_name)?;
        let count = entry.cases.len();
        let flags = case_number
            .checked_sub(1)
            .and_then(|index| entry.cases.get_mut(index))
            .ok_or_else(|| CaseMixInputError::CaseOutOfRange {
                procedure: procedure_name.to_string(),
                case_number,
                count,
            })?;
        flags.high_risk = high_risk;
        flags.extra_complex = extra_complex;
        Ok(())
    }

    /// Rebuilds the full selection sequence, catalog order first and case
    /// order second.
    pub fn selections(&self) -> Vec<CaseSelection<'static>> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.cases.iter().enumerate().map(|(index, flags)| {
                    CaseSelection::new(entry.procedure, index + 1)
                        .with_flags(flags.high_risk, flags.extra_complex)
                })
            })
            .collect()
    }

    fn entry(&self, procedure_name: &str) -> Result<&ProcedureEntry, CaseMixInputError> {
        self.entries
            .iter()
            .find(|entry| entry.procedure.name == procedure_name)
            .ok_or_else(|| CaseMixInputError::UnknownProcedure(procedure_name.to_string()))
    }

    fn entry_mut(
        &mut self,
        procedure_name: &str,
    ) -> Result<&mut ProcedureEntry, CaseMixInputError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.procedure.name == procedure_name)
            .ok_or_else(|| CaseMixInputError::UnknownProcedure(procedure_name.to_string()))
    }
}
