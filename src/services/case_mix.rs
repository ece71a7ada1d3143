//! The calculator pipeline. Every function here is pure: a summary is always
//! rebuilt in full from the selections and the available time.

use serde::{Deserialize, Serialize};

use crate::domain::case_selection::CaseSelection;
use crate::domain::summary::{AnnualProjection, CaseTotals, ProcedureBreakdown, SimulationSummary};

pub const TARGET_UTILISATION_PERCENT: f64 = 85.0;
pub const BASELINE_UTILISATION_PERCENT: f64 = 70.0;
pub const REVENUE_PER_HOUR: f64 = 1803.4;
pub const LISTS_PER_YEAR: u32 = 60;
pub const BASELINE_CASES_PER_LIST: u32 = 3;

/// Thresholds and rates used by the pipeline.
///
/// `target_utilisation_percent` only drives the target verdict shown next to
/// the utilisation; revenue is triggered by `baseline_utilisation_percent`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CaseMixParameters {
    pub target_utilisation_percent: f64,
    pub baseline_utilisation_percent: f64,
    pub revenue_per_hour: f64,
    pub lists_per_year: u32,
    pub baseline_cases_per_list: u32,
}

impl Default for CaseMixParameters {
    fn default() -> Self {
        Self {
            target_utilisation_percent: TARGET_UTILISATION_PERCENT,
            baseline_utilisation_percent: BASELINE_UTILISATION_PERCENT,
            revenue_per_hour: REVENUE_PER_HOUR,
            lists_per_year: LISTS_PER_YEAR,
            baseline_cases_per_list: BASELINE_CASES_PER_LIST,
        }
    }
}

pub fn aggregate(selections: &[CaseSelection<'_>]) -> CaseTotals {
    selections
        .iter()
        .map(CaseSelection::metrics)
        .fold(CaseTotals::default(), |totals, metrics| CaseTotals {
            total_cases: totals.total_cases + 1,
            total_points: totals.total_points + metrics.points,
            total_time_minutes: totals.total_time_minutes + u64::from(metrics.time_minutes),
        })
}

/// Percentage of the available time taken by the cases. Zero available time
/// yields 0 rather than an error; there is no upper bound.
pub fn compute_utilisation(total_time_minutes: u64, available_time_minutes: u32) -> f64 {
    if available_time_minutes == 0 {
        return 0.0;
    }
    total_time_minutes as f64 / f64::from(available_time_minutes) * 100.0
}

/// Revenue credited for the minutes used beyond the baseline utilisation.
/// Nothing is credited at or below the baseline.
pub fn compute_utilisation_revenue(
    total_time_minutes: u64,
    available_time_minutes: u32,
    baseline_utilisation_percent: f64,
    revenue_per_hour: f64,
) -> f64 {
    let utilisation = compute_utilisation(total_time_minutes, available_time_minutes);
    if utilisation <= baseline_utilisation_percent {
        return 0.0;
    }
    let baseline_minutes = f64::from(available_time_minutes) * baseline_utilisation_percent / 100.0;
    let extra_minutes = total_time_minutes as f64 - baseline_minutes;
    extra_minutes / 60.0 * revenue_per_hour
}

pub fn project_annual(
    utilisation_revenue: f64,
    total_cases: u64,
    lists_per_year: u32,
    baseline_cases_per_list: u32,
) -> AnnualProjection {
    let lists = u64::from(lists_per_year);
    AnnualProjection {
        annual_utilisation_revenue: utilisation_revenue * f64::from(lists_per_year),
        annual_baseline_cases: u64::from(baseline_cases_per_list).saturating_mul(lists),
        annual_total_cases: total_cases.saturating_mul(lists),
    }
}

/// Extra cases per year over the baseline; negative when fewer cases are
/// selected than the baseline lists hold.
pub fn annual_case_difference(projection: &AnnualProjection) -> i128 {
    i128::from(projection.annual_total_cases) - i128::from(projection.annual_baseline_cases)
}

pub fn summarize(
    selections: &[CaseSelection<'_>],
    available_time_minutes: u32,
    parameters: &CaseMixParameters,
) -> SimulationSummary {
    let totals = aggregate(selections);
    let utilisation_percent = compute_utilisation(totals.total_time_minutes, available_time_minutes);
    let utilisation_revenue = compute_utilisation_revenue(
        totals.total_time_minutes,
        available_time_minutes,
        parameters.baseline_utilisation_percent,
        parameters.revenue_per_hour,
    );
    let annual = project_annual(
        utilisation_revenue,
        totals.total_cases,
        parameters.lists_per_year,
        parameters.baseline_cases_per_list,
    );
    log::debug!(
        "summarized {} cases: {} min of {} min available ({utilisation_percent:.2}%)",
        totals.total_cases,
        totals.total_time_minutes,
        available_time_minutes
    );

    SimulationSummary {
        total_cases: totals.total_cases,
        total_points: totals.total_points,
        total_time_minutes: totals.total_time_minutes,
        utilisation_percent,
        utilisation_revenue,
        annual_utilisation_revenue: annual.annual_utilisation_revenue,
        annual_baseline_cases: annual.annual_baseline_cases,
        annual_total_cases: annual.annual_total_cases,
    }
}

pub fn meets_target(utilisation_percent: f64, parameters: &CaseMixParameters) -> bool {
    utilisation_percent >= parameters.target_utilisation_percent
}

/// Groups selections by procedure name, keeping the order in which each
/// procedure first appears. Procedures without cases are omitted.
pub fn group_by_procedure(selections: &[CaseSelection<'_>]) -> Vec<ProcedureBreakdown> {
    let mut groups: Vec<ProcedureBreakdown> = Vec::new();
    for selection in selections {
        let detail = selection.to_detail();
        match groups.iter_mut().find(|group| group.procedure == detail.procedure) {
            Some(group) => group.cases.push(detail),
            None => groups.push(ProcedureBreakdown {
                procedure: detail.procedure.clone(),
                cases: vec![detail],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::procedure::find_procedure;
    use crate::test_support::{cases_of, sleeve_and_bypass_mix};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn aggregate_of_nothing_is_zero() {
        assert_eq!(aggregate(&[]), CaseTotals::default());
    }

    #[test]
    fn aggregate_sums_points_time_and_count() {
        let selections = sleeve_and_bypass_mix();
        let totals = aggregate(&selections);

        assert_eq!(totals.total_cases, 3);
        assert_close(totals.total_points, 2.0 + 2.5 + 3.25);
        assert_eq!(totals.total_time_minutes, 120 + 150 + 195);
    }

    #[test]
    fn aggregate_is_repeatable() {
        let selections = sleeve_and_bypass_mix();
        assert_eq!(aggregate(&selections), aggregate(&selections));
    }

    #[test]
    fn utilisation_with_no_available_time_is_zero() {
        assert_eq!(compute_utilisation(0, 0), 0.0);
        assert_eq!(compute_utilisation(585, 0), 0.0);
    }

    #[test]
    fn utilisation_is_a_plain_ratio_and_may_exceed_100() {
        assert_close(compute_utilisation(357, 510), 70.0);
        assert_close(compute_utilisation(585, 400), 146.25);
    }

    #[test]
    fn revenue_is_zero_at_or_below_baseline() {
        assert_eq!(compute_utilisation_revenue(120, 510, 70.0, 1803.4), 0.0);
        assert_eq!(compute_utilisation_revenue(357, 510, 70.0, 1803.4), 0.0);
        assert_eq!(compute_utilisation_revenue(100, 0, 70.0, 1803.4), 0.0);
    }

    #[test]
    fn revenue_credits_only_minutes_beyond_baseline() {
        // 400 * 0.70 = 280 baseline minutes, 305 extra minutes.
        let revenue = compute_utilisation_revenue(585, 400, 70.0, 1803.4);
        assert_close(revenue, 305.0 / 60.0 * 1803.4);
        assert!((revenue - 9167.28).abs() < 0.01);
    }

    #[test]
    fn annual_projection_scales_linearly() {
        let single = project_annual(100.0, 4, 60, 3);
        let doubled = project_annual(200.0, 8, 60, 3);

        assert_close(single.annual_utilisation_revenue, 6000.0);
        assert_eq!(single.annual_total_cases, 240);
        assert_close(doubled.annual_utilisation_revenue, 2.0 * single.annual_utilisation_revenue);
        assert_eq!(doubled.annual_total_cases, 2 * single.annual_total_cases);
        assert_eq!(single.annual_baseline_cases, 180);
        assert_eq!(doubled.annual_baseline_cases, 180);
    }

    #[test]
    fn annual_projection_does_not_wrap_on_large_inputs() {
        let projection = project_annual(0.0, 5_000, u32::MAX, u32::MAX);

        assert_eq!(projection.annual_total_cases, 5_000 * u64::from(u32::MAX));
        assert_eq!(
            projection.annual_baseline_cases,
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
        assert_eq!(project_annual(0.0, u64::MAX, 2, 3).annual_total_cases, u64::MAX);
    }

    #[test]
    fn annual_case_difference_can_be_negative() {
        let projection = project_annual(0.0, 1, 60, 3);
        assert_eq!(annual_case_difference(&projection), -120);

        let projection = project_annual(0.0, 5, 60, 3);
        assert_eq!(annual_case_difference(&projection), 120);
    }

    #[test]
    fn utilisation_accepts_time_totals_past_u32() {
        let revision = find_procedure("Revision Surgery/Complex").unwrap();
        let total = 21_000_000 * u64::from(revision.base_time_minutes);
        assert!(total > u64::from(u32::MAX));
        assert_close(compute_utilisation(total, 510), total as f64 / 510.0 * 100.0);
    }

    #[test]
    fn single_sleeve_gastrectomy_stays_below_baseline() {
        let procedure = find_procedure("Sleeve Gastrectomy").unwrap();
        let selections = cases_of(procedure, &[(false, false)]);
        let summary = summarize(&selections, 510, &CaseMixParameters::default());

        assert_eq!(summary.total_cases, 1);
        assert_eq!(summary.total_time_minutes, 120);
        assert_close(summary.total_points, 2.0);
        assert_close(summary.utilisation_percent, 120.0 / 510.0 * 100.0);
        assert_eq!(summary.utilisation_revenue, 0.0);
        assert_eq!(summary.annual_utilisation_revenue, 0.0);
        assert_eq!(summary.annual_baseline_cases, 180);
        assert_eq!(summary.annual_total_cases, 60);
    }

    #[test]
    fn three_complex_high_risk_bypasses_overrun_the_list() {
        let procedure = find_procedure("Gastric Bypass").unwrap();
        let selections = cases_of(procedure, &[(true, true), (true, true), (true, true)]);
        let summary = summarize(&selections, 400, &CaseMixParameters::default());

        assert_close(summary.total_points, 9.75);
        assert_eq!(summary.total_time_minutes, 585);
        assert_close(summary.utilisation_percent, 146.25);
        assert_close(summary.utilisation_revenue, 305.0 / 60.0 * 1803.4);
        assert_close(summary.annual_utilisation_revenue, summary.utilisation_revenue * 60.0);
        assert_eq!(summary.annual_total_cases, 180);
    }

    #[test]
    fn summarize_uses_configured_parameters() {
        let procedure = find_procedure("Hernia").unwrap();
        let selections = cases_of(procedure, &[(false, false); 4]);
        let parameters = CaseMixParameters {
            baseline_utilisation_percent: 50.0,
            revenue_per_hour: 600.0,
            lists_per_year: 10,
            baseline_cases_per_list: 2,
            ..CaseMixParameters::default()
        };
        // 320 of 400 minutes; baseline 200 minutes => 120 extra => 2h * 600.
        let summary = summarize(&selections, 400, &parameters);

        assert_close(summary.utilisation_revenue, 1200.0);
        assert_close(summary.annual_utilisation_revenue, 12000.0);
        assert_eq!(summary.annual_baseline_cases, 20);
        assert_eq!(summary.annual_total_cases, 40);
    }

    #[test]
    fn target_is_independent_of_revenue_baseline() {
        let parameters = CaseMixParameters::default();
        assert!(!meets_target(80.0, &parameters));
        assert!(meets_target(85.0, &parameters));
        // 80% of the list is under target but already past the revenue baseline.
        let revenue = compute_utilisation_revenue(
            408,
            510,
            parameters.baseline_utilisation_percent,
            parameters.revenue_per_hour,
        );
        assert!(revenue > 0.0);
    }

    #[test]
    fn group_by_procedure_keeps_first_appearance_order() {
        let selections = sleeve_and_bypass_mix();
        let groups = group_by_procedure(&selections);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].procedure, "Sleeve Gastrectomy");
        assert_eq!(groups[0].cases.len(), 1);
        assert_eq!(groups[1].procedure, "Gastric Bypass");
        let numbers: Vec<usize> = groups[1].cases.iter().map(|c| c.case_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(groups[1].cases[1].time_minutes, 195);
    }

    #[test]
    fn group_by_procedure_of_nothing_is_empty() {
        assert!(group_by_procedure(&[]).is_empty());
    }
}
