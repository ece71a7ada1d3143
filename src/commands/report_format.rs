use crate::domain::procedure::ProcedureType;
use crate::domain::summary::ProcedureBreakdown;
use crate::services::report::SimulationReport;

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let summary = &report.summary;
    let verdict = if report.meets_target {
        "meets target"
    } else {
        "below target"
    };

    let mut lines = Vec::new();
    lines.push("Case Mix Simulation".to_string());
    lines.push(format!("Scenario: {}", report.data_source));
    lines.push(format!("Available time: {} min", report.available_time_minutes));
    lines.push(String::new());
    lines.push(format!("Total cases: {}", summary.total_cases));
    lines.push(format!("Total points: {:.2}", summary.total_points));
    lines.push(format!("Total time used: {} min", summary.total_time_minutes));
    lines.push(format!(
        "Utilisation: {:.1}% (target >= {}%, {verdict})",
        summary.utilisation_percent, report.target_utilisation_percent
    ));
    lines.push(format!(
        "Cost savings: £{}",
        format_grouped(summary.utilisation_revenue, 2)
    ));
    lines.push(String::new());
    lines.push(format!("Annual projection ({} lists):", report.lists_per_year));
    lines.push(format!(
        "Baseline ({} cases per list): {} cases",
        report.baseline_cases_per_list,
        format_grouped(summary.annual_baseline_cases as f64, 0)
    ));
    lines.push(format!(
        "All selected cases: {} cases",
        format_grouped(summary.annual_total_cases as f64, 0)
    ));
    lines.push(format!(
        "Difference: {:+} cases/year",
        report.annual_case_difference
    ));
    lines.push(format!(
        "Utilisation revenue: £{}",
        format_grouped(summary.annual_utilisation_revenue, 0)
    ));

    if !report.breakdown.is_empty() {
        lines.push(String::new());
        lines.push("Case breakdown:".to_string());
        for group in &report.breakdown {
            lines.extend(format_breakdown(group));
        }
    }

    lines.join("\n")
}

fn format_breakdown(group: &ProcedureBreakdown) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        group.procedure.clone(),
        "Case | Points | Time (min) | High Risk | Extra Complex".to_string(),
        "-----|--------|------------|-----------|--------------".to_string(),
    ];
    lines.extend(group.cases.iter().map(|case| {
        format!(
            "{} | {:.2} | {} | {} | {}",
            case.case_number,
            case.points,
            case.time_minutes,
            yes_no(case.high_risk),
            yes_no(case.extra_complex)
        )
    }));
    lines
}

pub fn format_catalog_table(catalog: &[ProcedureType]) -> String {
    let mut lines = vec![
        "Procedure | Time (minutes) | Base Points | Risk Points | Complex Points".to_string(),
        "----------|----------------|-------------|-------------|---------------".to_string(),
    ];
    lines.extend(catalog.iter().map(|procedure| {
        format!(
            "{} | {} | {:.2} | {:.2} | {:.2}",
            procedure.name,
            procedure.base_time_minutes,
            procedure.base_points,
            procedure.risk_points_delta,
            procedure.complex_points_delta
        )
    }));
    lines.join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Formats `value` with `decimals` places and comma thousands separators.
fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}
