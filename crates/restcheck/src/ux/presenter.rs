use console::Style;
use restcheck_core::Scenario;
use restcheck_core::scenario::{Outcome, RunReport, ScenarioResult};

pub fn format_result_line(result: &ScenarioResult) -> String {
    let elapsed = format!("{:.2}s", result.elapsed.as_secs_f32());
    let dim = Style::new().white().dim();
    match &result.outcome {
        Outcome::Passed => format!(
            "{} {} {}",
            Style::new().green().bold().apply_to("PASS"),
            result.name,
            dim.apply_to(elapsed)
        ),
        Outcome::Failed(message) => format!(
            "{} {} {}\n     {}",
            Style::new().red().bold().apply_to("FAIL"),
            result.name,
            dim.apply_to(elapsed),
            message
        ),
    }
}

pub fn format_summary(report: &RunReport) -> String {
    let total: f32 = report
        .results
        .iter()
        .map(|r| r.elapsed.as_secs_f32())
        .sum();
    let status = if report.is_success() {
        Style::new().green().bold().apply_to("◼ All scenarios passed.")
    } else {
        Style::new().red().bold().apply_to("◼ Some scenarios failed.")
    };
    format!(
        "{status} {} passed, {} failed, {:.2}s total (started {}).",
        report.passed(),
        report.failed(),
        total,
        report.started_at.format("%Y-%m-%d %H:%M:%S")
    )
}

pub fn format_listing(scenarios: &[Box<dyn Scenario>]) -> String {
    let width = scenarios.iter().map(|s| s.name().len()).max().unwrap_or(0);
    scenarios
        .iter()
        .map(|s| {
            format!(
                "{:<width$}  {:<9}  {}",
                s.name(),
                s.group().as_str(),
                s.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
