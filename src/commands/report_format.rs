use crate::services::dashboard_report::{DashboardReport, EpicReport};

pub fn format_dashboard_report(report: &DashboardReport) -> String {
    let rate = match report.rate {
        Some(value) => format!("{value:.2} h/pt"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push(format!("Dashboard: {}", report.name));
    lines.push(format!("Generated on: {}", report.generated_on));
    lines.push(format!("Rate: {}", rate));
    lines.push(String::new());
    lines.push("Epic | Points done | Remaining | Capacity | Projected completion".to_string());
    lines.push("-----|-------------|-----------|----------|---------------------".to_string());
    for epic in &report.epics {
        lines.push(format_epic_row(epic));
    }

    lines.join("\n")
}

fn format_epic_row(epic: &EpicReport) -> String {
    let projected = if epic.projected_completion.is_empty() {
        "-".to_string()
    } else {
        format!(
            "{} ({})",
            epic.projected_completion_display, epic.projected_completion
        )
    };
    format!(
        "{id} | {done:.0}% | {remaining:.2} | {capacity:.2} | {projected}",
        id = epic.id,
        done = epic.points_done_percent,
        remaining = epic.remaining_points,
        capacity = epic.capacity,
    )
}
