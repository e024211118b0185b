use plotters::prelude::*;
use thiserror::Error;

use crate::domain::dashboard::Dashboard;
use crate::services::dashboard_json::{load_dashboard_from_json_file, DashboardJsonError};

#[derive(Error, Debug)]
pub enum ProgressPlotError {
    #[error("failed to load dashboard: {0}")]
    Dashboard(#[from] DashboardJsonError),
    #[error("dashboard has no epics")]
    NoEpics,
    #[error("failed to render progress plot: {0}")]
    Plot(String),
}

pub fn plot_progress_from_json_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), ProgressPlotError> {
    let dashboard = load_dashboard_from_json_file(input_path)?;
    write_progress_png(output_path, &dashboard)
}

/// One horizontal bar per epic, filled to its share of done story points.
pub fn write_progress_png(output_path: &str, dashboard: &Dashboard) -> Result<(), ProgressPlotError> {
    if dashboard.epics.is_empty() {
        return Err(ProgressPlotError::NoEpics);
    }

    let bars: Vec<(String, f64)> = dashboard
        .epics
        .iter()
        .map(|epic| (epic.id.clone(), epic.point_progress().percent()))
        .collect();
    let max_y = bars.len() as i32;
    let height = (120 + 60 * bars.len()).min(2000) as u32;

    let root = BitMapBackend::new(output_path, (900, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    let caption = if dashboard.name.is_empty() {
        "Epic Progress".to_string()
    } else {
        format!("{} Progress", dashboard.name)
    };
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(120)
        .build_cartesian_2d(0.0..100.0, 0..max_y)
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Story points done (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_labels(bars.len())
        .y_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            bars.get(*index as usize)
                .map(|(id, _)| id.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    let track_style = ShapeStyle::from(&RGBColor(225, 230, 236)).filled();
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, _)| {
            Rectangle::new([(0.0, idx as i32), (100.0, idx as i32 + 1)], track_style)
        }))
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    let bar_style = ShapeStyle::from(&RGBColor(30, 122, 204)).filled();
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, (_, percent))| {
            Rectangle::new([(0.0, idx as i32), (*percent, idx as i32 + 1)], bar_style)
        }))
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;
    Ok(())
}
