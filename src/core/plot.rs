use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::core::error::{Result, SimError};
use crate::core::simulation::Frame;
use crate::core::window::{
    ORIGIN_X, ORIGIN_Y, PLOT_HEIGHT, PLOT_WIDTH, ScreenPoint, VIEW_HEIGHT, VIEW_WIDTH,
};

const BACKGROUND: RGBColor = RGBColor(245, 245, 245);
const TRAJECTORY: RGBColor = RGBColor(128, 128, 128);
const PROJECTILE_RADIUS: i32 = 6;

pub fn default_output_path(output_dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    output_dir.join(format!("trajectory_{stamp}.svg"))
}

pub fn render_svg_file(frame: &Frame<'_>, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, view_size()).into_drawing_area();
    draw_scene(&root, frame)?;
    root.present().map_err(render_error)?;
    info!(path = %path.display(), "wrote scene");
    Ok(())
}

pub fn render_svg_string(frame: &Frame<'_>) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, view_size()).into_drawing_area();
        draw_scene(&root, frame)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

fn view_size() -> (u32, u32) {
    (VIEW_WIDTH as u32, VIEW_HEIGHT as u32)
}

fn px(point: ScreenPoint) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> SimError
where
    E: std::error::Error + Send + Sync,
{
    SimError::Render(err.to_string())
}

fn draw_scene<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, frame: &Frame<'_>) -> Result<()> {
    root.fill(&BACKGROUND).map_err(render_error)?;
    draw_axes(root)?;

    // Every other segment is skipped to get a dashed stroke.
    let points: Vec<(i32, i32)> = frame.trajectory.screen_points().map(px).collect();
    for segment in points.windows(2).step_by(2) {
        root.draw(&PathElement::new(segment.to_vec(), TRAJECTORY.stroke_width(1)))
            .map_err(render_error)?;
    }

    root.draw(&Circle::new(
        px(frame.projectile),
        PROJECTILE_RADIUS,
        RED.filled(),
    ))
    .map_err(render_error)?;
    root.draw(&PathElement::new(
        vec![px(frame.projectile), px(frame.velocity_tip)],
        BLUE.stroke_width(2),
    ))
    .map_err(render_error)?;
    Ok(())
}

fn draw_axes<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<()> {
    let origin = (ORIGIN_X as i32, ORIGIN_Y as i32);
    let x_end = ((ORIGIN_X + PLOT_WIDTH) as i32, ORIGIN_Y as i32);
    let y_end = (ORIGIN_X as i32, (ORIGIN_Y - PLOT_HEIGHT) as i32);

    root.draw(&PathElement::new(vec![origin, x_end], BLACK.stroke_width(2)))
        .map_err(render_error)?;
    root.draw(&PathElement::new(vec![origin, y_end], BLACK.stroke_width(2)))
        .map_err(render_error)?;

    root.draw(&Polygon::new(
        vec![
            (x_end.0 - 5, x_end.1 - 5),
            (x_end.0 - 5, x_end.1 + 5),
            (x_end.0 + 10, x_end.1),
        ],
        BLACK.filled(),
    ))
    .map_err(render_error)?;
    root.draw(&Polygon::new(
        vec![
            (y_end.0 - 5, y_end.1 + 5),
            (y_end.0 + 5, y_end.1 + 5),
            (y_end.0, y_end.1 - 10),
        ],
        BLACK.filled(),
    ))
    .map_err(render_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulation::Simulation;

    #[test]
    fn renders_scene_elements() {
        let mut sim = Simulation::default();
        sim.start();
        for _ in 0..20 {
            sim.tick();
        }

        let svg = render_svg_string(&sim.frame()).expect("render should succeed");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn output_path_is_timestamped_svg() {
        let path = default_output_path(Path::new("out"));
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("file name should be utf-8");
        assert!(path.starts_with("out"));
        assert!(name.starts_with("trajectory_"));
        assert!(name.ends_with(".svg"));
    }
}
