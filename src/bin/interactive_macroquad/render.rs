use macroquad::prelude::*;

use parabolic_rust::core::simulation::Frame;
use parabolic_rust::core::window::{
    ORIGIN_X, ORIGIN_Y, PLOT_HEIGHT, PLOT_WIDTH, ScreenPoint, VIEW_HEIGHT, VIEW_WIDTH,
};

use crate::constants::{
    CANVAS_BG, CANVAS_BORDER, PROJECTILE_RADIUS, TITLE_Y, TRAJECTORY_COLOR,
};

/// Placement of the 400x300 view inside the window.
#[derive(Clone, Copy)]
pub(crate) struct Canvas {
    pub(crate) left: f32,
    pub(crate) top: f32,
    pub(crate) scale: f32,
}

impl Canvas {
    pub(crate) fn fit(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let scale_x = (right - left).max(1.0) / VIEW_WIDTH as f32;
        let scale_y = (bottom - top).max(1.0) / VIEW_HEIGHT as f32;
        Self {
            left,
            top,
            scale: scale_x.min(scale_y),
        }
    }

    fn to_screen(self, point: ScreenPoint) -> Vec2 {
        vec2(
            self.left + point.x as f32 * self.scale,
            self.top + point.y as f32 * self.scale,
        )
    }

    fn view(self, x: f64, y: f64) -> Vec2 {
        self.to_screen(ScreenPoint { x, y })
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_title(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "Projectile Motion Simulator",
        left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
}

pub(crate) fn draw_scene(canvas: Canvas, frame: &Frame<'_>, font: Option<&Font>) {
    let w = VIEW_WIDTH as f32 * canvas.scale;
    let h = VIEW_HEIGHT as f32 * canvas.scale;
    draw_rectangle(canvas.left, canvas.top, w, h, CANVAS_BG);
    draw_rectangle_lines(canvas.left, canvas.top, w, h, 2.0, CANVAS_BORDER);

    draw_axes(canvas, font);
    draw_trajectory(canvas, frame);

    let projectile = canvas.to_screen(frame.projectile);
    let tip = canvas.to_screen(frame.velocity_tip);
    draw_line(projectile.x, projectile.y, tip.x, tip.y, 2.0, BLUE);
    draw_circle(
        projectile.x,
        projectile.y,
        PROJECTILE_RADIUS * canvas.scale,
        RED,
    );
}

fn draw_axes(canvas: Canvas, font: Option<&Font>) {
    let thickness = 2.0 * canvas.scale;
    let origin = canvas.view(ORIGIN_X, ORIGIN_Y);
    let x_end = canvas.view(ORIGIN_X + PLOT_WIDTH, ORIGIN_Y);
    let y_end = canvas.view(ORIGIN_X, ORIGIN_Y - PLOT_HEIGHT);
    draw_line(origin.x, origin.y, x_end.x, x_end.y, thickness, BLACK);
    draw_line(origin.x, origin.y, y_end.x, y_end.y, thickness, BLACK);

    let (xe, ye) = (ORIGIN_X + PLOT_WIDTH, ORIGIN_Y);
    draw_triangle(
        canvas.view(xe - 5.0, ye - 5.0),
        canvas.view(xe - 5.0, ye + 5.0),
        canvas.view(xe + 10.0, ye),
        BLACK,
    );
    let (xe, ye) = (ORIGIN_X, ORIGIN_Y - PLOT_HEIGHT);
    draw_triangle(
        canvas.view(xe - 5.0, ye + 5.0),
        canvas.view(xe + 5.0, ye + 5.0),
        canvas.view(xe, ye - 10.0),
        BLACK,
    );

    let label_size = (14.0 * canvas.scale) as u16;
    let x_label = canvas.view(ORIGIN_X + PLOT_WIDTH + 5.0, ORIGIN_Y + 15.0);
    let y_label = canvas.view(ORIGIN_X - 15.0, ORIGIN_Y - PLOT_HEIGHT - 5.0);
    draw_ui_text("x", x_label.x, x_label.y, label_size, BLACK, font);
    draw_ui_text("y", y_label.x, y_label.y, label_size, BLACK, font);
}

fn draw_trajectory(canvas: Canvas, frame: &Frame<'_>) {
    let points: Vec<Vec2> = frame
        .trajectory
        .screen_points()
        .map(|p| canvas.to_screen(p))
        .collect();
    // Alternate segments only, for a dashed look.
    for segment in points.windows(2).step_by(2) {
        draw_line(
            segment[0].x,
            segment[0].y,
            segment[1].x,
            segment[1].y,
            1.0,
            TRAJECTORY_COLOR,
        );
    }
}
