use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 90.0;
pub const PANEL_WIDTH: f32 = 360.0;
pub const PANEL_HEIGHT: f32 = 260.0;

pub const TITLE_Y: f32 = 46.0;
pub const CANVAS_LEFT: f32 = 400.0;
pub const CANVAS_TOP: f32 = 70.0;
pub const CANVAS_MARGIN: f32 = 30.0;

/// Longest frame fed to the tick timer; hides stalls such as window drags.
pub const MAX_FRAME_S: f32 = 0.10;

pub const PAGE_BG: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const CANVAS_BG: Color = Color::new(0.96, 0.96, 0.96, 1.0);
pub const CANVAS_BORDER: Color = Color::new(0.80, 0.80, 0.80, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.50, 0.50, 0.50, 1.0);
pub const PROJECTILE_RADIUS: f32 = 6.0;
