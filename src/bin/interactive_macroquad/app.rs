use std::time::Duration;

use macroquad::prelude::*;
use parabolic_rust::core::simulation::Simulation;
use tracing::warn;

use crate::constants::{
    CANVAS_LEFT, CANVAS_MARGIN, CANVAS_TOP, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    MAX_FRAME_S, MSAA_SAMPLES, PAGE_BG, PANEL_X, UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::render::{Canvas, draw_scene, draw_title};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "ParabolicRust Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run(sim: Simulation) {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(sim);

    loop {
        let frame_dt = get_frame_time().clamp(0.0, MAX_FRAME_S);

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        state.sync_sliders();
        apply_actions(&mut state, actions);
        state.sim.advance(Duration::from_secs_f32(frame_dt));

        let canvas = Canvas::fit(
            CANVAS_LEFT,
            CANVAS_TOP,
            screen_width() - CANVAS_MARGIN,
            screen_height() - CANVAS_MARGIN,
        );

        clear_background(PAGE_BG);
        draw_title(PANEL_X, ui_font.as_ref());
        draw_scene(canvas, &state.sim.frame(), ui_font.as_ref());

        next_frame().await;
    }
}
