use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use parabolic_rust::core::ballistics::{
    MAX_ANGLE_DEG, MAX_SPEED_MPS, MIN_ANGLE_DEG, MIN_SPEED_MPS,
};

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) toggle: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            toggle: self.toggle || other.toggle,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        toggle: is_key_pressed(KeyCode::Space),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let frame = state.sim.frame();
    let readouts = frame.readouts.lines();
    let control_label = format!("{} (Space)", frame.control_label);
    let time_line = format!("t = {:.2} s", frame.time_s);

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch")
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, &format!("Initial speed: {:.0} m/s", state.speed_slider));
        ui.slider(
            hash!(),
            "Speed (m/s)",
            MIN_SPEED_MPS as f32..MAX_SPEED_MPS as f32,
            &mut state.speed_slider,
        );
        ui.label(None, &format!("Angle: {:.0} deg", state.angle_slider));
        ui.slider(
            hash!(),
            "Angle (deg)",
            MIN_ANGLE_DEG as f32..MAX_ANGLE_DEG as f32,
            &mut state.angle_slider,
        );
        ui.separator();
        for line in &readouts {
            ui.label(None, line);
        }
        ui.label(None, &time_line);
        ui.separator();
        if ui.button(None, control_label.as_str()) {
            actions.toggle = true;
        }
    });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.toggle {
        state.sim.toggle();
    }
}
