use parabolic_rust::core::simulation::Simulation;

pub(crate) struct AppRuntime {
    pub(crate) sim: Simulation,
    pub(crate) speed_slider: f32,
    pub(crate) angle_slider: f32,
}

impl AppRuntime {
    pub(crate) fn new(sim: Simulation) -> Self {
        let inputs = sim.inputs();
        Self {
            sim,
            speed_slider: inputs.speed_mps() as f32,
            angle_slider: inputs.angle_deg() as f32,
        }
    }

    /// Pushes slider positions into the simulation and snaps the sliders back
    /// to the stepped values it accepted.
    pub(crate) fn sync_sliders(&mut self) {
        self.sim.set_speed(f64::from(self.speed_slider));
        self.sim.set_angle(f64::from(self.angle_slider));
        let inputs = self.sim.inputs();
        self.speed_slider = inputs.speed_mps() as f32;
        self.angle_slider = inputs.angle_deg() as f32;
    }
}
