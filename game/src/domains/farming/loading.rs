use crate::farming::{FarmingDomain, Plot};

impl FarmingDomain {
    pub fn load_care_gate(&mut self, care_gate: f32) {
        self.care_gate = care_gate;
    }

    pub fn load_plots(&mut self, plots: Vec<Plot>) {
        self.plots.extend(plots);
    }
}
