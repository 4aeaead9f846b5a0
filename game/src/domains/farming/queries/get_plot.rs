use crate::farming::{FarmingDomain, FarmingError, Plot, PlotId};

impl FarmingDomain {
    pub fn get_plot(&self, id: PlotId) -> Result<&Plot, FarmingError> {
        self.plots
            .iter()
            .find(|plot| plot.id == id)
            .ok_or(FarmingError::PlotNotFound { id })
    }

    pub fn get_plot_mut(&mut self, id: PlotId) -> Result<&mut Plot, FarmingError> {
        self.plots
            .iter_mut()
            .find(|plot| plot.id == id)
            .ok_or(FarmingError::PlotNotFound { id })
    }
}
