use crate::farming::{FarmingDomain, FarmingError, PlotId};

impl FarmingDomain {
    pub fn select_plot(&mut self, id: PlotId) -> Result<(), FarmingError> {
        self.get_plot_mut(id)?.selected = true;
        Ok(())
    }

    pub fn deselect_plots(&mut self) {
        for plot in self.plots.iter_mut() {
            plot.selected = false;
        }
    }
}
