use crate::farming::Farming::{CareCompleted, StageChanged};
use crate::farming::{Farming, FarmingDomain, FarmingError, GrowthState, PlotId};

impl FarmingDomain {
    pub fn apply_care(
        &mut self,
        id: PlotId,
    ) -> Result<impl FnOnce() -> Vec<Farming> + '_, FarmingError> {
        let plot = self.get_plot_mut(id)?;
        let operation = move || {
            // care applied twice, or to a plot not waiting for it, changes nothing
            if plot.growth != GrowthState::NeedsCare {
                return vec![];
            }
            plot.growth = GrowthState::GrowingSecondHalf;
            let mut events = vec![CareCompleted { plot: id }];
            let stage = plot.visual_stage();
            if stage != plot.stage {
                plot.stage = stage;
                events.push(StageChanged { plot: id, stage });
            }
            events
        };
        Ok(operation)
    }
}
