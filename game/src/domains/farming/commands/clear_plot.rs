use crate::collections::Shared;
use crate::farming::Farming::PlotCleared;
use crate::farming::{
    FarmEntityKind, Farming, FarmingDomain, FarmingError, GrowthState, PlotId, VisualStage,
};

impl FarmingDomain {
    pub fn clear_plot(
        &mut self,
        id: PlotId,
    ) -> Result<(Shared<FarmEntityKind>, impl FnOnce() -> Vec<Farming> + '_), FarmingError> {
        let plot = self.get_plot_mut(id)?;
        let kind = plot
            .entity
            .clone()
            .ok_or(FarmingError::PlotIsEmpty { id })?;
        let operation = move || {
            plot.entity = None;
            plot.growth = GrowthState::Empty;
            plot.stage = VisualStage::Soil;
            plot.growth_time = 0.0;
            plot.growth_duration = 0.0;
            plot.care_point = 0.0;
            vec![PlotCleared { plot: id }]
        };
        Ok((kind, operation))
    }
}
