use crate::collections::Shared;
use crate::farming::Farming::{EntityAssigned, GrowthUpdated};
use crate::farming::{
    FarmEntityKind, Farming, FarmingDomain, FarmingError, GrowthState, PlotId, VisualStage,
};

impl FarmingDomain {
    pub fn plant_entity<'operation>(
        &'operation mut self,
        id: PlotId,
        kind: &Shared<FarmEntityKind>,
    ) -> Result<impl FnOnce() -> Vec<Farming> + 'operation, FarmingError> {
        let care_gate = self.care_gate;
        let plot = self.get_plot_mut(id)?;
        let kind = kind.clone();
        let operation = move || {
            let key = kind.id;
            plot.growth = GrowthState::GrowingFirstHalf;
            plot.stage = VisualStage::Soil;
            plot.growth_time = 0.0;
            plot.growth_duration = kind.grow_duration;
            plot.care_point = care_gate * kind.grow_duration;
            plot.entity = Some(kind);
            vec![
                EntityAssigned { plot: id, kind: key },
                GrowthUpdated {
                    plot: id,
                    progress: 0.0,
                },
            ]
        };
        Ok(operation)
    }
}
