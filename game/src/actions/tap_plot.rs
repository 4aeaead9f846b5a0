use log::error;

use crate::api::{ActionError, Event};
use crate::farming::PlotId;
use crate::model::Universe;
use crate::{occur, Game};

impl Game {
    pub(crate) fn tap_plot(&mut self, id: Option<PlotId>) -> Result<Vec<Event>, ActionError> {
        self.universe.target_plot(id);
        self.farming.deselect_plots();

        let id = match id {
            Some(id) => id,
            None => return Ok(occur![Universe::SelectionCleared,]),
        };

        let plot = match self.farming.get_plot(id) {
            Ok(plot) => plot,
            Err(error) => {
                // a tap can only reference plots the hit test knows about
                error!("Unable to tap plot, {error:?}");
                return Ok(vec![]);
            }
        };

        if plot.needs_care() {
            let apply_care = self.farming.apply_care(id)?;
            return Ok(occur![apply_care(),]);
        }

        if plot.is_ripe() {
            return self.sell_farm_entity(id);
        }

        if !plot.is_selectable() {
            return Ok(occur![Universe::SelectionCleared,]);
        }

        let unplanted = plot.entity.is_none();
        self.farming.select_plot(id)?;
        let mut events = vec![];
        if unplanted {
            events.push(Universe::PlantMenuRequested { plot: id });
        }
        events.push(Universe::PlotSelected { plot: id });
        Ok(occur![events,])
    }
}
