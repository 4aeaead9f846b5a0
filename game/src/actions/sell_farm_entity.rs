use crate::api::{ActionError, Event};
use crate::farming::PlotId;
use crate::model::Universe;
use crate::{occur, Game};

impl Game {
    pub(crate) fn sell_farm_entity(&mut self, id: PlotId) -> Result<Vec<Event>, ActionError> {
        let (kind, clear) = self.farming.clear_plot(id)?;
        let cleared = clear();
        self.farming.deselect_plots();
        let earn = self.economy.earn_money(kind.sell_price);
        Ok(occur![
            earn(),
            cleared,
            Universe::SaleCompleted {
                plot: id,
                kind: kind.id,
                price: kind.sell_price,
            },
        ])
    }
}
