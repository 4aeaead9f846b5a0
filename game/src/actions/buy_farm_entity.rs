use crate::api::{ActionError, Event};
use crate::economy::EconomyError;
use crate::model::Universe;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_farm_entity(&mut self, kind: &str) -> Result<Vec<Event>, ActionError> {
        let id = self
            .universe
            .hitted_plot
            .ok_or(ActionError::NoPlotTargeted)?;
        self.farming.get_plot(id)?;
        let kind = self.known.farm_entities.find(kind)?;
        let price = kind.price;

        let spend = match self.economy.spend_money(price) {
            Ok(spend) => spend,
            Err(EconomyError::NotEnoughMoney { cost, balance }) => {
                return Ok(occur![Universe::PurchaseRefused {
                    kind: kind.id,
                    price: cost,
                    balance,
                },]);
            }
        };
        let spent = spend();
        self.farming.deselect_plots();
        let plant = self.farming.plant_entity(id, &kind)?;
        Ok(occur![
            spent,
            Universe::PurchaseCompleted {
                plot: id,
                kind: kind.id,
                price,
            },
            plant(),
        ])
    }
}
