pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::collections::Shared;
use crate::economy::{Economy, EconomyDomain};
use crate::farming::{FarmEntityKind, FarmingDomain, PlotId};
use crate::model::{Knowledge, Universe, UniverseDomain};

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
pub mod model;
mod update;

pub struct Game {
    pub known: Knowledge,
    pub universe: UniverseDomain,
    pub farming: FarmingDomain,
    pub economy: EconomyDomain,
}

impl Game {
    pub fn new() -> Self {
        Self {
            known: Knowledge::default(),
            universe: UniverseDomain::default(),
            farming: FarmingDomain::default(),
            economy: EconomyDomain::default(),
        }
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        match action {
            Action::TapPlot { plot } => self.tap_plot(plot),
            Action::BuyFarmEntity { kind } => self.buy_farm_entity(&kind),
        }
    }

    /// Catalog entry behind a plot's current entity, if any.
    pub fn get_plot_info(&self, id: PlotId) -> Option<Shared<FarmEntityKind>> {
        let plot = self.farming.get_plot(id).ok()?;
        plot.entity.clone()
    }

    /// Full-state snapshot for presentation collaborators joining after
    /// startup or rebuilding their scene from scratch.
    pub fn look_around(&self) -> Vec<Event> {
        let mut stream = vec![];
        for plot in self.farming.plots.iter() {
            stream.push(Universe::PlotAppeared {
                plot: plot.id,
                kind: plot.entity.as_ref().map(|kind| kind.id),
                growth: plot.growth,
                stage: plot.stage,
            });
        }
        vec![
            Event::Universe(stream),
            Event::Economy(vec![Economy::BalanceChanged {
                balance: self.economy.balance,
            }]),
        ]
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
