use serde::{Deserialize, Serialize};

use crate::collections::Dictionary;
use crate::farming::{FarmEntityKey, FarmEntityKind, GrowthState, PlotId, VisualStage};

#[derive(Default)]
pub struct Knowledge {
    pub farm_entities: Dictionary<FarmEntityKey, FarmEntityKind>,
}

#[derive(Default)]
pub struct UniverseDomain {
    pub hitted_plot: Option<PlotId>,
}

impl UniverseDomain {
    pub fn target_plot(&mut self, plot: Option<PlotId>) {
        self.hitted_plot = plot;
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Universe {
    PlotAppeared {
        plot: PlotId,
        kind: Option<FarmEntityKey>,
        growth: GrowthState,
        stage: VisualStage,
    },
    PlotSelected {
        plot: PlotId,
    },
    SelectionCleared,
    PlantMenuRequested {
        plot: PlotId,
    },
    PurchaseCompleted {
        plot: PlotId,
        kind: FarmEntityKey,
        price: u32,
    },
    PurchaseRefused {
        kind: FarmEntityKey,
        price: u32,
        balance: u32,
    },
    SaleCompleted {
        plot: PlotId,
        kind: FarmEntityKey,
        price: u32,
    },
}
