use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::economy::Economy;
use crate::farming::{Farming, FarmingError, PlotId};
use crate::model::Universe;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    TapPlot { plot: Option<PlotId> },
    BuyFarmEntity { kind: String },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Universe(Vec<Universe>),
    Farming(Vec<Farming>),
    Economy(Vec<Economy>),
}

impl From<Vec<Universe>> for Event {
    fn from(events: Vec<Universe>) -> Self {
        Event::Universe(events)
    }
}

impl From<Universe> for Event {
    fn from(event: Universe) -> Self {
        Event::Universe(vec![event])
    }
}

impl From<Vec<Farming>> for Event {
    fn from(events: Vec<Farming>) -> Self {
        Event::Farming(events)
    }
}

impl From<Vec<Economy>> for Event {
    fn from(events: Vec<Economy>) -> Self {
        Event::Economy(events)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionError {
    NoPlotTargeted,
    Farming(FarmingError),
    Inconsistency(DictionaryError),
    Test,
}

impl From<FarmingError> for ActionError {
    fn from(error: FarmingError) -> Self {
        ActionError::Farming(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        ActionError::Inconsistency(error)
    }
}

#[macro_export]
macro_rules! occur {
    ($($events:expr,)*) => {
        vec![$($events.into()),*]
    };
}
