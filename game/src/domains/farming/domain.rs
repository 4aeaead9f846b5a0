use serde::{Deserialize, Serialize};

use crate::collections::Shared;

pub struct FarmingDomain {
    pub care_gate: f32,
    pub plots: Vec<Plot>,
}

impl Default for FarmingDomain {
    fn default() -> Self {
        Self {
            care_gate: 0.7,
            plots: vec![],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmEntityKey(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmEntityCategory {
    CropBed,
    Animal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareAction {
    Water,
    Feed,
}

impl FarmEntityCategory {
    pub fn care_action(&self) -> CareAction {
        match self {
            FarmEntityCategory::CropBed => CareAction::Water,
            FarmEntityCategory::Animal => CareAction::Feed,
        }
    }
}

pub struct FarmEntityKind {
    pub id: FarmEntityKey,
    pub name: String,
    pub display_name: String,
    pub category: FarmEntityCategory,
    pub price: u32,
    pub sell_price: u32,
    pub grow_duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlotId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthState {
    Empty,
    GrowingFirstHalf,
    NeedsCare,
    GrowingSecondHalf,
    Ripe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualStage {
    Soil,
    Small,
    Medium,
    Ripe,
}

pub struct Plot {
    pub id: PlotId,
    pub entity: Option<Shared<FarmEntityKind>>,
    pub growth: GrowthState,
    pub stage: VisualStage,
    pub growth_time: f32,
    pub growth_duration: f32,
    pub care_point: f32,
    pub selected: bool,
}

impl Plot {
    pub fn placeholder(id: PlotId) -> Self {
        Self {
            id,
            entity: None,
            growth: GrowthState::Empty,
            stage: VisualStage::Soil,
            growth_time: 0.0,
            growth_duration: 0.0,
            care_point: 0.0,
            selected: false,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.entity.is_none() || self.growth == GrowthState::Ripe
    }

    pub fn needs_care(&self) -> bool {
        self.growth == GrowthState::NeedsCare
    }

    pub fn is_ripe(&self) -> bool {
        self.growth == GrowthState::Ripe
    }

    pub fn growth_progress(&self) -> f32 {
        match self.growth {
            GrowthState::GrowingFirstHalf => self.growth_time / self.care_point,
            GrowthState::GrowingSecondHalf => {
                (self.growth_time - self.care_point) / (self.growth_duration - self.care_point)
            }
            _ => 0.0,
        }
    }

    /// Buckets normalized growth into the coarse stage presentation renders.
    /// Valid only while an entity is assigned.
    pub(crate) fn visual_stage(&self) -> VisualStage {
        let progress = self.growth_time / self.growth_duration;
        let gate = self.care_point / self.growth_duration;
        if progress >= 1.0 {
            VisualStage::Ripe
        } else if progress >= gate {
            VisualStage::Medium
        } else {
            let unattended = progress / gate;
            if unattended < 1.0 / 3.0 {
                VisualStage::Soil
            } else if unattended < 2.0 / 3.0 {
                VisualStage::Small
            } else {
                VisualStage::Medium
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Farming {
    EntityAssigned {
        plot: PlotId,
        kind: FarmEntityKey,
    },
    GrowthUpdated {
        plot: PlotId,
        progress: f32,
    },
    StageChanged {
        plot: PlotId,
        stage: VisualStage,
    },
    CareRequired {
        plot: PlotId,
        action: CareAction,
    },
    CareCompleted {
        plot: PlotId,
    },
    EntityRipened {
        plot: PlotId,
    },
    PlotCleared {
        plot: PlotId,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum FarmingError {
    PlotNotFound { id: PlotId },
    PlotIsEmpty { id: PlotId },
}
