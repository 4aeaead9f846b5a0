use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::farming::{FarmEntityCategory, FarmEntityKey, FarmEntityKind, Plot, PlotId};
use crate::Game;

#[derive(Debug, Deserialize)]
pub struct GameAsset {
    pub start_money: u32,
    pub growth: GrowthAsset,
    pub plots: Vec<PlotAsset>,
    pub farm_entities: Vec<FarmEntityAsset>,
}

#[derive(Debug, Deserialize)]
pub struct GrowthAsset {
    pub care_gate: f32,
}

#[derive(Debug, Deserialize)]
pub struct PlotAsset {
    pub id: usize,
}

#[derive(Debug, Deserialize)]
pub struct FarmEntityAsset {
    pub name: String,
    pub display_name: String,
    pub category: FarmEntityCategory,
    pub price: u32,
    pub sell_price: u32,
    pub grow_duration: f32,
}

impl GameAsset {
    pub fn from_file(path: impl AsRef<Path>) -> Result<GameAsset, DataError> {
        let data = fs::read_to_string(path)?;
        let asset = serde_json::from_str(&data)?;
        Ok(asset)
    }
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl Game {
    pub fn load_game(&mut self, asset: &GameAsset) {
        self.load_game_knowledge(asset);
        self.load_game_state(asset);
    }

    fn load_game_knowledge(&mut self, asset: &GameAsset) {
        for (index, entity) in asset.farm_entities.iter().enumerate() {
            let key = FarmEntityKey(index + 1);
            let kind = FarmEntityKind {
                id: key,
                name: entity.name.clone(),
                display_name: entity.display_name.clone(),
                category: entity.category,
                price: entity.price,
                sell_price: entity.sell_price,
                grow_duration: entity.grow_duration,
            };
            self.known.farm_entities.insert(key, entity.name.clone(), kind);
        }
        info!(
            "Loaded {} farm entity kinds",
            self.known.farm_entities.len()
        );
    }

    fn load_game_state(&mut self, asset: &GameAsset) {
        self.farming.load_care_gate(asset.growth.care_gate);
        let plots = asset
            .plots
            .iter()
            .map(|plot| Plot::placeholder(PlotId(plot.id)))
            .collect();
        self.farming.load_plots(plots);
        self.economy.load_balance(asset.start_money);
        info!(
            "Loaded {} plots, start money {}",
            self.farming.plots.len(),
            self.economy.balance
        );
    }
}
