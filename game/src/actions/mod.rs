pub use buy_farm_entity::*;
pub use sell_farm_entity::*;
pub use tap_plot::*;

mod buy_farm_entity;
mod sell_farm_entity;
mod tap_plot;
