pub use apply_care::*;
pub use clear_plot::*;
pub use plant_entity::*;
pub use select_plot::*;

mod apply_care;
mod clear_plot;
mod plant_entity;
mod select_plot;
