pub use get_plot::*;

mod get_plot;
