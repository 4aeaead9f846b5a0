pub use can_afford::*;

mod can_afford;
