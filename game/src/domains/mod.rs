pub mod economy;
pub mod farming;
