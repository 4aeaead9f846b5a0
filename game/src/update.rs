use crate::api::Event;
use crate::{occur, Game};

impl Game {
    pub fn update(&mut self, real_seconds: f32) -> Vec<Event> {
        occur![self.farming.update(real_seconds),]
    }
}
