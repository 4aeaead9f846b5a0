use game::api::{Action, ActionError, Event};
use game::data::GameAsset;
use game::farming::{FarmEntityKey, Farming, PlotId};
use game::Game;

pub fn plot(id: usize) -> PlotId {
    PlotId(id)
}

pub fn farming_events(events: &[Event]) -> Vec<&Farming> {
    let mut stream = vec![];
    for event in events {
        if let Event::Farming(farmings) = event {
            stream.extend(farmings.iter());
        }
    }
    stream
}

pub struct GameTestScenario {
    pub game: Game,
    current_result: Result<Vec<Event>, ActionError>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        let asset = GameAsset::from_file("../assets/game.json").unwrap();
        let mut game = Game::new();
        game.load_game(&asset);
        GameTestScenario {
            game,
            current_result: Err(ActionError::Test),
        }
    }

    pub fn entity_key(&self, name: &str) -> FarmEntityKey {
        self.game.known.farm_entities.find(name).unwrap().id
    }

    pub fn balance(&self) -> u32 {
        self.game.economy.balance
    }

    pub fn given_balance(mut self, balance: u32) -> Self {
        self.game.economy.load_balance(balance);
        self
    }

    pub fn given_planted(mut self, id: usize, name: &str) -> Self {
        let kind = self.game.known.farm_entities.find(name).unwrap();
        let plant = self.game.farming.plant_entity(plot(id), &kind).unwrap();
        plant();
        self
    }

    pub fn when_time_passes(mut self, seconds: f32) -> Self {
        self.current_result = Ok(self.game.update(seconds));
        self
    }

    pub fn when_player_performs(mut self, action: Action) -> Self {
        self.current_result = self.game.perform_action(action);
        self
    }

    pub fn then_events_should_be(self, expected: Vec<Event>) -> Self {
        assert_eq!(self.current_result, Ok(expected));
        self
    }

    pub fn then_action_should_fail(self, expected: ActionError) -> Self {
        assert_eq!(self.current_result, Err(expected));
        self
    }
}
