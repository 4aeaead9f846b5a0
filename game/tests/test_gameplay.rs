use crate::testing::{plot, GameTestScenario};
use game::api::{Action, ActionError, Event};
use game::collections::DictionaryError;
use game::economy::Economy;
use game::farming::{Farming, GrowthState, VisualStage};
use game::model::Universe;

mod testing;

#[test]
fn test_tap_on_empty_plot_opens_plant_menu() {
    let scenario = GameTestScenario::new()
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .then_events_should_be(vec![Event::Universe(vec![
            Universe::PlantMenuRequested { plot: plot(1) },
            Universe::PlotSelected { plot: plot(1) },
        ])]);
    assert!(scenario.game.farming.get_plot(plot(1)).unwrap().selected);
    assert_eq!(scenario.game.universe.hitted_plot, Some(plot(1)));
}

#[test]
fn test_tap_on_empty_space_clears_selection() {
    let scenario = GameTestScenario::new()
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .when_player_performs(Action::TapPlot { plot: None })
        .then_events_should_be(vec![Event::Universe(vec![Universe::SelectionCleared])]);
    for plot in scenario.game.farming.plots.iter() {
        assert!(!plot.selected);
    }
    assert_eq!(scenario.game.universe.hitted_plot, None);
}

#[test]
fn test_tap_on_unknown_plot_does_nothing() {
    GameTestScenario::new()
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(99)),
        })
        .then_events_should_be(vec![]);
}

#[test]
fn test_buy_requires_targeted_plot() {
    GameTestScenario::new()
        .when_player_performs(Action::BuyFarmEntity {
            kind: "corn".to_string(),
        })
        .then_action_should_fail(ActionError::NoPlotTargeted);
}

#[test]
fn test_buy_unknown_entity_fails() {
    GameTestScenario::new()
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .when_player_performs(Action::BuyFarmEntity {
            kind: "dragonfruit".to_string(),
        })
        .then_action_should_fail(ActionError::Inconsistency(DictionaryError::NameNotFound {
            name: "dragonfruit".to_string(),
        }));
}

#[test]
fn test_buy_without_money_is_refused() {
    let scenario = GameTestScenario::new()
        .given_balance(3)
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .when_player_performs(Action::BuyFarmEntity {
            kind: "corn".to_string(),
        });
    let corn = scenario.entity_key("corn");
    let scenario = scenario.then_events_should_be(vec![Event::Universe(vec![
        Universe::PurchaseRefused {
            kind: corn,
            price: 5,
            balance: 3,
        },
    ])]);
    assert_eq!(scenario.balance(), 3);
    assert_eq!(
        scenario.game.farming.get_plot(plot(1)).unwrap().growth,
        GrowthState::Empty
    );
}

#[test]
fn test_buy_charges_and_plants() {
    let scenario = GameTestScenario::new()
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .when_player_performs(Action::BuyFarmEntity {
            kind: "corn".to_string(),
        });
    let corn = scenario.entity_key("corn");
    let scenario = scenario.then_events_should_be(vec![
        Event::Economy(vec![Economy::BalanceChanged { balance: 95 }]),
        Event::Universe(vec![Universe::PurchaseCompleted {
            plot: plot(1),
            kind: corn,
            price: 5,
        }]),
        Event::Farming(vec![
            Farming::EntityAssigned {
                plot: plot(1),
                kind: corn,
            },
            Farming::GrowthUpdated {
                plot: plot(1),
                progress: 0.0,
            },
        ]),
    ]);
    assert_eq!(scenario.balance(), 95);
    let planted = scenario.game.farming.get_plot(plot(1)).unwrap();
    assert_eq!(planted.growth, GrowthState::GrowingFirstHalf);
    assert!(!planted.selected);
}

#[test]
fn test_tap_on_growing_plot_only_deselects() {
    let mut scenario = GameTestScenario::new().given_planted(1, "corn");
    scenario.game.update(2.0);
    let before = scenario.game.farming.get_plot(plot(1)).unwrap().growth_time;
    let scenario = scenario
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .then_events_should_be(vec![Event::Universe(vec![Universe::SelectionCleared])]);
    assert_eq!(scenario.balance(), 100);
    let growing = scenario.game.farming.get_plot(plot(1)).unwrap();
    assert_eq!(growing.growth, GrowthState::GrowingFirstHalf);
    assert_eq!(growing.growth_time, before);
    assert!(!growing.selected);
}

#[test]
fn test_tap_applies_care_with_priority() {
    let mut scenario = GameTestScenario::new().given_planted(1, "corn");
    scenario.game.update(9.0);
    let scenario = scenario
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .then_events_should_be(vec![Event::Farming(vec![Farming::CareCompleted {
            plot: plot(1),
        }])]);
    assert_eq!(
        scenario.game.farming.get_plot(plot(1)).unwrap().growth,
        GrowthState::GrowingSecondHalf
    );
}

#[test]
fn test_tap_on_ripe_plot_sells_harvest() {
    let mut scenario = GameTestScenario::new().given_planted(1, "corn");
    scenario.game.update(9.0);
    let apply_care = scenario.game.farming.apply_care(plot(1)).unwrap();
    apply_care();
    scenario.game.update(4.0);
    let corn = scenario.entity_key("corn");
    let scenario = scenario
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .then_events_should_be(vec![
            Event::Economy(vec![Economy::BalanceChanged { balance: 125 }]),
            Event::Farming(vec![Farming::PlotCleared { plot: plot(1) }]),
            Event::Universe(vec![Universe::SaleCompleted {
                plot: plot(1),
                kind: corn,
                price: 25,
            }]),
        ]);
    assert_eq!(scenario.balance(), 125);
    let cleared = scenario.game.farming.get_plot(plot(1)).unwrap();
    assert_eq!(cleared.growth, GrowthState::Empty);
    assert!(cleared.entity.is_none());
    assert!(!cleared.selected);
}

#[test]
fn test_full_corn_season() {
    let mut scenario = GameTestScenario::new()
        .when_player_performs(Action::TapPlot {
            plot: Some(plot(1)),
        })
        .when_player_performs(Action::BuyFarmEntity {
            kind: "corn".to_string(),
        });
    assert_eq!(scenario.balance(), 95);
    assert_eq!(
        scenario.game.farming.get_plot(plot(1)).unwrap().growth,
        GrowthState::GrowingFirstHalf
    );

    scenario.game.update(8.5);
    assert_eq!(
        scenario.game.farming.get_plot(plot(1)).unwrap().growth,
        GrowthState::NeedsCare
    );

    scenario = scenario.when_player_performs(Action::TapPlot {
        plot: Some(plot(1)),
    });
    assert_eq!(
        scenario.game.farming.get_plot(plot(1)).unwrap().growth,
        GrowthState::GrowingSecondHalf
    );

    scenario.game.update(12.0);
    assert_eq!(
        scenario.game.farming.get_plot(plot(1)).unwrap().growth,
        GrowthState::Ripe
    );

    scenario = scenario.when_player_performs(Action::TapPlot {
        plot: Some(plot(1)),
    });
    assert_eq!(scenario.balance(), 120);
    let harvested = scenario.game.farming.get_plot(plot(1)).unwrap();
    assert_eq!(harvested.growth, GrowthState::Empty);
    assert!(harvested.entity.is_none());
    assert!(!harvested.selected);
}

#[test]
fn test_plot_info_reports_current_entity() {
    let scenario = GameTestScenario::new().given_planted(1, "corn");
    let info = scenario.game.get_plot_info(plot(1)).unwrap();
    assert_eq!(info.name, "corn");
    assert_eq!(info.sell_price, 25);
    assert!(scenario.game.get_plot_info(plot(2)).is_none());

    // event consumers resolve catalog keys back to kinds
    let kind = scenario.game.known.farm_entities.get(info.id).unwrap();
    assert_eq!(kind.display_name, "Corn");
}

#[test]
fn test_look_around_reports_plots_and_balance() {
    let scenario = GameTestScenario::new();
    let events = scenario.game.look_around();
    assert_eq!(
        events,
        vec![
            Event::Universe(vec![
                Universe::PlotAppeared {
                    plot: plot(1),
                    kind: None,
                    growth: GrowthState::Empty,
                    stage: VisualStage::Soil,
                },
                Universe::PlotAppeared {
                    plot: plot(2),
                    kind: None,
                    growth: GrowthState::Empty,
                    stage: VisualStage::Soil,
                },
                Universe::PlotAppeared {
                    plot: plot(3),
                    kind: None,
                    growth: GrowthState::Empty,
                    stage: VisualStage::Soil,
                },
            ]),
            Event::Economy(vec![Economy::BalanceChanged { balance: 100 }]),
        ]
    );
}
