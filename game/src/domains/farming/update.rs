use crate::farming::Farming::{CareRequired, EntityRipened, GrowthUpdated, StageChanged};
use crate::farming::{Farming, FarmingDomain, GrowthState};

impl FarmingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Farming> {
        let mut events = vec![];
        for plot in self.plots.iter_mut() {
            let kind = match &plot.entity {
                Some(kind) => kind,
                None => continue,
            };
            match plot.growth {
                GrowthState::GrowingFirstHalf => {
                    // clamp at the care boundary so a large tick cannot overshoot it
                    plot.growth_time = (plot.growth_time + time).min(plot.care_point);
                    events.push(GrowthUpdated {
                        plot: plot.id,
                        progress: plot.growth_progress(),
                    });
                    let stage = plot.visual_stage();
                    if stage != plot.stage {
                        plot.stage = stage;
                        events.push(StageChanged { plot: plot.id, stage });
                    }
                    if plot.growth_time >= plot.care_point {
                        plot.growth = GrowthState::NeedsCare;
                        events.push(CareRequired {
                            plot: plot.id,
                            action: kind.category.care_action(),
                        });
                    }
                }
                GrowthState::GrowingSecondHalf => {
                    plot.growth_time = (plot.growth_time + time).min(plot.growth_duration);
                    events.push(GrowthUpdated {
                        plot: plot.id,
                        progress: plot.growth_progress(),
                    });
                    let stage = plot.visual_stage();
                    if stage != plot.stage {
                        plot.stage = stage;
                        events.push(StageChanged { plot: plot.id, stage });
                    }
                    if plot.growth_time >= plot.growth_duration {
                        plot.growth = GrowthState::Ripe;
                        events.push(EntityRipened { plot: plot.id });
                    }
                }
                // empty and ripe plots have nothing to grow, and a plot
                // waiting for care stays paused until the player acts
                _ => {}
            }
        }
        events
    }
}
