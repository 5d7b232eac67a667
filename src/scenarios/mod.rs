//! Built-in scenario layouts
//!
//! Each scenario is a hand-authored (or seeded) population of one 1024x576
//! world: actors, areas, and the relationship wiring between them. The
//! engine treats these as opaque setup/update hook pairs.

mod claustrophobia;
mod crowd;
mod generic;
mod popularity;
mod responsibility;
mod schadenfreude;
mod self_doubt;
mod self_sacrifice;

use crate::sim::Scenario;

/// Every built-in scenario, in menu order
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario::new("generic", generic::start, generic::update),
        Scenario::new("popularity", popularity::start, popularity::update),
        Scenario::new("claustrophobia", claustrophobia::start, claustrophobia::update),
        Scenario::new("responsibility", responsibility::start, responsibility::update),
        Scenario::new("schadenfreude", schadenfreude::start, schadenfreude::update),
        Scenario::new("self_doubt", self_doubt::start, self_doubt::update),
        Scenario::new("self_sacrifice", self_sacrifice::start, self_sacrifice::update),
        Scenario::new("crowd", crowd::start, crowd::update),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActorState, FrameInput};

    #[test]
    fn test_every_scenario_populates_on_start() {
        for mut scenario in all() {
            scenario.start();
            assert!(
                !scenario.actors.is_empty(),
                "scenario '{}' has no actors",
                scenario.name
            );
            assert!(
                !scenario.areas.is_empty(),
                "scenario '{}' has no areas",
                scenario.name
            );
            assert!(
                scenario.actors.iter().any(|a| a.is_player),
                "scenario '{}' has no player",
                scenario.name
            );
        }
    }

    #[test]
    fn test_every_relationship_target_resolves() {
        for mut scenario in all() {
            scenario.start();
            for actor in &scenario.actors {
                for relationship in &actor.relationships {
                    let target = relationship.target.expect("built-in layouts wire targets");
                    assert!(target.index() < scenario.actors.len());
                }
            }
        }
    }

    #[test]
    fn test_scenarios_survive_a_few_idle_frames() {
        // Nobody should be dead within the first second of an untouched run
        for mut scenario in all() {
            scenario.start();
            for _ in 0..60 {
                scenario.update(&FrameInput::default(), 1.0 / 60.0);
            }
            assert!(
                scenario.actors.iter().all(|a| a.state != ActorState::Dead),
                "scenario '{}' lost an actor during idle frames",
                scenario.name
            );
        }
    }
}
