//! Throng entry point
//!
//! Headless demo driver: runs a scenario for a fixed number of frames with a
//! scripted input, logging progress. A windowed presenter would replace the
//! scripted input with real key state and hand the vertex lists to a GPU;
//! the simulation itself does not change.
//!
//! Usage: throng [scenario] [frames] [--dump]

use throng::consts::SIM_DT;
use throng::renderer;
use throng::sim::{ActorState, FrameInput};
use throng::Game;

fn main() {
    env_logger::init();

    let mut scenario_name = String::from("generic");
    let mut frames: u32 = 600;
    let mut dump = false;
    for (position, arg) in std::env::args().skip(1).enumerate() {
        if arg == "--dump" {
            dump = true;
        } else if position == 0 {
            scenario_name = arg;
        } else if let Ok(count) = arg.parse() {
            frames = count;
        }
    }

    let mut game = Game::new();
    log::info!(
        "registered scenarios: {}",
        game.scenario_names().collect::<Vec<_>>().join(", ")
    );
    game.start_scenario_by_name(&scenario_name);

    // Scripted input: walk east for the first half of the run, then coast
    for frame in 0..frames {
        if !game.is_running() {
            break;
        }
        let input = FrameInput {
            right: frame < frames / 2,
            ..Default::default()
        };
        game.run_frame(&input, SIM_DT);

        if frame % 60 == 0 {
            if let Some(scenario) = game.current_scenario() {
                let vertices = renderer::scenario_vertices(scenario);
                log::debug!(
                    "frame {frame}: {} actors, {} vertices",
                    scenario.actors.len(),
                    vertices.len()
                );
            }
        }
    }

    let Some(scenario) = game.current_scenario() else {
        log::warn!("no scenario ran; nothing to report");
        return;
    };

    let active = count_in_state(scenario.actors.iter().map(|a| a.state), ActorState::Active);
    let falling = count_in_state(scenario.actors.iter().map(|a| a.state), ActorState::Falling);
    let dead = count_in_state(scenario.actors.iter().map(|a| a.state), ActorState::Dead);
    log::info!(
        "'{}' after {:.1}s: {} active, {} falling, {} dead",
        scenario.name,
        scenario.clock.now(),
        active,
        falling,
        dead
    );

    if dump {
        match serde_json::to_string_pretty(scenario) {
            Ok(json) => println!("{json}"),
            Err(error) => log::error!("state dump failed: {error}"),
        }
    }
}

fn count_in_state(states: impl Iterator<Item = ActorState>, wanted: ActorState) -> usize {
    states.filter(|state| *state == wanted).count()
}
