//! Top-level game orchestration
//!
//! Owns the scenario list and the notion of "the current scenario". There is
//! no global instance: the host constructs a `Game`, feeds it one
//! `FrameInput` + delta per frame, and reads whatever it wants to present.

use crate::scenarios;
use crate::sim::{FrameInput, Scenario};

pub struct Game {
    scenarios: Vec<Scenario>,
    current: Option<usize>,
    is_running: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game with every built-in scenario registered and none started
    pub fn new() -> Self {
        Self {
            scenarios: scenarios::all(),
            current: None,
            is_running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn scenario_names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.name.as_str())
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current.map(|index| &self.scenarios[index])
    }

    /// Wipe the current scenario (if any) and start the named one.
    ///
    /// Names match case-insensitively. An unknown name deselects: the game
    /// keeps running with no scenario, which is logged rather than an error.
    pub fn start_scenario_by_name(&mut self, name: &str) {
        if let Some(index) = self.current.take() {
            self.scenarios[index].wipe_clean();
        }

        let found = self
            .scenarios
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name));
        match found {
            Some(index) => {
                self.current = Some(index);
                self.scenarios[index].start();
            }
            None => {
                log::warn!("no scenario named '{name}'; nothing selected");
            }
        }
    }

    /// Advance one frame of the current scenario
    pub fn run_frame(&mut self, input: &FrameInput, dt: f32) {
        if input.exit {
            log::info!("exit requested");
            self.is_running = false;
            return;
        }

        if let Some(index) = self.current {
            self.scenarios[index].update(input, dt);
        }
    }
}
