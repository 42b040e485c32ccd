//! The fixed-cadence game loop.
//!
//! Each iteration measures the time since the previous one, consumes at most one
//! pending input event, advances the simulation, renders, and sleeps for the
//! rest of the tick budget.

use crate::core::clock::Clock;
use crate::core::config::GameConfig;
use crate::error::SurfaceError;
use crate::game::logic::{apply_flap, process_tick};
use crate::game::types::{GameState, Session};
use crate::input::{map_event, GameInput};
use crate::surface::Surface;
use crate::ui::{render_flappy, render_too_small};
use rand::Rng;
use tracing::{debug, info, warn};

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Drives a [`GameState`] against a surface, a clock and a random source.
pub struct GameLoop<S, C, R> {
    surface: S,
    clock: C,
    rng: R,
    state: GameState,
    exited: bool,
}

impl<S: Surface, C: Clock, R: Rng> GameLoop<S, C, R> {
    /// Start a game sized to the surface.
    ///
    /// A surface below the minimum size starts the game at the minimum size;
    /// the real size is adopted once the terminal is resized large enough.
    pub fn new(surface: S, clock: C, mut rng: R, config: GameConfig) -> Self {
        let (width, height) = surface.size();
        if !config.fits(width, height) {
            warn!(width, height, "terminal too small, waiting for resize");
        }
        let (game_width, game_height) = config.clamp_viewport(width, height);
        let state = GameState::new(config, game_width, game_height, clock.now(), &mut rng);
        info!(width = game_width, height = game_height, "game started");

        Self {
            surface,
            clock,
            rng,
            state,
            exited: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn session(&self) -> Session {
        if self.exited {
            Session::Exited
        } else {
            self.state.session()
        }
    }

    fn viewport_fits(&self) -> bool {
        let (width, height) = self.surface.size();
        self.state.config.fits(width, height)
    }

    /// Run one loop iteration without sleeping.
    pub fn step(&mut self) -> Result<LoopControl, SurfaceError> {
        if self.exited {
            return Ok(LoopControl::Exit);
        }

        let now = self.clock.now();
        let dt = now.saturating_duration_since(self.state.last_tick).as_secs_f64();
        self.state.last_tick = now;

        if let Some(input) = self.surface.poll_event().as_ref().and_then(map_event) {
            if self.handle_input(input) == LoopControl::Exit {
                return Ok(LoopControl::Exit);
            }
        }

        let fits = self.viewport_fits();
        if fits && !self.state.game_over {
            let result = process_tick(&mut self.state, dt, &mut self.rng);
            if let Some(cause) = result.death {
                info!(score = self.state.score, cause = ?cause, "game over");
            }
        }

        self.surface.clear();
        if fits {
            render_flappy(&mut self.surface, &self.state);
        } else {
            render_too_small(&mut self.surface, &self.state.config);
        }
        self.surface.present()?;

        self.state.animation_counter = self.state.animation_counter.wrapping_add(1);
        Ok(LoopControl::Continue)
    }

    fn handle_input(&mut self, input: GameInput) -> LoopControl {
        match input {
            GameInput::Quit => {
                info!(score = self.state.score, "quit");
                self.exited = true;
                return LoopControl::Exit;
            }
            GameInput::Resize => {
                let (width, height) = self.surface.size();
                if self.state.config.fits(width, height) {
                    debug!(width, height, "resized");
                    self.state.resize(width, height);
                } else {
                    warn!(width, height, "terminal too small, pausing");
                }
            }
            // Flap and reset wait until the viewport is playable again.
            _ if !self.viewport_fits() => {}
            GameInput::Flap => apply_flap(&mut self.state),
            GameInput::Reset => {
                if self.state.game_over {
                    self.state.reset(self.clock.now(), &mut self.rng);
                    info!("game reset");
                }
            }
        }
        LoopControl::Continue
    }

    /// Run until the player quits, sleeping out the remainder of each tick budget.
    pub fn run(&mut self) -> Result<(), SurfaceError> {
        let budget = self.state.config.tick_budget;
        loop {
            let started = self.clock.now();
            if self.step()? == LoopControl::Exit {
                return Ok(());
            }
            let elapsed = self.clock.now().saturating_duration_since(started);
            if let Some(remaining) = budget.checked_sub(elapsed) {
                if !remaining.is_zero() {
                    self.clock.sleep(remaining);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::game::types::Obstacle;
    use crate::surface::MemorySurface;
    use crossterm::event::KeyCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn new_loop(clock: &ManualClock, width: u16, height: u16) -> GameLoop<MemorySurface, &ManualClock, ChaCha8Rng> {
        GameLoop::new(
            MemorySurface::new(width, height),
            clock,
            ChaCha8Rng::seed_from_u64(42),
            GameConfig::default(),
        )
    }

    #[test]
    fn test_first_step_has_zero_dt() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.step().unwrap();
        assert!((game.state().bird.y - 10.0).abs() < f64::EPSILON);
        assert_eq!(game.state().animation_counter, 1);
        assert_eq!(game.surface().frames(), 1);
    }

    #[test]
    fn test_dt_comes_from_clock() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        let x = game.state().obstacles[0].x;
        clock.advance(Duration::from_millis(100));
        game.step().unwrap();
        assert!((game.state().obstacles[0].x - (x - 1.5)).abs() < 1e-9);
        assert_eq!(game.state().last_tick, clock.now());
    }

    #[test]
    fn test_quit_exits_without_rendering() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.surface_mut().push_key(KeyCode::Char('q'));
        assert_eq!(game.step().unwrap(), LoopControl::Exit);
        assert_eq!(game.session(), Session::Exited);
        assert_eq!(game.surface().frames(), 0);
        assert_eq!(game.step().unwrap(), LoopControl::Exit);
    }

    #[test]
    fn test_one_event_per_step() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.surface_mut().push_key(KeyCode::Char(' '));
        game.surface_mut().push_key(KeyCode::Char('q'));
        assert_eq!(game.step().unwrap(), LoopControl::Continue);
        assert_eq!(game.surface().pending_events(), 1);
        assert_eq!(game.step().unwrap(), LoopControl::Exit);
    }

    #[test]
    fn test_flap_applied_before_tick() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.surface_mut().push_key(KeyCode::Up);
        game.step().unwrap();
        assert_eq!(game.state().bird.velocity, -0.7);
    }

    #[test]
    fn test_reset_ignored_while_playing() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.state_mut().score = 3;
        game.surface_mut().push_key(KeyCode::Char('r'));
        game.step().unwrap();
        assert_eq!(game.state().score, 3);
    }

    #[test]
    fn test_reset_after_game_over() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.state_mut().game_over = true;
        game.state_mut().score = 3;
        game.surface_mut().push_key(KeyCode::Char('r'));
        game.step().unwrap();
        assert_eq!(game.session(), Session::Playing);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().obstacles.len(), 1);
    }

    #[test]
    fn test_no_tick_while_game_over() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.state_mut().game_over = true;
        game.state_mut().obstacles = vec![Obstacle::new(30.0, 8, 6)];
        clock.advance(Duration::from_millis(100));
        game.step().unwrap();
        assert!((game.state().obstacles[0].x - 30.0).abs() < f64::EPSILON);
        assert!(game.surface().frame_text().contains("GAME OVER"));
        assert_eq!(game.state().animation_counter, 1);
    }

    #[test]
    fn test_resize_keeps_game() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.state_mut().score = 5;
        game.surface_mut().resize(60, 30);
        game.step().unwrap();
        assert_eq!((game.state().width, game.state().height), (60, 30));
        assert_eq!(game.state().score, 5);
    }

    #[test]
    fn test_too_small_pauses() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        game.surface_mut().resize(40, 8);
        clock.advance(Duration::from_millis(100));
        game.step().unwrap();
        // Stored viewport and simulation are untouched
        assert_eq!((game.state().width, game.state().height), (40, 20));
        assert!((game.state().bird.y - 10.0).abs() < f64::EPSILON);
        assert!(game.surface().frame_text().contains("Terminal too small"));

        game.surface_mut().push_key(KeyCode::Char(' '));
        game.step().unwrap();
        assert!(game.state().bird.velocity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_starts_clamped_when_too_small() {
        let clock = ManualClock::new();
        let game = new_loop(&clock, 10, 5);
        assert_eq!((game.state().width, game.state().height), (20, 13));
        assert_eq!(game.state().obstacles.len(), 1);
    }

    #[test]
    fn test_run_paces_to_budget() {
        let clock = ManualClock::new();
        let mut game = new_loop(&clock, 40, 20);
        for _ in 0..3 {
            game.surface_mut().push_key(KeyCode::Char('x'));
        }
        game.surface_mut().push_key(KeyCode::Esc);
        game.run().unwrap();
        assert_eq!(game.session(), Session::Exited);
        assert_eq!(game.surface().frames(), 3);
        assert_eq!(clock.total_slept(), Duration::from_millis(30));
    }
}
