//! Game state machine
//!
//! Picks which per-frame routine runs: the title menu, the playing
//! simulation, or the pause screen. Holds nothing beyond the current screen
//! tag, the world, and what it needs to draw.

use glam::Vec2;

use crate::input::{Action, Keyboard};
use crate::renderer::{Canvas, Scene, colors};
use crate::settings::Settings;
use crate::sim::{TickInput, World, tick};
use crate::tuning::Tuning;

/// Which routine runs this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title; waiting for confirm
    #[default]
    Menu,
    Playing,
    Paused,
}

/// Everything the host drives once per frame
#[derive(Debug)]
pub struct Game {
    pub screen: Screen,
    pub world: World,
    pub scene: Scene,
    pub settings: Settings,
}

impl Game {
    pub fn new(settings: Settings, tuning: Tuning, seed: u64) -> Self {
        let mut world = World::new(settings.field(), tuning, seed);
        let scene = Scene::new(&world.tuning, &mut world.rng);
        log::info!("Game created (seed {seed})");
        Self {
            screen: Screen::Menu,
            world,
            scene,
            settings,
        }
    }

    /// Run one frame. Always returns true; the process only ends when the
    /// host closes its window.
    pub fn frame(&mut self, dt: f32, keys: &impl Keyboard, canvas: &mut impl Canvas) -> bool {
        match self.screen {
            Screen::Menu => self.menu_frame(keys, canvas),
            Screen::Playing => self.playing_frame(dt, keys, canvas),
            Screen::Paused => self.pause_frame(keys, canvas),
        }
        true
    }

    fn menu_frame(&mut self, keys: &impl Keyboard, canvas: &mut impl Canvas) {
        canvas.clear(colors::BACKGROUND);
        canvas.draw_text(Vec2::new(200.0, 100.0), "ASTEROIDS", colors::TEXT, 8.0);
        canvas.draw_text(
            Vec2::new(100.0, 300.0),
            "> Press ENTER to start <",
            colors::TEXT,
            4.0,
        );

        if keys.pressed(Action::Confirm) {
            self.set_screen(Screen::Playing);
        }
    }

    fn playing_frame(&mut self, dt: f32, keys: &impl Keyboard, canvas: &mut impl Canvas) {
        // Pausing skips the rest of the frame
        if keys.pressed(Action::Pause) {
            self.set_screen(Screen::Paused);
            return;
        }

        let input = TickInput::from_keyboard(keys);
        tick(&mut self.world, &input, dt);
        self.scene
            .draw(canvas, &self.world, self.settings.debug_collision);
    }

    fn pause_frame(&mut self, keys: &impl Keyboard, canvas: &mut impl Canvas) {
        canvas.clear(colors::BACKGROUND);
        canvas.draw_text(Vec2::new(200.0, 100.0), "PAUSED", colors::TEXT, 5.0);
        canvas.draw_text(
            Vec2::new(100.0, 200.0),
            "> Press ENTER to resume <",
            colors::TEXT,
            1.5,
        );
        canvas.draw_text(
            Vec2::new(100.0, 230.0),
            "> Press R to restart <",
            colors::TEXT,
            1.5,
        );

        if keys.pressed(Action::Restart) {
            self.world.events.clear();
            self.world.reset();
            self.set_screen(Screen::Playing);
        } else if keys.pressed(Action::Confirm) {
            self.set_screen(Screen::Playing);
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log::info!("Screen {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeySnapshot;
    use crate::renderer::LineBatch;

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(Settings::default(), Tuning::default(), 31337)
    }

    #[test]
    fn test_menu_waits_for_confirm() {
        let mut game = game();
        let mut batch = LineBatch::new();
        game.frame(DT, &KeySnapshot::new(), &mut batch);
        assert_eq!(game.screen, Screen::Menu);
        assert_eq!(batch.texts[0].text, "ASTEROIDS");

        game.frame(DT, &KeySnapshot::new().press(Action::Confirm), &mut batch);
        assert_eq!(game.screen, Screen::Playing);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut game = game();
        let mut batch = LineBatch::new();
        game.screen = Screen::Playing;

        game.frame(DT, &KeySnapshot::new().press(Action::Pause), &mut batch);
        assert_eq!(game.screen, Screen::Paused);

        let before = game.world.asteroids.clone();
        for _ in 0..10 {
            game.frame(DT, &KeySnapshot::new().hold(Action::Thrust), &mut batch);
        }
        assert_eq!(game.world.asteroids, before);
        assert_eq!(game.screen, Screen::Paused);

        game.frame(DT, &KeySnapshot::new().press(Action::Confirm), &mut batch);
        assert_eq!(game.screen, Screen::Playing);
    }

    #[test]
    fn test_restart_from_pause_resets_world() {
        let mut game = game();
        let mut batch = LineBatch::new();
        game.screen = Screen::Paused;
        game.world.score = 5000;
        game.world.fire_bullet();
        game.world.ship.pos = Vec2::new(10.0, 10.0);

        game.frame(DT, &KeySnapshot::new().press(Action::Restart), &mut batch);

        assert_eq!(game.screen, Screen::Playing);
        assert_eq!(game.world.score, 0);
        assert!(game.world.bullets.is_empty());
        assert_eq!(game.world.ship.pos, Vec2::new(480.0, 270.0));
        assert_eq!(game.world.asteroids.len(), 2);
    }

    #[test]
    fn test_playing_frame_draws_world() {
        let mut game = game();
        let mut batch = LineBatch::new();
        game.screen = Screen::Playing;

        assert!(game.frame(DT, &KeySnapshot::new().press(Action::Fire), &mut batch));
        assert_eq!(game.world.bullets.len(), 1);
        assert!(batch.segment_count() > 0);
        assert_eq!(batch.texts[0].text, "SCORE: 0");
    }
}
