//! PIXWAR: a tiny fixed shooter.
//!
//! One combatant steers along the bottom of the stage and fires upward at
//! an 8x3 grid of patrolling adversaries that fire back. Everything is a
//! rectangle; anything that overlaps anything else is removed. One
//! simulation tick per display frame, until the window closes.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod audio;
mod config;
mod game;
mod input;
mod tuning;

use macroquad::prelude::*;

use audio::ShotAudio;
use game::components::Kind;
use game::{renderer, Sim};
use input::{InputEvent, InputState};

fn window_conf() -> Conf {
    // The window opens at the default stage size; a custom config resizes
    // it right after loading.
    let stage = config::StageConfig::default();
    Conf {
        window_title: format!("PIXWAR v{}", VERSION),
        window_width: stage.width as i32,
        window_height: stage.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config::load_or_default(config::CONFIG_PATH).await;
    request_new_screen_size(config.width, config.height);

    let shot_audio = ShotAudio::load(audio::SHOT_SOUND_PATH, config.volume).await;

    let seed = miniquad::date::now() as u32;
    let mut sim = Sim::new(&config, seed);
    info!(
        "Stage ready: {} adversaries, {}x{} px",
        sim.world.count_of(Kind::Adversary),
        config.width,
        config.height
    );

    let mut controls = InputState::new();
    let mut pending: Vec<InputEvent> = Vec::new();

    loop {
        // Input edges collected this frame apply to this tick.
        input::poll(&mut pending);
        controls.drain(&mut pending);

        sim.tick(&controls);

        for _ in sim.events.shots.drain() {
            shot_audio.play();
        }
        for destroyed in sim.events.destroyed.drain() {
            debug!(
                "{:?} destroyed at ({:.0}, {:.0})",
                destroyed.kind, destroyed.at.x, destroyed.at.y
            );
        }

        renderer::draw(&sim.world);
        next_frame().await;
    }
}
