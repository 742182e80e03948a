//! Seedfall: a side-scrolling seed hunt
//!
//! Collect every seed, avoid (or stomp) the skull, and leave through the
//! portal. Runs the built-in demo level, or a RON level file given as the
//! first argument.

use macroquad::prelude::{clear_background, get_last_key_pressed, next_frame, Conf, BLACK};

use seedfall::assets::Assets;
use seedfall::input;
use seedfall::level::{load_level, Level};
use seedfall::render;
use seedfall::sim::{Notice, Sim};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Seedfall v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn notice_message(notice: Notice) -> String {
    match notice {
        Notice::Completed { score } => {
            format!("Level complete! Final score: {}", score)
        }
        Notice::SeedsMissing => "Collect every seed before the portal!".to_string(),
    }
}

fn boot_level() -> Level {
    match std::env::args().nth(1) {
        Some(path) => match load_level(&path) {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Failed to load level {}: {}", path, e);
                eprintln!("Falling back to the demo level");
                Level::demo()
            }
        },
        None => Level::demo(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let level = boot_level();
    println!("Playing level: {}", level.name);

    let assets = Assets::load("assets").await;
    let mut sim = Sim::new(level);
    let mut modal: Option<String> = None;

    loop {
        clear_background(BLACK);

        // A pending modal pauses the simulation until any key is pressed.
        if let Some(message) = &modal {
            render::draw_scene(&sim, &assets);
            render::draw_overlay(message);
            if get_last_key_pressed().is_some() {
                modal = None;
            }
            next_frame().await;
            continue;
        }

        let frame = input::sample();
        sim.tick(&frame);
        if let Some(notice) = sim.take_notice() {
            modal = Some(notice_message(notice));
        }

        render::draw_scene(&sim, &assets);
        next_frame().await;
    }
}
