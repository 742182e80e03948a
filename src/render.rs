//! Scene drawing
//!
//! Pure drawing: reads the sim, never mutates it. Entities with a loaded
//! sheet draw the current animation frame; without one they draw as flat
//! colored rectangles so the game is playable with no art on disk.

use macroquad::prelude::{
    draw_rectangle, draw_text, draw_texture_ex, screen_height, screen_width, Color,
    DrawTextureParams, Rect, Texture2D, Vec2 as MqVec2, WHITE,
};

use crate::anim::SpriteSheet;
use crate::assets::Assets;
use crate::sim::player::MoveState;
use crate::sim::Sim;

const SKY_COLOR: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const GROUND_COLOR: Color = Color::new(0.13, 0.55, 0.13, 1.0);
const PLATFORM_COLOR: Color = Color::new(0.55, 0.27, 0.07, 1.0);
const CLOUD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const PLAYER_COLOR: Color = Color::new(0.2, 0.4, 0.9, 1.0);
const SEED_COLOR: Color = Color::new(0.95, 0.8, 0.2, 1.0);
const ENEMY_COLOR: Color = Color::new(0.3, 0.3, 0.3, 1.0);
const PORTAL_COLOR: Color = Color::new(0.6, 0.2, 0.8, 1.0);
const HUD_COLOR: Color = Color::new(0.1, 0.1, 0.1, 1.0);
const OVERLAY_BG: Color = Color::new(0.0, 0.0, 0.0, 0.6);

const CLOUD_W: f32 = 128.0;
const CLOUD_H: f32 = 64.0;

/// One animation frame from a sheet, or a flat rectangle when the sheet
/// texture never loaded.
fn draw_sprite(
    texture: &Option<Texture2D>,
    sheet: &SpriteSheet,
    frame: u32,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    flip_x: bool,
    fallback: Color,
) {
    match texture {
        Some(texture) => {
            let (sx, sy, sw, sh) = sheet.source_rect(frame);
            draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(MqVec2::new(w, h)),
                    source: Some(Rect::new(sx, sy, sw, sh)),
                    flip_x,
                    ..Default::default()
                },
            );
        }
        None => draw_rectangle(x, y, w, h, fallback),
    }
}

fn draw_tile(texture: &Option<Texture2D>, x: f32, y: f32, w: f32, h: f32, fallback: Color) {
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(MqVec2::new(w, h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, w, h, fallback),
    }
}

/// Which player sheet matches the current movement state.
fn player_texture<'a>(assets: &'a Assets, state: MoveState) -> &'a Option<Texture2D> {
    match state {
        MoveState::Idle => &assets.idle,
        MoveState::SideIdle => &assets.side_idle,
        MoveState::Walk => &assets.walk,
        MoveState::WalkFront => &assets.walk_front,
        MoveState::JumpSideways => &assets.jump_side,
        MoveState::JumpFront => &assets.jump_front,
    }
}

pub fn draw_scene(sim: &Sim, assets: &Assets) {
    let canvas = sim.level.canvas;

    draw_tile(&assets.background, 0.0, 0.0, canvas.width, canvas.height, SKY_COLOR);

    let ground = &sim.ground;
    for x in ground.tile_positions() {
        draw_tile(
            &assets.ground,
            x,
            ground.surface_y,
            ground.tile_width,
            ground.height,
            GROUND_COLOR,
        );
    }

    for cloud in &sim.clouds {
        draw_tile(&assets.cloud, cloud.pos.x, cloud.pos.y, CLOUD_W, CLOUD_H, CLOUD_COLOR);
    }

    for seed in &sim.seeds {
        if seed.collected {
            continue;
        }
        draw_sprite(
            &assets.seed,
            &assets.sheets.character,
            seed.cycle.frame,
            seed.pos.x,
            seed.pos.y,
            crate::sim::entities::SEED_SIZE,
            crate::sim::entities::SEED_SIZE,
            false,
            SEED_COLOR,
        );
    }

    for platform in &sim.platforms {
        draw_tile(
            &assets.platform,
            platform.pos.x,
            platform.pos.y,
            platform.size.w,
            platform.size.h,
            PLATFORM_COLOR,
        );
    }

    if let Some(enemy) = &sim.enemy {
        if !enemy.dead {
            draw_sprite(
                &assets.enemy,
                &assets.sheets.character,
                enemy.cycle.frame,
                enemy.pos.x,
                enemy.pos.y,
                enemy.size.w,
                enemy.size.h,
                !enemy.facing_right,
                ENEMY_COLOR,
            );
        }
    }

    // Inactive portals are invisible, matching their absent collision.
    if let Some(portal) = &sim.portal {
        if portal.active {
            draw_sprite(
                &assets.portal,
                &assets.sheets.portal,
                portal.cycle.frame,
                portal.pos.x,
                portal.pos.y,
                portal.size.w,
                portal.size.h,
                false,
                PORTAL_COLOR,
            );
        }
    }

    let player = &sim.player;
    draw_sprite(
        player_texture(assets, player.state),
        &assets.sheets.character,
        player.cycle.frame,
        player.pos.x,
        player.pos.y,
        player.size.w,
        player.size.h,
        !player.facing_right,
        PLAYER_COLOR,
    );

    draw_hud(sim);
}

fn draw_hud(sim: &Sim) {
    let points = format!("Points: {}", sim.score);
    let seeds = format!("Seeds: {}/{}", sim.seeds_collected(), sim.seeds.len());
    draw_text(&points, 20.0, 34.0, 28.0, HUD_COLOR);
    draw_text(&seeds, 20.0, 64.0, 28.0, HUD_COLOR);
}

/// Dimmed full-screen message, dismissed by the caller on a key press.
pub fn draw_overlay(message: &str) {
    let w = screen_width();
    let h = screen_height();
    draw_rectangle(0.0, 0.0, w, h, OVERLAY_BG);
    // Rough centering; macroquad's measure_text is slow, approximate.
    let text_w = message.len() as f32 * 14.0;
    draw_text(message, (w - text_w) / 2.0, h / 2.0, 32.0, WHITE);
    let hint = "Press any key to continue";
    let hint_w = hint.len() as f32 * 9.0;
    draw_text(hint, (w - hint_w) / 2.0, h / 2.0 + 40.0, 20.0, WHITE);
}
