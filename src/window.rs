//! Windowed front-end (raylib).
//!
//! Each frame the engine canvas is uploaded into a texture and drawn over a
//! dark sky, then the greeting card text is drawn on top. The default raylib
//! font only covers ASCII, so non-ASCII characters in the card may render as
//! placeholders.
//!
//! Keys:
//! - `B` or left click – big burst
//! - `T` – toggle the animation on and off
//! - `M` – show or hide the blessing

use log::{error, info};
use raylib::prelude::*;

use crate::engine::Engine;
use crate::greeting::Card;
use crate::resources::engineconfig::EngineConfig;

const SKY: Color = Color::new(11, 16, 32, 255);
const TITLE_SIZE: i32 = 32;
const BODY_SIZE: i32 = 20;
const MARGIN: i32 = 24;

/// Device pixel ratio from the window's DPI scale; invalid scales mean 1.
fn surface_dpr(scale: Vector2) -> f32 {
    let dpr = scale.x.max(scale.y);
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

fn resize_to_window(rl: &RaylibHandle, engine: &mut Engine) {
    let (w, h) = (rl.get_screen_width().max(0), rl.get_screen_height().max(0));
    let dpr = surface_dpr(rl.get_window_scale_dpi());
    info!("Surface is {}x{} @{}x", w, h, dpr);
    engine.resize(w as u32, h as u32, dpr);
}

fn canvas_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    engine: &Engine,
) -> Option<Texture2D> {
    let canvas = engine.canvas()?;
    let (w, h) = canvas.pixel_size();
    let image = Image::gen_image_color(w as i32, h as i32, Color::BLANK);
    match rl.load_texture_from_image(thread, &image) {
        Ok(texture) => Some(texture),
        Err(e) => {
            error!("Failed to create canvas texture: {}", e);
            None
        }
    }
}

/// Open a window and run until it is closed.
pub fn run(engine: &mut Engine, card: &mut Card, config: &EngineConfig) {
    let (mut rl, thread) = raylib::init()
        .size(config.width as i32, config.height as i32)
        .resizable()
        .title("Skyburst")
        .build();
    rl.set_target_fps(config.target_fps);

    engine.start();
    if engine.canvas().map(|c| c.dpr()) != Some(surface_dpr(rl.get_window_scale_dpi())) {
        resize_to_window(&rl, engine);
    }
    let mut texture = canvas_texture(&mut rl, &thread, engine);

    while !rl.window_should_close() {
        if rl.is_window_resized() {
            resize_to_window(&rl, engine);
            texture = canvas_texture(&mut rl, &thread, engine);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_B)
            || rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
        {
            engine.big_burst();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            engine.toggle();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            card.toggle_blessing();
        }

        let dt = rl.get_frame_time();
        engine.frame(dt);
        card.update(dt);

        if let (Some(tex), Some(canvas)) = (texture.as_mut(), engine.canvas()) {
            if let Err(e) = tex.update_texture(canvas.as_bytes()) {
                error!("Failed to upload canvas: {}", e);
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(SKY);
        if let (Some(tex), Some(canvas)) = (texture.as_ref(), engine.canvas()) {
            d.draw_texture_ex(tex, Vector2::zero(), 0.0, 1.0 / canvas.dpr(), Color::WHITE);
        }

        let mut y = MARGIN;
        d.draw_text(&card.title(), MARGIN, y, TITLE_SIZE, Color::WHITE);
        y += TITLE_SIZE + 12;
        d.draw_text(card.message(), MARGIN, y, BODY_SIZE, Color::WHITE);
        y += BODY_SIZE + 12;
        if let Some(blessing) = card.blessing() {
            d.draw_text(blessing, MARGIN, y, BODY_SIZE, Color::new(255, 211, 110, 255));
        }
        let hint = if engine.is_enabled() {
            "[B] burst  [T] pause  [M] blessing"
        } else {
            "[T] resume  [M] blessing"
        };
        d.draw_text(hint, MARGIN, d.get_screen_height() - MARGIN - 14, 14, Color::GRAY);
    }
}
