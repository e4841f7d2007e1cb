//! Bounce Box: minimal 2D software rasterizer demo
//!
//! Simple shapes (boxes, triangles, line segments) bounce around a
//! software-rendered canvas. All pixels are drawn on the CPU into an
//! RGBA framebuffer; macroquad only opens the window and presents the
//! finished frame as a texture.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod rasterizer;
mod scene;

use macroquad::prelude::*;

use config::{load_config, save_config, DemoConfig, CONFIG_PATH};
use rasterizer::Framebuffer;
use scene::{RandomSource, Scene};

/// Random source backed by macroquad's RNG (inclusive bounds)
struct QuadRandom;

impl RandomSource for QuadRandom {
    fn gen_range(&mut self, min: i32, max: i32) -> i32 {
        macroquad::rand::gen_range(min, max + 1)
    }
}

fn window_conf() -> Conf {
    let cfg = load_config(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: format!("Bounce Box v{}", VERSION),
        window_width: cfg.width as i32 * 2,
        window_height: cfg.height as i32 * 2,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Write the current framebuffer to a PNG next to the executable
fn save_frame(fb: &Framebuffer, frame: u64) -> Result<String, image::ImageError> {
    let path = format!("frame_{:05}.png", frame);
    image::save_buffer(
        &path,
        fb.bytes(),
        fb.width as u32,
        fb.height as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(path)
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = match load_config(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("No config at {} ({}), using defaults", CONFIG_PATH, e);
            let cfg = DemoConfig::default();
            if let Some(parent) = std::path::Path::new(CONFIG_PATH).parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match save_config(&cfg, CONFIG_PATH) {
                Ok(()) => println!("Wrote default config to {}", CONFIG_PATH),
                Err(e) => eprintln!("Could not write default config: {}", e),
            }
            cfg
        }
    };

    let seed = if cfg.seed == 0 {
        miniquad::date::now() as u64
    } else {
        cfg.seed
    };
    macroquad::rand::srand(seed);

    let mut scene = Scene::from_config(&cfg, Box::new(QuadRandom));

    // Fixed-rate simulation: render every display frame, but only
    // advance the scene once enough wall time has accumulated.
    let tick_interval = 1.0 / cfg.fps.max(1) as f32;
    let mut accumulator = 0.0_f32;
    let mut frame_count: u64 = 0;

    println!("=== Bounce Box v{} ({}x{} @ {} tps) ===", VERSION, cfg.width, cfg.height, cfg.fps);

    loop {
        accumulator += get_frame_time();
        while accumulator >= tick_interval {
            accumulator -= tick_interval;
            scene.tick();
            frame_count += 1;
        }

        clear_background(BLACK);

        // Upload the software framebuffer and scale it to the window,
        // preserving aspect ratio
        let fb = scene.framebuffer();
        let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, fb.bytes());
        texture.set_filter(FilterMode::Nearest);

        let scale = (screen_width() / fb.width as f32).min(screen_height() / fb.height as f32);
        let dest = vec2(fb.width as f32 * scale, fb.height as f32 * scale);
        draw_texture_ex(
            &texture,
            (screen_width() - dest.x) / 2.0,
            (screen_height() - dest.y) / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(dest),
                ..Default::default()
            },
        );

        // Debug overlay
        draw_text(
            &format!("frame {}  {} fps", frame_count, get_fps()),
            10.0,
            20.0,
            20.0,
            WHITE,
        );

        if is_key_pressed(KeyCode::S) {
            match save_frame(fb, frame_count) {
                Ok(path) => println!("Saved {}", path),
                Err(e) => eprintln!("Frame capture failed: {}", e),
            }
        }

        next_frame().await;
    }
}
