//! Raylib window backend.
//!
//! Owns the raylib handle, thread token, and every loaded texture. Raylib
//! only allows drawing between `begin_drawing`/`end_drawing`, so `fill` and
//! `blit` buffer commands which `present` replays inside a single drawing
//! scope.
//!
//! Frame pacing is left to the engine [`Clock`](crate::services::time::Clock);
//! raylib's own target-fps limiter stays disabled.

use glam::Vec2;
use log::info;
use raylib::prelude::*;
use smallvec::SmallVec;

use crate::error::EngineError;
use crate::services::colour::Rgb;

use super::{InputSnapshot, Key, SurfaceId, Window, WindowEvent};

const ALL_KEYS: [Key; 10] = [
    Key::W,
    Key::A,
    Key::S,
    Key::D,
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Space,
    Key::Escape,
];

fn to_raylib_key(key: Key) -> KeyboardKey {
    match key {
        Key::W => KeyboardKey::KEY_W,
        Key::A => KeyboardKey::KEY_A,
        Key::S => KeyboardKey::KEY_S,
        Key::D => KeyboardKey::KEY_D,
        Key::Up => KeyboardKey::KEY_UP,
        Key::Down => KeyboardKey::KEY_DOWN,
        Key::Left => KeyboardKey::KEY_LEFT,
        Key::Right => KeyboardKey::KEY_RIGHT,
        Key::Space => KeyboardKey::KEY_SPACE,
        Key::Escape => KeyboardKey::KEY_ESCAPE,
    }
}

fn to_raylib_colour(colour: Rgb) -> Color {
    Color::new(colour.0, colour.1, colour.2, 255)
}

struct BlitCmd {
    surface: SurfaceId,
    pos: Vec2,
}

/// Windowed backend over raylib.
pub struct RaylibWindow {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: Vec<Texture2D>,
    dim: Vec2,
    clear_colour: Rgb,
    commands: Vec<BlitCmd>,
}

impl RaylibWindow {
    /// Open a resizable window of the given dimension.
    pub fn new(dim: Vec2, title: &str) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(dim.x as i32, dim.y as i32)
            .resizable()
            .title(title)
            .build();
        // ESC must not kill the window behind the engine's back.
        rl.set_exit_key(None);

        info!("Window created at {}x{}.", dim.x as i32, dim.y as i32);

        Self {
            rl,
            thread,
            textures: Vec::new(),
            dim,
            clear_colour: (0, 0, 0),
            commands: Vec::new(),
        }
    }

    fn store_texture(&mut self, texture: Texture2D) -> (SurfaceId, Vec2) {
        let dim = Vec2::new(texture.width as f32, texture.height as f32);
        let id = SurfaceId(self.textures.len() as u32);
        self.textures.push(texture);
        (id, dim)
    }
}

impl Window for RaylibWindow {
    fn dim(&self) -> Vec2 {
        self.dim
    }

    fn resize(&mut self) -> Vec2 {
        self.dim = Vec2::new(
            self.rl.get_screen_width() as f32,
            self.rl.get_screen_height() as f32,
        );
        self.dim
    }

    fn fill(&mut self, colour: Rgb) {
        self.clear_colour = colour;
    }

    fn blit(&mut self, surface: SurfaceId, pos: Vec2) {
        self.commands.push(BlitCmd { surface, pos });
    }

    fn present(&mut self) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(to_raylib_colour(self.clear_colour));
        for cmd in self.commands.drain(..) {
            if let Some(texture) = self.textures.get(cmd.surface.0 as usize) {
                d.draw_texture(texture, cmd.pos.x as i32, cmd.pos.y as i32, Color::WHITE);
            }
        }
        // Drawing scope ends here; raylib swaps buffers and pumps events.
    }

    fn poll_events(&mut self) -> SmallVec<[WindowEvent; 4]> {
        let mut events = SmallVec::new();
        if self.rl.window_should_close() {
            events.push(WindowEvent::CloseRequested);
        }
        if self.rl.is_window_resized() {
            let dim = self.resize();
            events.push(WindowEvent::Resized(dim));
        }
        events
    }

    fn input(&self) -> InputSnapshot {
        InputSnapshot::from_held(
            ALL_KEYS
                .iter()
                .copied()
                .filter(|key| self.rl.is_key_down(to_raylib_key(*key))),
        )
    }

    fn load_surface(&mut self, path: &str) -> Result<(SurfaceId, Vec2), EngineError> {
        let texture = self
            .rl
            .load_texture(&self.thread, path)
            .map_err(|e| EngineError::Reference(format!("failed to load image '{}': {}", path, e)))?;
        Ok(self.store_texture(texture))
    }

    fn create_solid_surface(&mut self, dim: Vec2, colour: Rgb) -> SurfaceId {
        let image = Image::gen_image_color(
            dim.x.max(1.0) as i32,
            dim.y.max(1.0) as i32,
            to_raylib_colour(colour),
        );
        match self.rl.load_texture_from_image(&self.thread, &image) {
            Ok(texture) => self.store_texture(texture).0,
            Err(_) => SurfaceId(u32::MAX),
        }
    }

    fn surface_dim(&self, surface: SurfaceId) -> Option<Vec2> {
        self.textures
            .get(surface.0 as usize)
            .map(|texture| Vec2::new(texture.width as f32, texture.height as f32))
    }
}
