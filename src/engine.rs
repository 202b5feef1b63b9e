//! Engine driver.
//!
//! Ties the clock, window events, and the game object handler together.
//! One iteration of [`Engine::run`] is: drain window events, tick the
//! clock, drain pending fixed updates (bounded), draw the interpolated
//! frame, advance the interpolation baselines, present.
//!
//! Everything runs on one thread; the only blocking point is the clock's
//! own frame pacing.

use log::{info, warn};

use crate::config::EngineConfig;
use crate::objects::game_object::UpdateCtx;
use crate::objects::handler::GameObjectHandler;
use crate::services::colour::ColourService;
use crate::services::image::ImageService;
use crate::services::registry::ServiceRegistry;
use crate::services::time::{Clock, PacingMode};
use crate::window::{Window, WindowEvent};

/// Top-level engine state: window backend, clock, services, and objects.
pub struct Engine {
    window: Box<dyn Window>,
    clock: Clock,
    services: ServiceRegistry,
    handler: GameObjectHandler,
    background: Option<String>,
    max_catchup_steps: u32,
    running: bool,
}

impl Engine {
    /// Build an engine over the given window backend.
    ///
    /// Registers the core services (images, colours) into a fresh registry;
    /// optional services (audio, storage) are registered by the caller.
    pub fn new(config: &EngineConfig, window: Box<dyn Window>) -> Self {
        info!("Initialising engine.");

        let pacing = if config.stable_framerate {
            PacingMode::Stable
        } else {
            PacingMode::Sleep
        };
        let clock = Clock::new(config.target_fps, config.update_interval_ms, pacing);

        let mut services = ServiceRegistry::new();
        services.register(ImageService::new());
        services.register(ColourService::new());

        Self {
            window,
            clock,
            services,
            handler: GameObjectHandler::new(),
            background: config.background.clone(),
            max_catchup_steps: config.max_catchup_steps.max(1),
            running: true,
        }
    }

    /// The service registry.
    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// Mutable service registry, for setup code.
    pub fn services_mut(&mut self) -> &mut ServiceRegistry {
        &mut self.services
    }

    /// The game object handler.
    pub fn handler(&self) -> &GameObjectHandler {
        &self.handler
    }

    /// Mutable game object handler.
    pub fn handler_mut(&mut self) -> &mut GameObjectHandler {
        &mut self.handler
    }

    /// The window backend.
    pub fn window(&self) -> &dyn Window {
        self.window.as_ref()
    }

    /// Mutable window backend, for surface creation during setup.
    pub fn window_mut(&mut self) -> &mut dyn Window {
        self.window.as_mut()
    }

    /// The engine clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Mutable clock (pacing switches and tests).
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Whether the run loop will keep iterating.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the run loop to stop after the current frame.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Run until a quit is requested (close button or
    /// [`request_quit`](Self::request_quit)).
    ///
    /// The run flag is checked at the top of each iteration, so an
    /// in-flight fixed-update batch always finishes before exit.
    pub fn run(&mut self) {
        while self.running {
            self.frame();
        }
        info!("Engine loop terminated.");
    }

    /// Run at most `frames` iterations; used by headless smoke runs and
    /// tests.
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            if !self.running {
                break;
            }
            self.frame();
        }
    }

    /// One full frame: events, fixed updates, interpolated draw, present.
    pub fn frame(&mut self) {
        for event in self.window.poll_events() {
            match event {
                WindowEvent::CloseRequested => {
                    info!("Window close requested.");
                    self.running = false;
                }
                WindowEvent::Resized(_) => {
                    let dim = self.window.resize();
                    info!("Window resized to {}x{}.", dim.x as i32, dim.y as i32);
                }
            }
        }

        self.clock.tick();
        self.drain_fixed_updates();
        self.draw();
    }

    /// Consume pending fixed updates, at most `max_catchup_steps` per
    /// frame. When the cap is hit, whole pending intervals are discarded so
    /// a sustained stall cannot snowball into ever-longer update batches.
    fn drain_fixed_updates(&mut self) {
        // One input snapshot per frame; every catch-up step in the batch
        // sees the same keys.
        let input = self.window.input();
        let mut steps = 0;

        while self.clock.is_update() {
            let ctx = UpdateCtx {
                fixed_dt: self.clock.fixed_delta_seconds(),
                elapsed_ms: self.clock.elapsed_ms() as f32,
                now_ms: self.clock.now_ms(),
                input: &input,
            };
            self.handler.update(&ctx);

            steps += 1;
            if steps >= self.max_catchup_steps {
                let dropped = self.clock.discard_lag();
                if dropped > 0.0 {
                    warn!(
                        "Simulation running behind; dropped {:.1} ms of pending updates.",
                        dropped
                    );
                }
                break;
            }
        }
    }

    fn draw(&mut self) {
        let background = match (&self.background, self.services.get::<ColourService>()) {
            (Some(name), Ok(colours)) => colours.get_colour(name),
            _ => (0, 0, 0),
        };
        self.window.fill(background);

        self.handler
            .draw_to_window(self.window.as_mut(), self.clock.interpolation());
        self.handler.commit_frame();

        self.window.present();
    }
}
