//! Demo scene.
//!
//! Builds a small scene exercising every object kind: a WASD-pannable
//! camera, a scattering of sprite squares, a blinking animated beacon, and
//! a trigger volume. No asset files are needed; all surfaces are generated
//! solid-colour squares.

use glam::Vec2;
use log::info;

use crate::components::animation::Animation;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::objects::camera::Camera;
use crate::objects::game_object::GameObject;
use crate::objects::sprite::{AnimatedObject, SpriteObject};
use crate::objects::trigger::Trigger;
use crate::services::audio::{AudioCmd, AudioService};
use crate::services::colour::{ColourService, OUTLINE_COLOUR};
use crate::services::image::{Image, ImageService};
use crate::services::storage::StorageService;

const SNOWFLAKES: u32 = 24;
const CAMERA_PAN_SPEED: f32 = 200.0;

/// Populate the engine with the demo scene.
pub fn setup(engine: &mut Engine) -> Result<(), EngineError> {
    // Palette.
    {
        let colours = engine.services_mut().get_mut::<ColourService>()?;
        colours.add_colour("night", (12, 16, 32));
        colours.add_colour("snow", (235, 240, 245));
        colours.add_colour("ember", (220, 120, 40));
        colours.add_colour("ice", (150, 200, 230));
    }
    let (snow, ember, ice) = {
        let colours = engine.services().get::<ColourService>()?;
        (
            colours.get_colour("snow"),
            colours.get_colour("ember"),
            colours.get_colour("ice"),
        )
    };

    // Generated surfaces stand in for image assets.
    let snow_surface = engine
        .window_mut()
        .create_solid_surface(Vec2::new(16.0, 16.0), snow);
    let ember_surface = engine
        .window_mut()
        .create_solid_surface(Vec2::new(24.0, 24.0), ember);
    let ice_surface = engine
        .window_mut()
        .create_solid_surface(Vec2::new(24.0, 24.0), ice);
    let outline_surface = engine
        .window_mut()
        .create_solid_surface(Vec2::new(48.0, 48.0), OUTLINE_COLOUR);

    {
        let images = engine.services_mut().get_mut::<ImageService>()?;
        images.add("snowflake", snow_surface, Vec2::new(16.0, 16.0));
        images.add("beacon_on", ember_surface, Vec2::new(24.0, 24.0));
        images.add("beacon_off", ice_surface, Vec2::new(24.0, 24.0));
    }

    // Camera first, so the scene has its transform from frame one.
    let camera = Camera::new("camera", Vec2::ZERO, 1.0).with_pan_speed(CAMERA_PAN_SPEED);
    engine.handler_mut().add("camera", Box::new(camera), true);
    engine.handler_mut().set_camera(Some("camera"));

    // A field of scattered snowflake sprites.
    let snow_image: Image = {
        let images = engine.services().get::<ImageService>()?;
        images
            .get("snowflake")
            .ok_or_else(|| EngineError::Reference("image 'snowflake' missing".into()))?
    };
    for i in 0..SNOWFLAKES {
        let pos = Vec2::new(
            fastrand::f32() * 800.0 - 400.0,
            fastrand::f32() * 600.0 - 300.0,
        );
        let name = format!("snowflake-{i}");
        let sprite = SpriteObject::new(name.clone(), pos, snow_image);
        engine.handler_mut().add(name, Box::new(sprite), false);
    }

    // Blinking beacon above the origin.
    let mut beacon = AnimatedObject::new("beacon", Vec2::new(0.0, -80.0), Vec2::new(24.0, 24.0));
    {
        let images = engine.services().get::<ImageService>()?;
        let mut blink = Animation::new(800.0, true);
        blink.set_frames(&["beacon_on", "beacon_off"], images);
        beacon.animations_mut().add("blink", blink);
        beacon.animations_mut().set_default("blink");
        beacon.animations_mut().set_current("blink", true, 0.0);
    }
    engine.handler_mut().add("beacon", Box::new(beacon), true);

    // Goal trigger with its debug outline visible.
    let mut goal = Trigger::new("goal", Vec2::new(120.0, 40.0), Vec2::new(48.0, 48.0))
        .with_outline(outline_surface);
    goal.set_display(true);
    engine.handler_mut().add("goal", Box::new(goal), true);

    // Nudge the audio thread when it is registered; the demo ships no
    // audio files, so this stays at volume bookkeeping.
    if let Ok(audio) = engine.services().get::<AudioService>() {
        audio.send(AudioCmd::SetVolume(0.8));
    }

    // Count demo launches if persistent storage is registered.
    if let Ok(storage) = engine.services_mut().get_mut::<StorageService>() {
        storage.load().ok();
        let visits: u32 = storage.get("visits").unwrap_or(0);
        storage.set("visits", &(visits + 1)).ok();
        storage.save().ok();
        info!("Demo visit number {}.", visits + 1);
    }

    Ok(())
}
