//! The playground scene: a ground slab, a ramp and a keyboard-steerable ball
//! watched by an orbiting camera. Drag with the left mouse button to orbit,
//! scroll to zoom, steer with WASD.

use log::{LevelFilter, error};
use nalgebra::Vector3;
use rollabout::controllers::{BallController, OrbitCameraController};
use rollabout::prefabs::{BallPrefab, CameraPrefab, GroundPrefab, RampPrefab};
use rollabout::{AppRuntime, AppState, World};
use std::error::Error;
use winit::keyboard::KeyCode;
use winit::window::Window;

#[derive(Default)]
struct BasicWorld {
    steering: Option<BallController>,
    orbit: Option<OrbitCameraController>,
}

impl AppState for BasicWorld {
    fn init(&mut self, world: &mut World, _window: &Window) -> Result<(), Box<dyn Error>> {
        let ground = world.spawn(&GroundPrefab::builder().build());
        world.set_ground(ground);

        let ball = world.spawn(&BallPrefab::builder().build());
        world.spawn(&RampPrefab::builder().build());
        let camera = world.spawn(&CameraPrefab::builder().build());

        self.steering = Some(BallController::new(ball));
        self.orbit = Some(OrbitCameraController::new(
            world,
            camera,
            Vector3::new(0.0, 20.0, 0.0),
        ));

        world.print_objects();

        Ok(())
    }

    fn update(&mut self, world: &mut World, _window: &Window) -> Result<(), Box<dyn Error>> {
        if world.input.is_key_down(KeyCode::Escape) {
            world.shutdown();
        }

        let dt = world.delta_time().as_secs_f32();

        if let Some(steering) = &mut self.steering {
            steering.update(world, dt);
        }
        if let Some(orbit) = &mut self.orbit {
            orbit.update(world, dt);
        }

        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let app = BasicWorld::default().configure("Rollabout", 800, 600);

    if let Err(e) = app.run() {
        error!("{e}");
    }
}
