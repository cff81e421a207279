use crate::World;
use crate::core::GameObjectId;
use crate::input::InputSource;
use log::warn;
use nalgebra::{Point3, Vector3};
use std::f32::consts::FRAC_PI_3;

const PITCH_LIMIT: f32 = FRAC_PI_3;

/// Mouse-look controller with a forward probe: the camera looks at the first
/// thing its view ray hits, or at a far point when nothing is in the way.
pub struct FirstPersonCameraController {
    camera: GameObjectId,
    pub sensitivity: f32,
    pub probe_range: f32,
    yaw: f32,
    pitch: f32,
}

impl FirstPersonCameraController {
    pub fn new(camera: GameObjectId) -> Self {
        FirstPersonCameraController {
            camera,
            sensitivity: 0.003,
            probe_range: 100.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn update(&mut self, world: &mut World, _dt: f32) {
        let delta = {
            let input: &dyn InputSource = &world.input;
            input.mouse_delta()
        };
        self.yaw -= delta.x * self.sensitivity;
        self.pitch = (self.pitch - delta.y * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let Some(position) = world.get_object(self.camera).map(|o| o.transform.position())
        else {
            warn!("First person camera object is gone");
            return;
        };

        let direction = view_direction(self.yaw, self.pitch);
        let target = match world
            .physics
            .cast_ray(Point3::from(position), direction, self.probe_range)
        {
            Some((distance, _)) => position + direction * distance,
            None => position + direction * self.probe_range,
        };

        if let Some(object) = world.get_object_mut(self.camera) {
            object.transform.look_at(target, Vector3::y());
        }
    }
}

/// Unit view direction for a yaw/pitch pair; zero yaw and pitch faces -Z.
pub fn view_direction(yaw: f32, pitch: f32) -> Vector3<f32> {
    Vector3::new(
        -yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
}
