use crate::World;
use crate::core::GameObjectId;
use crate::input::InputSource;
use log::warn;
use nalgebra::Vector3;
use winit::event::MouseButton;

// Just shy of straight up/down so the up vector never degenerates.
const MAX_PITCH: f32 = 1.48;

/// Orbits the camera object around a fixed focus point. Left-drag rotates,
/// the scroll wheel zooms.
pub struct OrbitCameraController {
    camera: GameObjectId,
    pub focus: Vector3<f32>,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl OrbitCameraController {
    /// Derives the initial orbit pose from wherever the camera currently sits
    /// relative to `focus`.
    pub fn new(world: &World, camera: GameObjectId, focus: Vector3<f32>) -> Self {
        let offset = world
            .get_object(camera)
            .map(|o| o.transform.position() - focus)
            .unwrap_or_else(|| Vector3::new(0.0, 1.0, 10.0));

        let distance = offset.norm().max(1.0);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        OrbitCameraController {
            camera,
            focus,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 5.0,
            max_distance: 500.0,
            yaw,
            pitch,
            distance,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn update(&mut self, world: &mut World, _dt: f32) {
        let (delta, wheel, dragging) = {
            let input: &dyn InputSource = &world.input;
            (
                input.mouse_delta(),
                input.wheel_delta(),
                input.is_button_pressed(MouseButton::Left),
            )
        };

        if dragging {
            self.yaw -= delta.x * self.rotate_speed;
            self.pitch = (self.pitch + delta.y * self.rotate_speed).clamp(-MAX_PITCH, MAX_PITCH);
        }
        if wheel != 0.0 {
            self.distance = (self.distance * (1.0 - wheel * self.zoom_speed))
                .clamp(self.min_distance, self.max_distance);
        }

        let offset = Vector3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;

        let Some(object) = world.get_object_mut(self.camera) else {
            warn!("Orbit camera object is gone");
            return;
        };
        object.transform.set_position_vec(self.focus + offset);
        object.transform.look_at(self.focus, Vector3::y());
    }
}
