use crate::World;
use crate::core::GameObjectId;
use crate::input::InputSource;
use log::warn;
use nalgebra::{Vector2, Vector3};
use winit::keyboard::KeyCode;

/// Tuning knobs for the steering rule.
#[derive(Debug, Copy, Clone)]
pub struct SteeringParams {
    /// Horizontal acceleration, units per second squared.
    pub accel: f32,
    /// Ceiling on horizontal speed.
    pub max_speed: f32,
    /// Horizontal velocity retention per idle frame.
    pub damping: f32,
    /// |vy| below which the body counts as vertically at rest.
    pub rest_epsilon: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        SteeringParams {
            accel: 40.0,
            max_speed: 20.0,
            damping: 0.9,
            rest_epsilon: 1e-3,
        }
    }
}

/// Steers one tracked body with WASD. Acceleration and the speed cap apply
/// only while the body is grounded; an idle, vertically resting body has its
/// horizontal velocity damped toward zero.
pub struct BallController {
    target: GameObjectId,
    pub params: SteeringParams,
}

impl BallController {
    pub fn new(target: GameObjectId) -> Self {
        BallController {
            target,
            params: SteeringParams::default(),
        }
    }

    pub fn update(&mut self, world: &mut World, dt: f32) {
        let Some(object) = world.get_object(self.target) else {
            warn!("Steering target is gone");
            return;
        };
        let Some(handle) = object.body else {
            return;
        };
        let grounded = object.grounded;

        let axis = movement_axis(&world.input);
        let Some(velocity) = world.physics.linear_velocity(handle) else {
            return;
        };

        if let Some(steered) = steer(velocity, axis, grounded, dt, &self.params) {
            world.physics.set_linear_velocity(handle, steered);
        }
    }
}

/// Desired movement direction from key state: `x` is the forward axis
/// (W minus S), `y` the strafe axis (D minus A).
pub fn movement_axis(input: &dyn InputSource) -> Vector2<f32> {
    let forward = input.is_pressed(KeyCode::KeyW) as i8 - input.is_pressed(KeyCode::KeyS) as i8;
    let strafe = input.is_pressed(KeyCode::KeyD) as i8 - input.is_pressed(KeyCode::KeyA) as i8;
    Vector2::new(forward as f32, strafe as f32)
}

/// Applies idle damping, grounded acceleration and the horizontal speed cap
/// to a body's velocity. Returns `None` when nothing should be written back.
///
/// Vertical velocity is never touched; gravity alone owns it.
pub fn steer(
    velocity: Vector3<f32>,
    axis: Vector2<f32>,
    grounded: bool,
    dt: f32,
    params: &SteeringParams,
) -> Option<Vector3<f32>> {
    let mut velocity = velocity;
    let idle = axis.x == 0.0 && axis.y == 0.0;
    let mut changed = false;

    if idle && velocity.y.abs() < params.rest_epsilon {
        velocity.x *= params.damping;
        velocity.z *= params.damping;
        changed = true;
    }

    if grounded {
        let mut direction = Vector3::new(axis.x, 0.0, axis.y);
        if let Some(unit) = direction.try_normalize(f32::EPSILON) {
            direction = unit;
        }

        velocity.x += direction.x * params.accel * dt;
        velocity.z += direction.z * params.accel * dt;

        let speed2 = velocity.x * velocity.x + velocity.z * velocity.z;
        let cap2 = params.max_speed * params.max_speed;
        if speed2 > cap2 {
            let correction = (cap2 / speed2).sqrt();
            velocity.x *= correction;
            velocity.z *= correction;
        }
        changed = true;
    }

    changed.then_some(velocity)
}
