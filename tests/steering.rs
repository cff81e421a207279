use nalgebra::{Vector2, Vector3};
use rollabout::controllers::{SteeringParams, movement_axis, steer};
use rollabout::input::InputSource;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

const EPS: f32 = 1e-5;

fn params() -> SteeringParams {
    SteeringParams::default()
}

#[test]
fn idle_damping_strictly_decreases_horizontal_speed() {
    let p = params();
    let mut velocity = Vector3::new(10.0, 0.0, -3.0);

    for _ in 0..50 {
        let before = Vector2::new(velocity.x, velocity.z).norm();
        velocity = steer(velocity, Vector2::zeros(), false, 1.0 / 60.0, &p)
            .expect("an idle resting body still damps");
        let after = Vector2::new(velocity.x, velocity.z).norm();
        assert!(after < before);
        assert!((after - before * p.damping).abs() < EPS);
    }
}

#[test]
fn airborne_idle_body_is_left_alone() {
    let p = params();
    let falling = Vector3::new(5.0, -12.0, 0.0);
    assert!(steer(falling, Vector2::zeros(), false, 1.0 / 60.0, &p).is_none());
}

#[test]
fn residual_vertical_jitter_still_damps() {
    let p = params();
    let resting = Vector3::new(5.0, 5e-4, 0.0);
    let steered = steer(resting, Vector2::zeros(), false, 1.0 / 60.0, &p).unwrap();
    assert!((steered.x - 5.0 * p.damping).abs() < EPS);
}

#[test]
fn grounded_acceleration_never_touches_vertical_velocity() {
    let p = params();
    let velocity = Vector3::new(0.0, -3.0, 0.0);
    let steered = steer(velocity, Vector2::new(1.0, 0.0), true, 0.1, &p).unwrap();

    assert!((steered.x - p.accel * 0.1).abs() < EPS);
    assert_eq!(steered.y, -3.0);
    assert_eq!(steered.z, 0.0);
}

#[test]
fn diagonal_input_is_normalized() {
    let p = params();
    let steered = steer(
        Vector3::zeros(),
        Vector2::new(1.0, 1.0),
        true,
        0.1,
        &p,
    )
    .unwrap();

    let expected = p.accel * 0.1 / 2f32.sqrt();
    assert!((steered.x - expected).abs() < EPS);
    assert!((steered.z - expected).abs() < EPS);
}

#[test]
fn speed_cap_rescales_down_to_the_cap() {
    let p = params();
    let too_fast = Vector3::new(30.0, 1.0, 40.0);
    let steered = steer(too_fast, Vector2::new(1.0, 0.0), true, 0.0, &p).unwrap();

    let speed = Vector2::new(steered.x, steered.z).norm();
    assert!(speed < 50.0);
    assert!((speed - p.max_speed).abs() < 1e-3);
    assert_eq!(steered.y, 1.0);
}

/// Fixed-answer input source, stands in for the event-driven manager.
struct ScriptedInput {
    pressed: Vec<KeyCode>,
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    fn is_button_pressed(&self, _button: MouseButton) -> bool {
        false
    }

    fn mouse_delta(&self) -> Vector2<f32> {
        Vector2::zeros()
    }

    fn wheel_delta(&self) -> f32 {
        0.0
    }
}

#[test]
fn movement_axis_reads_wasd() {
    let forward = ScriptedInput {
        pressed: vec![KeyCode::KeyW, KeyCode::KeyD],
    };
    assert_eq!(movement_axis(&forward), Vector2::new(1.0, 1.0));

    let cancelled = ScriptedInput {
        pressed: vec![KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA],
    };
    assert_eq!(movement_axis(&cancelled), Vector2::new(0.0, -1.0));

    let idle = ScriptedInput { pressed: vec![] };
    assert_eq!(movement_axis(&idle), Vector2::zeros());
}
