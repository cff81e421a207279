pub mod input_manager;

pub use input_manager::*;

use nalgebra::Vector2;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Capability-style view of the input state.
///
/// Controllers read input through this trait so the event-driven
/// [`InputManager`] can be swapped for a polling or scripted source.
pub trait InputSource {
    fn is_pressed(&self, key: KeyCode) -> bool;
    fn is_button_pressed(&self, button: MouseButton) -> bool;
    /// Mouse movement accumulated since the last frame snapshot.
    fn mouse_delta(&self) -> Vector2<f32>;
    /// Scroll movement accumulated since the last frame snapshot.
    fn wheel_delta(&self) -> f32;
}
