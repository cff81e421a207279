use crate::input::InputSource;
use nalgebra::Vector2;
use num_traits::Zero;
use std::collections::HashMap;
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub type KeyState = ElementState;

/// Records key, button and mouse state from winit events.
///
/// Keys that never produced an event are simply absent and read as released.
/// Mouse deltas come from raw device motion; [`WindowEvent::CursorMoved`]
/// only keeps the absolute position current.
pub struct InputManager {
    key_states: HashMap<KeyCode, KeyState>,
    key_just_updated: Vec<KeyCode>,
    button_states: HashMap<MouseButton, ElementState>,
    button_just_updated: Vec<MouseButton>,
    mouse_wheel_delta: f32,
    mouse_pos: PhysicalPosition<f32>,
    mouse_delta: Vector2<f32>,
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager {
            key_states: HashMap::default(),
            key_just_updated: Vec::new(),
            button_states: HashMap::default(),
            button_just_updated: Vec::new(),
            mouse_wheel_delta: 0.0,
            mouse_pos: PhysicalPosition::default(),
            mouse_delta: Vector2::zero(),
        }
    }
}

impl InputManager {
    pub(crate) fn process_device_event(&mut self, device_event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = device_event {
            self.mouse_delta += Vector2::new(delta.0 as f32, delta.1 as f32);
        }
    }

    pub(crate) fn process_window_event(&mut self, window_event: &WindowEvent) {
        match window_event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.state.is_pressed()
                        || self
                            .key_states
                            .get(&code)
                            .is_none_or(|state| !state.is_pressed())
                    {
                        self.key_just_updated.push(code);
                    }

                    self.key_states.insert(code, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = PhysicalPosition::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y,
                };
                self.mouse_wheel_delta += y as f32;
            }
            WindowEvent::MouseInput { button, state, .. } => {
                if !state.is_pressed()
                    || self
                        .button_states
                        .get(button)
                        .is_none_or(|state| !state.is_pressed())
                {
                    self.button_just_updated.push(*button);
                }
                self.button_states.insert(*button, *state);
            }
            _ => {}
        }
    }

    pub fn key_state(&self, key_code: KeyCode) -> KeyState {
        *self
            .key_states
            .get(&key_code)
            .unwrap_or(&KeyState::Released)
    }

    // Only is true if the key was JUST pressed
    pub fn is_key_down(&self, key_code: KeyCode) -> bool {
        self.key_state(key_code) == KeyState::Pressed && self.key_just_updated.contains(&key_code)
    }

    // true if the key was JUST pressed or is being held
    pub fn is_key_pressed(&self, key_code: KeyCode) -> bool {
        self.key_state(key_code) == KeyState::Pressed
    }

    // true if the key was JUST released or is unpressed
    pub fn is_key_released(&self, key_code: KeyCode) -> bool {
        self.key_state(key_code) == KeyState::Released && self.key_just_updated.contains(&key_code)
    }

    pub fn button_state(&self, button: MouseButton) -> ElementState {
        *self
            .button_states
            .get(&button)
            .unwrap_or(&ElementState::Released)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.button_state(button) == ElementState::Pressed
            && self.button_just_updated.contains(&button)
    }

    #[inline]
    pub fn mouse_position(&self) -> PhysicalPosition<f32> {
        self.mouse_pos
    }

    /// Ends the frame: clears just-pressed markers and the accumulated mouse
    /// and wheel deltas.
    pub fn next_frame(&mut self) {
        self.key_just_updated.clear();
        self.button_just_updated.clear();
        self.mouse_delta = Vector2::zero();
        self.mouse_wheel_delta = 0.0;
    }
}

impl InputSource for InputManager {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.is_key_pressed(key)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.button_state(button) == ElementState::Pressed
    }

    fn mouse_delta(&self) -> Vector2<f32> {
        self.mouse_delta
    }

    fn wheel_delta(&self) -> f32 {
        self.mouse_wheel_delta
    }
}
