use crate::world::World;
use crate::{AppRuntime, AppSettings};
use std::error::Error;
use winit::dpi::{PhysicalSize, Size};
use winit::window::{Window, WindowAttributes};

/// Hooks the application runtime calls into around the frame loop.
///
/// `init` runs once after the window and renderer exist; `update` runs every
/// frame before the world advances. Errors from `init` abort startup, errors
/// from `update` are reported and the frame continues.
#[allow(unused)]
pub trait AppState: Sized {
    fn init(&mut self, world: &mut World, window: &Window) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
    fn update(&mut self, world: &mut World, window: &Window) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

impl<S: AppState> AppRuntime for S {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self> {
        AppSettings {
            window: WindowAttributes::default()
                .with_inner_size(Size::Physical(PhysicalSize { width, height }))
                .with_title(title),
            state: self,
        }
    }

    fn default_config(self) -> AppSettings<Self> {
        AppSettings {
            window: WindowAttributes::default()
                .with_inner_size(Size::Physical(PhysicalSize {
                    width: 800,
                    height: 600,
                }))
                .with_title("Rollabout Window"),
            state: self,
        }
    }
}
