use crate::AppState;
use crate::rendering::Renderer;
use crate::world::World;
use futures::executor::block_on;
use log::{error, info};
use snafu::{ResultExt, Snafu};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{WindowAttributes, WindowId};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum AppError {
    #[snafu(display("No usable event loop backend was found"))]
    CreateEventLoop { source: winit::error::EventLoopError },

    #[snafu(display("The event loop shut down with an error"))]
    RunEventLoop { source: winit::error::EventLoopError },
}

/// Owns the world and the renderer and drives both from winit events.
///
/// Everything runs on the event loop thread: one `RedrawRequested` delivery is
/// one frame. There is no teardown path beyond closing the window; world
/// resources live for the application's lifetime.
pub struct App<S: AppState> {
    renderer: Option<Renderer>,
    world: World,
    window_attributes: WindowAttributes,
    state: S,
}

pub struct AppSettings<S: AppState> {
    pub window: WindowAttributes,
    pub state: S,
}

pub trait AppRuntime: AppState {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self>;

    fn default_config(self) -> AppSettings<Self>;
}

impl<S: AppState> AppSettings<S> {
    /// Builds the event loop and runs the application until the window closes
    /// or initialization fails.
    pub fn run(self) -> Result<(), AppError> {
        let event_loop = EventLoop::new().context(CreateEventLoopErr)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            renderer: None,
            world: World::new(),
            window_attributes: self.window,
            state: self.state,
        };

        event_loop.run_app(&mut app).context(RunEventLoopErr)?;
        Ok(())
    }
}

impl<S: AppState> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        info!("(Re)initializing render state!");
        let window = match event_loop.create_window(self.window_attributes.clone()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Could not create a window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match block_on(Renderer::new(window)) {
            Ok(r) => r,
            Err(e) => {
                error!("Error when creating renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = renderer.window().inner_size();
        self.world.lens.resize(size.width as f32, size.height as f32);

        if let Err(e) = self.state.init(&mut self.world, renderer.window()) {
            error!("World init hook failed: {e}");
            event_loop.exit();
            return;
        }

        renderer.window().request_redraw();
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if event_loop.exiting() {
            return;
        }

        let Some(renderer) = self.renderer.as_mut() else {
            error!("No renderer.");
            return;
        };
        let world = &mut self.world;
        if world.is_shutting_down() {
            event_loop.exit();
            return;
        }

        if window_id != renderer.window().id() {
            return;
        }

        world.input.process_window_event(&event);

        match event {
            WindowEvent::RedrawRequested => {
                // Controllers in the update hook see the input and grounded
                // state of the previous frame, matching the step -> render ->
                // steer cadence the simulation is tuned for.
                if let Err(e) = self.state.update(world, renderer.window()) {
                    error!("Error happened when calling update function hook: {e}");
                }

                world.update();
                if !renderer.render_world(world) {
                    event_loop.exit();
                    return;
                }
                renderer.window().request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                renderer.resize(size);
                world.lens.resize(size.width as f32, size.height as f32);
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        self.world.input.process_device_event(&event);
    }
}
