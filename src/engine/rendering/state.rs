use snafu::{ResultExt, Snafu};
use std::sync::Arc;
use wgpu::{
    CompositeAlphaMode, CreateSurfaceError, Device, DeviceDescriptor, Extent3d, Features,
    Instance, InstanceDescriptor, PresentMode, Queue, RequestAdapterError, RequestAdapterOptions,
    RequestDeviceError, Surface, SurfaceConfiguration, Texture, TextureDescriptor,
    TextureDimension, TextureFormat, TextureUsages, TextureView, TextureViewDescriptor,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum StateError {
    #[snafu(display("Could not create a rendering surface"))]
    CreateSurface { source: CreateSurfaceError },

    #[snafu(display("No suitable graphics adapter was found"))]
    RequestAdapter { source: RequestAdapterError },

    #[snafu(display("The graphics adapter refused to hand out a device"))]
    RequestDevice { source: RequestDeviceError },

    #[snafu(display("The surface reports no supported texture formats"))]
    NoSurfaceFormat,
}

/// Owns the wgpu surface, device, queue and depth target for one window.
pub struct State {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
    pub depth_view: TextureView,
    depth_texture: Texture,
}

impl State {
    pub async fn new(window: Arc<Window>) -> Result<State, StateError> {
        let size = window.inner_size();

        let instance = Instance::new(&InstanceDescriptor::default());
        let surface = instance.create_surface(window).context(CreateSurfaceErr)?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..RequestAdapterOptions::default()
            })
            .await
            .context(RequestAdapterErr)?;

        let (device, queue) = adapter
            .request_device(&DeviceDescriptor {
                label: Some("Device"),
                required_features: Features::empty(),
                ..DeviceDescriptor::default()
            })
            .await
            .context(RequestDeviceErr)?;

        let caps = surface.get_capabilities(&adapter);
        let Some(format) = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
        else {
            return NoSurfaceFormatErr.fail();
        };

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_texture, depth_view) = Self::create_depth_texture(&device, &config);

        Ok(State {
            surface,
            device,
            queue,
            config,
            size,
            depth_view,
            depth_texture,
        })
    }

    fn create_depth_texture(
        device: &Device,
        config: &SurfaceConfiguration,
    ) -> (Texture, TextureView) {
        let texture = device.create_texture(&TextureDescriptor {
            label: Some("Depth Texture"),
            size: Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&TextureViewDescriptor::default());
        (texture, view)
    }

    /// Reconfigures the surface and recreates the depth target. Zero-sized
    /// windows (minimized) are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let (texture, view) = Self::create_depth_texture(&self.device, &self.config);
        self.depth_texture = texture;
        self.depth_view = view;
    }
}
