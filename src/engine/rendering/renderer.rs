use crate::core::{GameObjectId, Mesh, MeshHandle, Vertex};
use crate::rendering::{DEPTH_FORMAT, State, StateError};
use crate::world::World;
use log::error;
use nalgebra::{Isometry3, Matrix4, Translation3, Vector4};
use snafu::{ResultExt, Snafu};
use static_assertions::const_assert_eq;
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::util::{BufferInitDescriptor, DeviceExt};
use wgpu::{
    BindGroup, BindGroupDescriptor, BindGroupEntry, BindGroupLayout, BindGroupLayoutDescriptor,
    BindGroupLayoutEntry, BindingType, Buffer, BufferBindingType, BufferUsages, Color,
    ColorTargetState, ColorWrites, CommandEncoderDescriptor, CompareFunction, DepthStencilState,
    Face, FragmentState, FrontFace, IndexFormat, LoadOp, Operations, PipelineLayoutDescriptor,
    PrimitiveState, PrimitiveTopology, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, RenderPipeline,
    RenderPipelineDescriptor, ShaderStages, StoreOp, SurfaceError, TextureViewDescriptor,
    VertexState, include_wgsl,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum RenderError {
    #[snafu(display("Could not set up the render state"))]
    State { source: StateError },
}

/// Stand-in for the original's water skybox; the scene clears to sky blue.
const CLEAR_COLOR: Color = Color {
    r: 0.32,
    g: 0.51,
    b: 0.72,
    a: 1.0,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view_proj: Matrix4<f32>,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: Matrix4<f32>,
    color: Vector4<f32>,
}

const_assert_eq!(size_of::<CameraUniform>(), 64);
const_assert_eq!(size_of::<ObjectUniform>(), 80);

/// Geometry uploaded to the GPU once per [`MeshHandle`].
struct GpuMesh {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
}

/// Per-object uniform buffer and its bind group, reused across frames.
struct ObjectBinding {
    buffer: Buffer,
    bind_group: BindGroup,
}

/// Compact forward renderer: one opaque pipeline, a camera uniform and one
/// model+color uniform per drawn object. Everything heavier (rasterization,
/// depth testing) is wgpu's problem.
pub struct Renderer {
    pub state: State,
    window: Arc<Window>,
    pipeline: RenderPipeline,
    camera_buffer: Buffer,
    camera_bind_group: BindGroup,
    object_layout: BindGroupLayout,
    meshes: HashMap<MeshHandle, GpuMesh>,
    objects: HashMap<GameObjectId, ObjectBinding>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Renderer, RenderError> {
        let state = State::new(window.clone()).await.context(StateErr)?;
        let device = &state.device;

        let shader = device.create_shader_module(include_wgsl!("shaders/scene.wgsl"));

        let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[uniform_entry(0, ShaderStages::VERTEX)],
        });
        let object_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[uniform_entry(0, ShaderStages::VERTEX_FRAGMENT)],
        });

        let camera_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Camera Uniform"),
            contents: bytemuck::bytes_of(&CameraUniform {
                view_proj: Matrix4::identity(),
            }),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&camera_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::continuous_descriptor()],
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(ColorTargetState {
                    format: state.config.format,
                    blend: None,
                    write_mask: ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                front_face: FrontFace::Ccw,
                cull_mode: Some(Face::Back),
                ..PrimitiveState::default()
            },
            depth_stencil: Some(DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        Ok(Renderer {
            state,
            window,
            pipeline,
            camera_buffer,
            camera_bind_group,
            object_layout,
            meshes: HashMap::new(),
            objects: HashMap::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.state.resize(new_size);
    }

    /// Draws every object carrying a visual. Returns `false` when rendering
    /// can not continue and the application should shut down.
    pub fn render_world(&mut self, world: &World) -> bool {
        let output = match self.state.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.state.resize(self.state.size);
                return true; // drop frame but don't cancel
            }
            Err(SurfaceError::Timeout) => return true,
            Err(e) => {
                error!("Surface error: {e}");
                return false;
            }
        };

        self.update_camera(world);
        self.prepare_objects(world);

        let color_view = output.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = self
            .state
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &color_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(CLEAR_COLOR),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                    view: &self.state.depth_view,
                    depth_ops: Some(Operations {
                        load: LoadOp::Clear(1.0),
                        store: StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.camera_bind_group, &[]);

            for obj in world.objects.values() {
                let Some(visual) = obj.visual else {
                    continue;
                };
                let (Some(mesh), Some(binding)) =
                    (self.meshes.get(&visual.mesh), self.objects.get(&obj.id))
                else {
                    continue;
                };

                rpass.set_bind_group(1, &binding.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.state.queue.submit(Some(encoder.finish()));
        output.present();

        true
    }

    /// Writes the active camera's view-projection matrix. Without an active
    /// camera the previously written matrix stays in place.
    fn update_camera(&self, world: &World) {
        let Some(camera) = world
            .active_camera
            .and_then(|id| world.get_object(id))
        else {
            return;
        };

        let view = Isometry3::from_parts(
            Translation3::from(camera.transform.position()),
            camera.transform.rotation(),
        )
        .inverse()
        .to_homogeneous();
        let view_proj = world.lens.projection().to_homogeneous() * view;

        self.state.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniform { view_proj }),
        );
    }

    /// Uploads missing meshes and refreshes every visual object's model
    /// matrix and color for this frame.
    fn prepare_objects(&mut self, world: &World) {
        for obj in world.objects.values() {
            let Some(visual) = obj.visual else {
                continue;
            };

            if !self.meshes.contains_key(&visual.mesh) {
                let Some(mesh) = world.meshes.get(visual.mesh) else {
                    continue;
                };
                let gpu = upload_mesh(&self.state, mesh);
                self.meshes.insert(visual.mesh, gpu);
            }

            let uniform = ObjectUniform {
                model: obj.transform.model_matrix(),
                color: visual.color.push(1.0),
            };

            match self.objects.get(&obj.id) {
                Some(binding) => {
                    self.state
                        .queue
                        .write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&uniform));
                }
                None => {
                    let binding = self.create_object_binding(&uniform);
                    self.objects.insert(obj.id, binding);
                }
            }
        }
    }

    fn create_object_binding(&self, uniform: &ObjectUniform) -> ObjectBinding {
        let buffer = self.state.device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Object Uniform"),
            contents: bytemuck::bytes_of(uniform),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });
        let bind_group = self.state.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout: &self.object_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        ObjectBinding { buffer, bind_group }
    }
}

fn upload_mesh(state: &State, mesh: &Mesh) -> GpuMesh {
    let vertex_buffer = state.device.create_buffer_init(&BufferInitDescriptor {
        label: Some("Vertex Buffer"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: BufferUsages::VERTEX,
    });
    let index_buffer = state.device.create_buffer_init(&BufferInitDescriptor {
        label: Some("Index Buffer"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: BufferUsages::INDEX,
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}

const fn uniform_entry(binding: u32, visibility: ShaderStages) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding,
        visibility,
        ty: BindingType::Buffer {
            ty: BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}
