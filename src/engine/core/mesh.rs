use crate::utils::sizes::{VEC3_SIZE, layout_size};
use nalgebra::Vector3;
use static_assertions::const_assert_eq;
use std::f32::consts::PI;
use wgpu::{BufferAddress, VertexAttribute, VertexFormat};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub const fn continuous_descriptor<'a>() -> wgpu::VertexBufferLayout<'a> {
        const LAYOUT: wgpu::VertexBufferLayout = wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    format: VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                VertexAttribute {
                    format: VertexFormat::Float32x3,
                    offset: VEC3_SIZE as BufferAddress,
                    shader_location: 1,
                },
            ],
        };

        const_assert_eq!(size_of::<Vertex>(), layout_size(&LAYOUT));

        LAYOUT
    }
}

/// CPU-side geometry. Sizes are baked into the vertices, so the shapes below
/// pair up with colliders of the same dimensions without scaling tricks.
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// An axis-aligned box around the origin. 4 vertices per face so every
    /// face gets a flat normal.
    pub fn cuboid(half_extents: Vector3<f32>) -> Mesh {
        let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

        // (face normal, two in-plane axes)
        let faces: [(Vector3<f32>, Vector3<f32>, Vector3<f32>); 6] = [
            (Vector3::z(), Vector3::x(), Vector3::y()),
            (-Vector3::z(), -Vector3::x(), Vector3::y()),
            (Vector3::y(), Vector3::x(), -Vector3::z()),
            (-Vector3::y(), Vector3::x(), Vector3::z()),
            (Vector3::x(), -Vector3::z(), Vector3::y()),
            (-Vector3::x(), Vector3::z(), Vector3::y()),
        ];

        let extent = |v: Vector3<f32>| Vector3::new(v.x * hx, v.y * hy, v.z * hz);

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, u, v) in faces {
            let base = vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let position = extent(normal + u * su + v * sv);
                vertices.push(Vertex { position, normal });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Mesh { vertices, indices }
    }

    /// A UV sphere around the origin. Normals point radially outward.
    pub fn uv_sphere(radius: f32, stacks: u32, sectors: u32) -> Mesh {
        let stacks = stacks.max(2);
        let sectors = sectors.max(3);

        let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
        for stack in 0..=stacks {
            let phi = PI * stack as f32 / stacks as f32 - PI / 2.0;
            for sector in 0..=sectors {
                let theta = 2.0 * PI * sector as f32 / sectors as f32;
                let normal = Vector3::new(
                    phi.cos() * theta.cos(),
                    phi.sin(),
                    phi.cos() * theta.sin(),
                );
                vertices.push(Vertex {
                    position: normal * radius,
                    normal,
                });
            }
        }

        let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
        let ring = sectors + 1;
        for stack in 0..stacks {
            for sector in 0..sectors {
                let a = stack * ring + sector;
                let b = a + ring;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Mesh { vertices, indices }
    }
}

/// Handle into a [`MeshStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshHandle(usize);

/// Owns every mesh of a world. Meshes are added at scene setup and live for
/// the session; there is no removal.
#[derive(Default)]
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn add(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
