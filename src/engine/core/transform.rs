use nalgebra::{Matrix4, Scale3, Translation3, UnitQuaternion, Vector3};

/// Stores the translation, rotation and scale of a
/// [`GameObject`](crate::core::GameObject).
#[derive(Debug, Clone)]
pub struct Transform {
    pos: Vector3<f32>,
    rot: UnitQuaternion<f32>,
    scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new()
    }
}

impl Transform {
    /// Creates a transform at the origin with no rotation and uniform scale
    /// of `1.0`.
    pub fn new() -> Self {
        Transform {
            pos: Vector3::zeros(),
            rot: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    #[inline(always)]
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.set_position_vec(Vector3::new(x, y, z))
    }

    pub fn set_position_vec(&mut self, pos: Vector3<f32>) {
        self.pos = pos;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.pos
    }

    pub fn set_rotation(&mut self, rot: UnitQuaternion<f32>) {
        self.rot = rot;
    }

    /// Sets the rotation from intrinsic euler angles (x, y, z) in radians.
    pub fn set_euler_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rot = UnitQuaternion::from_euler_angles(x, y, z);
    }

    pub fn rotation(&self) -> UnitQuaternion<f32> {
        self.rot
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vector3::new(scale, scale, scale);
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    /// Local -Z, the direction a camera at this transform faces.
    pub fn forward(&self) -> Vector3<f32> {
        self.rot * Vector3::new(0.0, 0.0, -1.0)
    }

    pub fn right(&self) -> Vector3<f32> {
        self.rot * Vector3::new(1.0, 0.0, 0.0)
    }

    pub fn up(&self) -> Vector3<f32> {
        self.rot * Vector3::new(0.0, 1.0, 0.0)
    }

    /// Rotates the transform so that [`Transform::forward`] points at
    /// `target`. A target on top of the transform is ignored.
    pub fn look_at(&mut self, target: Vector3<f32>, up: Vector3<f32>) {
        let to_here = self.pos - target;
        if to_here.norm_squared() <= f32::EPSILON {
            return;
        }
        self.rot = UnitQuaternion::face_towards(&to_here, &up);
    }

    /// The model matrix: translation, then rotation, then scale.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Translation3::from(self.pos).to_homogeneous()
            * self.rot.to_homogeneous()
            * Scale3::from(self.scale).to_homogeneous()
    }
}
