use nalgebra::Perspective3;

/// Projection parameters of the active camera.
///
/// The lens lives on the world so window-resize handling can recompute the
/// aspect ratio without touching the camera object itself.
#[derive(Debug, Clone)]
pub struct CameraLens {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraLens {
    fn default() -> Self {
        CameraLens {
            fov_y: 70f32.to_radians(),
            aspect: 800.0 / 600.0,
            znear: 1.0,
            zfar: 1000.0,
        }
    }
}

impl CameraLens {
    pub fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(self.aspect, self.fov_y, self.znear, self.zfar)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}
