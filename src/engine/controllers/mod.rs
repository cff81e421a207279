mod ball;
mod fp_camera;
mod orbit_camera;

pub use ball::*;
pub use fp_camera::*;
pub use orbit_camera::*;
