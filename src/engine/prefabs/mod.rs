pub mod ball;
pub mod camera;
pub mod ground;
pub mod prefab;
pub mod ramp;

pub use ball::*;
pub use camera::*;
pub use ground::*;
pub use prefab::*;
pub use ramp::*;
