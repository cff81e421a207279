use crate::World;
use crate::core::GameObjectId;
use crate::prefabs::Prefab;
use bon::Builder;
use nalgebra::Vector3;

/// Spawns the camera object at the demo's vantage point. The first camera
/// spawned becomes the world's active camera.
#[derive(Builder)]
pub struct CameraPrefab {
    #[builder(default = Vector3::new(-200.0, 100.0, 10.0))]
    pub position: Vector3<f32>,
    #[builder(default = Vector3::new(0.0, 0.0, 0.0))]
    pub look_at: Vector3<f32>,
}

impl Prefab for CameraPrefab {
    #[inline]
    fn prefab_name(&self) -> &'static str {
        "camera"
    }

    fn build(&self, world: &mut World) -> GameObjectId {
        let id = world.new_object(self.prefab_name());

        if let Some(obj) = world.get_object_mut(id) {
            obj.transform.set_position_vec(self.position);
            obj.transform.look_at(self.look_at, Vector3::y());
        }

        if world.active_camera.is_none() {
            world.active_camera = Some(id);
        }

        id
    }
}
