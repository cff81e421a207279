use crate::World;
use crate::core::{GameObjectId, Mesh, MeshInstance};
use crate::prefabs::Prefab;
use crate::utils::rgb;
use bon::Builder;
use nalgebra::Vector3;
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder};

/// The static slab everything rolls around on.
#[derive(Builder)]
pub struct GroundPrefab {
    #[builder(default = Vector3::new(100.0, 1.0, 100.0))]
    pub size: Vector3<f32>,
    #[builder(default = rgb(0xe5e5e5))]
    pub color: Vector3<f32>,
}

impl Prefab for GroundPrefab {
    #[inline]
    fn prefab_name(&self) -> &'static str {
        "ground"
    }

    fn build(&self, world: &mut World) -> GameObjectId {
        let half = self.size / 2.0;
        let id = world.new_object(self.prefab_name());

        let mesh = world.meshes.add(Mesh::cuboid(half));
        let body = RigidBodyBuilder::fixed()
            .user_data(id.to_user_data())
            .build();
        let collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
            .user_data(id.to_user_data())
            .build();
        let handle = world.physics.insert_body(body, collider);

        if let Some(obj) = world.get_object_mut(id) {
            obj.visual = Some(MeshInstance {
                mesh,
                color: self.color,
            });
            obj.body = Some(handle);
        }

        id
    }
}
