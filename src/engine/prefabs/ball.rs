use crate::World;
use crate::core::{GameObjectId, Mesh, MeshInstance};
use crate::prefabs::Prefab;
use crate::utils::rgb;
use bon::Builder;
use nalgebra::Vector3;
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder};

/// The steerable ball. Dropped from its spawn position at scene start.
#[derive(Builder)]
pub struct BallPrefab {
    #[builder(default = 2.0)]
    pub radius: f32,
    #[builder(default = 20.0)]
    pub mass: f32,
    #[builder(default = 4.0)]
    pub friction: f32,
    /// Stand-in for rolling friction, which rapier does not model directly.
    #[builder(default = 10.0)]
    pub angular_damping: f32,
    #[builder(default = Vector3::new(1.0, 100.0, 0.0))]
    pub position: Vector3<f32>,
    #[builder(default = rgb(0xfb8500))]
    pub color: Vector3<f32>,
}

impl Prefab for BallPrefab {
    #[inline]
    fn prefab_name(&self) -> &'static str {
        "ball"
    }

    fn build(&self, world: &mut World) -> GameObjectId {
        let id = world.new_object(self.prefab_name());

        let mesh = world.meshes.add(Mesh::uv_sphere(self.radius, 16, 24));
        let body = RigidBodyBuilder::dynamic()
            .user_data(id.to_user_data())
            .translation(self.position)
            .angular_damping(self.angular_damping)
            .ccd_enabled(true)
            .can_sleep(false)
            .build();
        let collider = ColliderBuilder::ball(self.radius)
            .mass(self.mass)
            .friction(self.friction)
            .user_data(id.to_user_data())
            .build();
        let handle = world.physics.insert_body(body, collider);

        if let Some(obj) = world.get_object_mut(id) {
            obj.transform.set_position_vec(self.position);
            obj.visual = Some(MeshInstance {
                mesh,
                color: self.color,
            });
            obj.body = Some(handle);
        }

        id
    }
}
