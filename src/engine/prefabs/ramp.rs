use crate::World;
use crate::core::{GameObjectId, Mesh, MeshInstance};
use crate::prefabs::Prefab;
use crate::utils::rgb;
use bon::Builder;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder};
use std::f32::consts::{FRAC_PI_2, PI};

/// A fixed, tilted slab for the ball to run into.
#[derive(Builder)]
pub struct RampPrefab {
    #[builder(default = Vector3::new(1.0, 6.0, 15.0))]
    pub size: Vector3<f32>,
    #[builder(default = Vector3::new(-10.0, 3.0, -12.0))]
    pub position: Vector3<f32>,
    /// Euler rotation (x, y, z) in radians.
    #[builder(default = Vector3::new(0.0, -FRAC_PI_2, PI / 5.0))]
    pub rotation: Vector3<f32>,
    #[builder(default = rgb(0x8ecae6))]
    pub color: Vector3<f32>,
}

impl Prefab for RampPrefab {
    #[inline]
    fn prefab_name(&self) -> &'static str {
        "ramp"
    }

    fn build(&self, world: &mut World) -> GameObjectId {
        let half = self.size / 2.0;
        let id = world.new_object(self.prefab_name());

        let rotation =
            UnitQuaternion::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z);
        let pose = Isometry3::from_parts(Translation3::from(self.position), rotation);

        let mesh = world.meshes.add(Mesh::cuboid(half));
        let body = RigidBodyBuilder::fixed()
            .user_data(id.to_user_data())
            .position(pose)
            .build();
        let collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
            .user_data(id.to_user_data())
            .build();
        let handle = world.physics.insert_body(body, collider);

        if let Some(obj) = world.get_object_mut(id) {
            obj.transform.set_position_vec(self.position);
            obj.transform.set_rotation(rotation);
            obj.visual = Some(MeshInstance {
                mesh,
                color: self.color,
            });
            obj.body = Some(handle);
        }

        id
    }
}
