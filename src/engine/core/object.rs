use crate::core::{MeshHandle, Transform};
use nalgebra::Vector3;
use rapier3d::prelude::RigidBodyHandle;

/// Stable identifier of a [`GameObject`] inside a [`World`](crate::World).
///
/// Lookups always go through the world that created the id; ids are never
/// reused within one session.
#[derive(Debug, Copy, Clone, Eq, Ord, PartialOrd, PartialEq, Hash)]
#[repr(transparent)]
pub struct GameObjectId(pub usize);

impl GameObjectId {
    /// Encodes the id for a rigid body's or collider's `user_data` slot.
    /// Zero is reserved for bodies the world does not own.
    pub const fn to_user_data(self) -> u128 {
        self.0 as u128 + 1
    }

    pub const fn from_user_data(data: u128) -> Option<GameObjectId> {
        match data {
            0 => None,
            n => Some(GameObjectId(n as usize - 1)),
        }
    }
}

/// One visual: a mesh plus a flat material color.
#[derive(Debug, Copy, Clone)]
pub struct MeshInstance {
    pub mesh: MeshHandle,
    pub color: Vector3<f32>,
}

/// A tracked scene object: one unique tag, one transform, and optionally one
/// visual and one physics body.
///
/// Visual and body are paired one-to-one; the world's frame update copies the
/// body pose onto the transform, so the two are never moved independently.
pub struct GameObject {
    pub id: GameObjectId,
    pub name: String,
    pub transform: Transform,
    pub visual: Option<MeshInstance>,
    pub body: Option<RigidBodyHandle>,
    pub grounded: bool,
}
