use crate::core::GameObjectId;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use rapier3d::prelude::*;
use smallvec::SmallVec;

/// Downward pull of the demo world. Stronger than Earth on purpose; the ball
/// is tuned to feel weighty.
const WORLD_GRAVITY: f32 = 20.0;

/// Raw, engine-facing view of one overlapping contact point.
///
/// The `user_*` fields carry the owning objects' encoded ids; the world turns
/// snapshots into tagged [`ContactRecord`](crate::physics::ContactRecord)s.
pub struct ContactSnapshot {
    pub user_a: u128,
    pub user_b: u128,
    pub distance: f32,
    pub velocity_a: Vector3<f32>,
    pub velocity_b: Vector3<f32>,
    pub world_point_a: Point3<f32>,
    pub world_point_b: Point3<f32>,
    pub local_point_a: Point3<f32>,
    pub local_point_b: Point3<f32>,
}

/// Thin adapter over the rapier3d pipeline. All heavy lifting (broadphase,
/// narrowphase, solving, integration) happens inside rapier; this struct only
/// owns the sets and exposes the handful of queries the world needs.
pub struct PhysicsSimulator {
    pub gravity: Vector3<f32>,
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: Box<dyn BroadPhase>,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
}

impl Default for PhysicsSimulator {
    fn default() -> Self {
        PhysicsSimulator {
            gravity: Vector3::new(0.0, -WORLD_GRAVITY, 0.0),
            rigid_body_set: RigidBodySet::default(),
            collider_set: ColliderSet::default(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::default(),
            island_manager: IslandManager::default(),
            broad_phase: Box::<DefaultBroadPhase>::default(),
            narrow_phase: NarrowPhase::default(),
            impulse_joint_set: ImpulseJointSet::default(),
            multibody_joint_set: MultibodyJointSet::default(),
            ccd_solver: CCDSolver::default(),
            query_pipeline: QueryPipeline::default(),
        }
    }
}

impl PhysicsSimulator {
    /// Advances the simulation by `dt` seconds, split into `substeps` equally
    /// sized sub-integrations. Bounded integration error per call; results
    /// under a varying `dt` are not deterministic across runs.
    ///
    /// A non-positive `dt` is a no-op (the first frame has no previous
    /// timestamp and advances by zero).
    pub fn step_simulation(&mut self, dt: f32, substeps: u32) {
        if dt <= 0.0 || substeps == 0 {
            return;
        }

        self.integration_parameters.dt = dt / substeps as f32;
        for _ in 0..substeps {
            self.physics_pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.island_manager,
                self.broad_phase.as_mut(),
                &mut self.narrow_phase,
                &mut self.rigid_body_set,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                &mut self.ccd_solver,
                Some(&mut self.query_pipeline),
                &(), // no hooks
                &(), // no events
            );
        }
        self.query_pipeline.update(&self.collider_set)
    }

    /// Inserts a body and its collider as one unit.
    pub fn insert_body(&mut self, body: RigidBody, collider: Collider) -> RigidBodyHandle {
        let handle = self.rigid_body_set.insert(body);
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);
        handle
    }

    /// World-space pose of a body after the most recent step.
    pub fn body_pose(&self, handle: RigidBodyHandle) -> Option<(Vector3<f32>, UnitQuaternion<f32>)> {
        self.rigid_body_set
            .get(handle)
            .map(|rb| (*rb.translation(), *rb.rotation()))
    }

    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.rigid_body_set.get(handle).map(|rb| *rb.linvel())
    }

    pub fn set_linear_velocity(&mut self, handle: RigidBodyHandle, velocity: Vector3<f32>) {
        if let Some(rb) = self.rigid_body_set.get_mut(handle) {
            rb.set_linvel(velocity, true);
        }
    }

    pub fn cast_ray(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_toi: f32,
    ) -> Option<(f32, GameObjectId)> {
        let ray = Ray::new(origin, direction);
        let (collider, distance) = self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            true,
            QueryFilter::default(),
        )?;

        let object = GameObjectId::from_user_data(self.collider_set.get(collider)?.user_data)?;
        Some((distance, object))
    }

    /// Collects every overlapping contact point (separation distance <= 0)
    /// currently known to the narrow phase.
    pub fn contact_snapshots(&self) -> SmallVec<[ContactSnapshot; 8]> {
        let mut snapshots = SmallVec::new();
        for pair in self.narrow_phase.contact_pairs() {
            let Some(c1) = self.collider_set.get(pair.collider1) else {
                continue;
            };
            let Some(c2) = self.collider_set.get(pair.collider2) else {
                continue;
            };
            let (Some(h1), Some(h2)) = (c1.parent(), c2.parent()) else {
                continue;
            };
            let (Some(b1), Some(b2)) = (self.rigid_body_set.get(h1), self.rigid_body_set.get(h2))
            else {
                continue;
            };

            for manifold in &pair.manifolds {
                for point in &manifold.points {
                    if point.dist > 0.0 {
                        continue;
                    }

                    snapshots.push(ContactSnapshot {
                        user_a: b1.user_data,
                        user_b: b2.user_data,
                        distance: point.dist,
                        velocity_a: *b1.linvel(),
                        velocity_b: *b2.linvel(),
                        world_point_a: c1.position() * point.local_p1,
                        world_point_b: c2.position() * point.local_p2,
                        local_point_a: point.local_p1,
                        local_point_b: point.local_p2,
                    });
                }
            }
        }
        snapshots
    }
}
