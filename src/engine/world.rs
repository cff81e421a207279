//! The [`World`] struct stores and updates all tracked objects. It maintains
//! the object table, input state and physics simulation and offers utility
//! such as methods to create, find and spawn objects.
//!
//! The world is an explicit context object: it is constructed once and passed
//! by reference to whatever owns the frame loop. Nothing in here lives in a
//! global.

use crate::core::{CameraLens, GameObject, GameObjectId, MeshStore, Transform};
use crate::input::InputManager;
use crate::physics::{ContactRecord, ContactSide, PhysicsSimulator, mentions_pair};
use crate::prefabs::Prefab;
use log::{debug, info};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Number of equal sub-integrations folded into one physics advance.
pub const PHYSICS_SUBSTEPS: u32 = 10;

/// Central structure representing the running scene.
pub struct World {
    pub objects: HashMap<GameObjectId, GameObject>,
    pub meshes: MeshStore,
    pub physics: PhysicsSimulator,
    pub input: InputManager,
    pub active_camera: Option<GameObjectId>,
    pub lens: CameraLens,

    ground: Option<GameObjectId>,
    start_time: Instant,
    delta_time: Duration,
    last_frame_time: Option<Instant>,
    requested_shutdown: bool,
    next_object_id: usize,
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

impl World {
    /// Creates a new, empty, clean-slate world with default data.
    pub fn new() -> World {
        World {
            objects: HashMap::new(),
            meshes: MeshStore::default(),
            physics: PhysicsSimulator::default(),
            input: InputManager::default(),
            active_camera: None,
            lens: CameraLens::default(),
            ground: None,
            start_time: Instant::now(),
            delta_time: Duration::default(),
            last_frame_time: None,
            requested_shutdown: false,
            next_object_id: 0,
        }
    }

    pub fn get_object(&self, obj: GameObjectId) -> Option<&GameObject> {
        self.objects.get(&obj)
    }

    pub fn get_object_mut(&mut self, obj: GameObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&obj)
    }

    /// Creates a bare object. The name doubles as the object's contact tag
    /// and should be unique among gameplay-relevant bodies.
    pub fn new_object<S: Into<String>>(&mut self, name: S) -> GameObjectId {
        let id = GameObjectId(self.next_object_id);
        self.next_object_id += 1;

        let obj = GameObject {
            id,
            name: name.into(),
            transform: Transform::new(),
            visual: None,
            body: None,
            grounded: false,
        };

        self.objects.insert(id, obj);

        id
    }

    pub fn spawn<P: Prefab>(&mut self, prefab: &P) -> GameObjectId {
        prefab.spawn(self)
    }

    pub fn find_object_by_name(&self, name: &str) -> Option<GameObjectId> {
        self.objects
            .values()
            .find(|o| o.name == name)
            .map(|o| o.id)
    }

    /// Designates the object other bodies are checked against for ground
    /// contact.
    pub fn set_ground(&mut self, object: GameObjectId) {
        self.ground = Some(object);
    }

    pub fn ground(&self) -> Option<GameObjectId> {
        self.ground
    }

    /// Advances one frame using wall-clock elapsed time. The first call sees
    /// no previous timestamp and advances by zero.
    pub fn update(&mut self) {
        let dt = self.tick_delta_time();
        self.update_with_dt(dt);
    }

    /// Frame update with an explicit time step, in order: physics advance,
    /// body-to-visual sync, contact scan, grounded flags, input snapshot.
    pub fn update_with_dt(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.delta_time = Duration::from_secs_f32(dt);

        self.physics.step_simulation(dt, PHYSICS_SUBSTEPS);
        self.sync_visuals();

        let records = self.contact_records();
        self.refresh_grounded(&records);

        self.input.next_frame();
    }

    /// Copies every body's world pose onto its object's transform. Visual
    /// state always reflects the most recent physics step; there is no
    /// interpolation between steps.
    fn sync_visuals(&mut self) {
        for obj in self.objects.values_mut() {
            let Some(handle) = obj.body else {
                continue;
            };
            if let Some((translation, rotation)) = self.physics.body_pose(handle) {
                obj.transform.set_position_vec(translation);
                obj.transform.set_rotation(rotation);
            }
        }
    }

    /// Builds this frame's contact records from the narrow phase. Snapshots
    /// whose bodies the world does not know are skipped.
    pub fn contact_records(&self) -> SmallVec<[ContactRecord; 8]> {
        let mut records = SmallVec::new();
        for snap in self.physics.contact_snapshots() {
            let Some(tag_a) = self.tag_for_user_data(snap.user_a) else {
                continue;
            };
            let Some(tag_b) = self.tag_for_user_data(snap.user_b) else {
                continue;
            };
            records.push(ContactRecord {
                distance: snap.distance,
                a: ContactSide {
                    tag: tag_a.to_string(),
                    velocity: snap.velocity_a,
                    world_point: snap.world_point_a,
                    local_point: snap.local_point_a,
                },
                b: ContactSide {
                    tag: tag_b.to_string(),
                    velocity: snap.velocity_b,
                    world_point: snap.world_point_b,
                    local_point: snap.local_point_b,
                },
            });
        }
        records
    }

    fn tag_for_user_data(&self, user_data: u128) -> Option<&str> {
        let id = GameObjectId::from_user_data(user_data)?;
        self.objects.get(&id).map(|o| o.name.as_str())
    }

    /// Re-evaluates the grounded flag of every body-owning object against the
    /// designated ground object. The pairing check is direction-agnostic and
    /// the flag is written only when it changes.
    pub fn refresh_grounded(&mut self, records: &[ContactRecord]) {
        let Some(ground_id) = self.ground else {
            return;
        };
        let Some(ground_tag) = self.objects.get(&ground_id).map(|o| o.name.clone()) else {
            return;
        };

        for obj in self.objects.values_mut() {
            if obj.body.is_none() || obj.id == ground_id {
                continue;
            }
            let grounded = mentions_pair(records, &obj.name, &ground_tag);
            if grounded != obj.grounded {
                debug!("{} grounded: {grounded}", obj.name);
                obj.grounded = grounded;
            }
        }
    }

    fn tick_delta_time(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last_frame_time {
            Some(last) => (now - last).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame_time = Some(now);
        dt
    }

    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    pub fn start_time(&self) -> &Instant {
        &self.start_time
    }

    pub fn time(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn print_objects(&self) {
        info!("{} tracked objects in world.", self.objects.len());
        for obj in self.objects.values() {
            info!(
                "- {} (visual: {}, body: {})",
                obj.name,
                obj.visual.is_some(),
                obj.body.is_some()
            );
        }
    }

    pub fn shutdown(&mut self) {
        self.requested_shutdown = true;
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested_shutdown
    }
}
