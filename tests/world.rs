use nalgebra::{Point3, Vector3};
use rollabout::World;
use rollabout::physics::{ContactRecord, ContactSide, mentions_pair};
use rollabout::prefabs::{BallPrefab, GroundPrefab};
use std::time::Duration;

fn contact(tag_a: &str, tag_b: &str, distance: f32) -> ContactRecord {
    let side = |tag: &str| ContactSide {
        tag: tag.to_string(),
        velocity: Vector3::zeros(),
        world_point: Point3::origin(),
        local_point: Point3::origin(),
    };
    ContactRecord {
        distance,
        a: side(tag_a),
        b: side(tag_b),
    }
}

fn playground() -> World {
    let mut world = World::new();
    let ground = world.spawn(&GroundPrefab::builder().build());
    world.set_ground(ground);
    world.spawn(
        &BallPrefab::builder()
            .position(Vector3::new(1.0, 5.0, 0.0))
            .build(),
    );
    world
}

#[test]
fn new_object_add_find() {
    let mut world = World::new();
    let id = world.new_object("TestObject");
    assert!(world.find_object_by_name("TestObject").is_some());
    assert!(world.get_object(id).is_some());
    assert!(world.find_object_by_name("Nothing").is_none());
}

#[test]
fn first_frame_advances_by_zero() {
    let mut world = World::new();
    world.update();
    assert_eq!(world.delta_time(), Duration::ZERO);
}

#[test]
fn delta_time_advances() {
    let mut world = World::new();
    world.update();
    std::thread::sleep(Duration::from_millis(1));
    world.update();
    assert!(world.delta_time() > Duration::ZERO);
}

#[test]
fn grounded_flag_follows_the_record_set() {
    let mut world = playground();
    let ball = world.find_object_by_name("ball").unwrap();

    // A ground/ball pairing flips the flag on regardless of prior state,
    // in either tag order.
    world.refresh_grounded(&[contact("ball", "ground", -0.01)]);
    assert!(world.get_object(ball).unwrap().grounded);

    world.refresh_grounded(&[contact("ground", "ball", 0.0)]);
    assert!(world.get_object(ball).unwrap().grounded);

    // An empty record set clears it.
    world.refresh_grounded(&[]);
    assert!(!world.get_object(ball).unwrap().grounded);

    // Contacts with anything but the ground don't count.
    world.refresh_grounded(&[contact("ball", "ramp", -0.01)]);
    assert!(!world.get_object(ball).unwrap().grounded);
}

#[test]
fn dropped_ball_settles_and_becomes_grounded() {
    let mut world = playground();
    let ball = world.find_object_by_name("ball").unwrap();

    // 5 simulated seconds is plenty for a 5 unit drop.
    for _ in 0..300 {
        world.update_with_dt(1.0 / 60.0);
    }

    let obj = world.get_object(ball).unwrap();
    assert!(obj.grounded, "ball should rest on the ground slab");

    // Resting pose: ground top is at y = 0.5, ball radius is 2.
    let y = obj.transform.position().y;
    assert!((2.0..3.2).contains(&y), "unexpected resting height {y}");

    let records = world.contact_records();
    assert!(mentions_pair(&records, "ball", "ground"));
    assert!(mentions_pair(&records, "ground", "ball"));
}

#[test]
fn sync_pass_copies_body_pose_verbatim() {
    let mut world = playground();
    let ball = world.find_object_by_name("ball").unwrap();

    for _ in 0..30 {
        world.update_with_dt(1.0 / 60.0);
    }

    let obj = world.get_object(ball).unwrap();
    let handle = obj.body.unwrap();
    let (translation, rotation) = world.physics.body_pose(handle).unwrap();

    assert_eq!(obj.transform.position(), translation);
    assert_eq!(obj.transform.rotation(), rotation);
}
