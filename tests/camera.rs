use nalgebra::{Point3, Vector3};
use rollabout::World;
use rollabout::controllers::{FirstPersonCameraController, OrbitCameraController, view_direction};
use rollabout::prefabs::{CameraPrefab, RampPrefab};

#[test]
fn view_direction_faces_negative_z_at_rest() {
    let dir = view_direction(0.0, 0.0);
    assert!((dir - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);

    let up = view_direction(0.0, std::f32::consts::FRAC_PI_2);
    assert!((up - Vector3::y()).norm() < 1e-6);
}

#[test]
fn orbit_controller_holds_its_pose_without_input() {
    let mut world = World::new();
    let camera = world.spawn(&CameraPrefab::builder().build());
    let start = world.get_object(camera).unwrap().transform.position();

    let focus = Vector3::new(0.0, 20.0, 0.0);
    let mut orbit = OrbitCameraController::new(&world, camera, focus);
    let distance = orbit.distance();

    orbit.update(&mut world, 1.0 / 60.0);

    let position = world.get_object(camera).unwrap().transform.position();
    assert!((position - start).norm() < 1e-2);
    assert!(((position - focus).norm() - distance).abs() < 1e-2);
}

#[test]
fn forward_probe_hits_the_first_obstacle() {
    let mut world = World::new();
    let block = world.spawn(
        &RampPrefab::builder()
            .size(Vector3::new(4.0, 4.0, 4.0))
            .position(Vector3::new(0.0, 5.0, -20.0))
            .rotation(Vector3::zeros())
            .build(),
    );
    let camera = world.spawn(
        &CameraPrefab::builder()
            .position(Vector3::new(0.0, 5.0, 0.0))
            .build(),
    );

    // One step so the query structures know about the new collider.
    world.update_with_dt(1.0 / 60.0);

    let hit = world
        .physics
        .cast_ray(Point3::new(0.0, 5.0, 0.0), -Vector3::z(), 100.0)
        .expect("the block sits in the ray's path");
    assert_eq!(hit.1, block);
    assert!((hit.0 - 18.0).abs() < 0.1);

    let mut fp = FirstPersonCameraController::new(camera);
    fp.update(&mut world, 1.0 / 60.0);

    let forward = world.get_object(camera).unwrap().transform.forward();
    assert!((forward - -Vector3::z()).norm() < 1e-4);
}
