use nalgebra::{UnitQuaternion, Vector3};
use rollabout::core::{Mesh, Transform};

#[test]
fn position_rotation_and_scale() {
    let mut t = Transform::new();
    assert_eq!(t.position(), Vector3::zeros());

    t.set_position(1.0, 2.0, 3.0);
    assert_eq!(t.position(), Vector3::new(1.0, 2.0, 3.0));

    let rot = UnitQuaternion::from_euler_angles(0.0, 1.0, 0.0);
    t.set_rotation(rot);
    assert_eq!(t.rotation().coords, rot.coords);

    t.set_uniform_scale(2.0);
    assert_eq!(t.scale(), Vector3::new(2.0, 2.0, 2.0));
}

#[test]
fn look_at_points_forward_at_the_target() {
    let mut t = Transform::new();
    t.set_position(0.0, 0.0, 10.0);
    t.look_at(Vector3::zeros(), Vector3::y());

    let forward = t.forward();
    assert!((forward - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
}

#[test]
fn model_matrix_carries_the_translation() {
    let mut t = Transform::new();
    t.set_position(4.0, -2.0, 7.0);

    let m = t.model_matrix();
    assert_eq!(m[(0, 3)], 4.0);
    assert_eq!(m[(1, 3)], -2.0);
    assert_eq!(m[(2, 3)], 7.0);
}

#[test]
fn generated_meshes_have_sane_shapes() {
    let cuboid = Mesh::cuboid(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(cuboid.vertices.len(), 24);
    assert_eq!(cuboid.indices.len(), 36);

    let sphere = Mesh::uv_sphere(2.0, 16, 24);
    assert_eq!(sphere.indices.len() as u32, 16 * 24 * 6);
    for vertex in &sphere.vertices {
        assert!((vertex.position.norm() - 2.0).abs() < 1e-4);
        assert!((vertex.normal.norm() - 1.0).abs() < 1e-4);
    }
}
