use nalgebra::{Point3, Vector3};

/// One side of a contact: which tracked object, and its motion state at the
/// contact point.
#[derive(Debug, Clone)]
pub struct ContactSide {
    pub tag: String,
    pub velocity: Vector3<f32>,
    pub world_point: Point3<f32>,
    pub local_point: Point3<f32>,
}

/// Per-frame report of two touching bodies.
///
/// Records are rebuilt from the narrow phase every frame and thrown away
/// afterwards; only points with non-positive separation distance produce one.
#[derive(Debug, Clone)]
pub struct ContactRecord {
    pub distance: f32,
    pub a: ContactSide,
    pub b: ContactSide,
}

impl ContactRecord {
    /// True if this record pairs `x` with `y`, in either order.
    pub fn pairs(&self, x: &str, y: &str) -> bool {
        (self.a.tag == x && self.b.tag == y) || (self.a.tag == y && self.b.tag == x)
    }
}

/// Direction-agnostic scan over a frame's records.
pub fn mentions_pair(records: &[ContactRecord], x: &str, y: &str) -> bool {
    records.iter().any(|record| record.pairs(x, y))
}
