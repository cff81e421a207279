use nalgebra::Vector3;

/// Expands a packed `0xRRGGBB` value into RGB components in `[0, 1]`.
pub const fn rgb(hex: u32) -> Vector3<f32> {
    Vector3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}
