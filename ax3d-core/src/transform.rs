/// 3D transformation matrices in homogeneous coordinates
use nalgebra::{Matrix4, Vector3};

/// Factory for the 4x4 affine transform matrices understood by
/// [`AxonPoint::transform`](crate::AxonPoint::transform).
///
/// Every constructor keeps the last row `[0, 0, 0, 1]`, so the homogeneous
/// component of a transformed point stays 1. Rotations are counter-clockwise
/// (right-hand rule) about the origin of the point's own frame; rotating
/// about another pivot is the caller's translate-rotate-translate
/// composition.
pub struct Transform;

impl Transform {
    /// Rotation about the X axis by `phi` radians.
    pub fn rotation_x(phi: f64) -> Matrix4<f64> {
        let (s, c) = phi.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Y axis by `phi` radians.
    pub fn rotation_y(phi: f64) -> Matrix4<f64> {
        let (s, c) = phi.sin_cos();
        Matrix4::new(
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Z axis by `phi` radians.
    pub fn rotation_z(phi: f64) -> Matrix4<f64> {
        let (s, c) = phi.sin_cos();
        Matrix4::new(
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Scaling by independent per-axis factors.
    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Shearing: each factor `ab` adds `b * ab` to the `a` coordinate
    /// (e.g. `xy` tilts X along Y).
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4<f64> {
        Matrix4::new(
            1.0, xy, xz, 0.0, //
            yx, 1.0, yz, 0.0, //
            zx, zy, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(dx, dy, dz))
    }
}
