/// Axonometric projection basis
use std::f64::consts::PI;

/// Projection basis mapping 3D coordinates onto the 2D drawing plane.
///
/// An axonometric (parallel) projection is fully described by the 2D
/// direction and scale given to each spatial axis. The six coefficients
/// below are derived once from three axis angles (radians) and three axis
/// scale factors and never change afterwards; `hor`/`ver` are then plain
/// linear combinations of a point's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axonometry {
    /// Horizontal footprint of the X axis: `cos(x_angle) * x_scale`.
    pub x_hor: f64,
    /// Vertical footprint of the X axis: `sin(x_angle) * x_scale`.
    pub x_ver: f64,
    /// Horizontal footprint of the Y axis.
    pub y_hor: f64,
    /// Vertical footprint of the Y axis.
    pub y_ver: f64,
    /// Horizontal footprint of the Z axis.
    pub z_hor: f64,
    /// Vertical footprint of the Z axis.
    pub z_ver: f64,
}

impl Axonometry {
    /// Derives a basis from three axis angles (radians) and three scale
    /// factors.
    ///
    /// Any real input is accepted: angles are not wrapped or validated,
    /// and angles that collapse two axes onto the same 2D direction are
    /// allowed (visually degenerate, not an error).
    pub fn new(
        x_angle: f64,
        y_angle: f64,
        z_angle: f64,
        x_scale: f64,
        y_scale: f64,
        z_scale: f64,
    ) -> Self {
        Self {
            x_hor: x_angle.cos() * x_scale,
            x_ver: x_angle.sin() * x_scale,
            y_hor: y_angle.cos() * y_scale,
            y_ver: y_angle.sin() * y_scale,
            z_hor: z_angle.cos() * z_scale,
            z_ver: z_angle.sin() * z_scale,
        }
    }

    /// Isometric projection: axes at 210°, 330° and 90°, no foreshortening.
    pub fn isometric() -> Self {
        Self::new(7.0 / 6.0 * PI, 11.0 / 6.0 * PI, PI / 2.0, 1.0, 1.0, 1.0)
    }

    /// Engineer projection: X at 222° and halved, Y at 353°, Z vertical.
    pub fn engineer() -> Self {
        Self::new(
            222f64.to_radians(),
            353f64.to_radians(),
            PI / 2.0,
            0.5,
            1.0,
            1.0,
        )
    }

    /// Cavalier projection: Y along the horizontal, Z vertical; the X axis
    /// angle and scale are free (customarily 225° and 1 or 0.5).
    pub fn cavalier(x_angle: f64, x_scale: f64) -> Self {
        Self::new(x_angle, 0.0, PI / 2.0, x_scale, 1.0, 1.0)
    }

    /// Bird's eye projection: the ground plane keeps a right angle between
    /// X and Y, height compressed to two thirds.
    pub fn birds_eye(x_angle: f64, x_scale: f64, y_scale: f64) -> Self {
        Self::new(
            x_angle,
            x_angle + PI / 2.0,
            PI / 2.0,
            x_scale,
            y_scale,
            2.0 / 3.0,
        )
    }

    /// Military projection: like bird's eye but with unscaled height.
    pub fn military(x_angle: f64, x_scale: f64, y_scale: f64) -> Self {
        Self::new(x_angle, x_angle + PI / 2.0, PI / 2.0, x_scale, y_scale, 1.0)
    }

    /// Horizontal drawing-plane coordinate of `(x, y, z)`.
    pub fn hor(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x_hor * x + self.y_hor * y + self.z_hor * z
    }

    /// Vertical drawing-plane coordinate of `(x, y, z)`.
    pub fn ver(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x_ver * x + self.y_ver * y + self.z_ver * z
    }

    /// Both drawing-plane coordinates at once.
    pub fn project(&self, x: f64, y: f64, z: f64) -> (f64, f64) {
        (self.hor(x, y, z), self.ver(x, y, z))
    }
}

impl Default for Axonometry {
    fn default() -> Self {
        Self::isometric()
    }
}
