/// Homogeneous points and wireframe figures
use std::f64::consts::PI;

use nalgebra::{Matrix4, Vector4};

use crate::projection::Axonometry;
use crate::transform::Transform;

/// A 3D point in homogeneous coordinates, paired with the axonometric basis
/// that projects it onto the drawing plane.
///
/// The coordinate vector is `[x, y, z, 1]`. Every transform built by
/// [`Transform`] is affine, so the homogeneous component stays 1 without any
/// renormalization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxonPoint {
    coords: Vector4<f64>,
    basis: Axonometry,
}

impl AxonPoint {
    pub fn new(x: f64, y: f64, z: f64, basis: Axonometry) -> Self {
        Self {
            coords: Vector4::new(x, y, z, 1.0),
            basis,
        }
    }

    /// Shorthand for a point carrying the default isometric basis.
    pub fn isometric(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, Axonometry::isometric())
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn z(&self) -> f64 {
        self.coords.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.coords.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.coords.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.coords.z = z;
    }

    pub fn basis(&self) -> Axonometry {
        self.basis
    }

    pub fn coords(&self) -> &Vector4<f64> {
        &self.coords
    }

    /// Horizontal screen coordinate under this point's basis.
    pub fn hor(&self) -> f64 {
        self.basis.hor(self.coords.x, self.coords.y, self.coords.z)
    }

    /// Vertical screen coordinate under this point's basis.
    pub fn ver(&self) -> f64 {
        self.basis.ver(self.coords.x, self.coords.y, self.coords.z)
    }

    /// Both screen coordinates as `(hor, ver)`.
    pub fn project(&self) -> (f64, f64) {
        self.basis.project(self.coords.x, self.coords.y, self.coords.z)
    }

    /// Apply an arbitrary 4x4 matrix to the homogeneous coordinates.
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        self.coords = matrix * self.coords;
    }

    pub fn rotate_x(&mut self, phi: f64) {
        self.transform(&Transform::rotation_x(phi));
    }

    pub fn rotate_y(&mut self, phi: f64) {
        self.transform(&Transform::rotation_y(phi));
    }

    pub fn rotate_z(&mut self, phi: f64) {
        self.transform(&Transform::rotation_z(phi));
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.transform(&Transform::scaling(sx, sy, sz));
    }

    pub fn shear(&mut self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) {
        self.transform(&Transform::shearing(xy, xz, yx, yz, zx, zy));
    }

    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.transform(&Transform::translation(dx, dy, dz));
    }
}

/// An undirected edge between two point indices of a [`Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// A wireframe: a point cloud plus the edges connecting it.
///
/// Transforms touch only the points. Edges index into `points` and survive
/// every transform untouched, so topology is fixed at construction time.
#[derive(Debug, Clone)]
pub struct Figure {
    pub points: Vec<AxonPoint>,
    pub edges: Vec<Edge>,
}

impl Figure {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a point and return its index.
    pub fn add_point(&mut self, point: AxonPoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.edges.push(Edge::new(a, b));
    }

    /// Apply a 4x4 matrix to every point of the figure.
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for point in &mut self.points {
            point.transform(matrix);
        }
    }

    /// An axis-aligned cube of the given edge length, centered on the origin.
    pub fn cube(size: f64, basis: Axonometry) -> Self {
        let h = size / 2.0;
        let mut figure = Self::new();
        for z in [-h, h] {
            figure.add_point(AxonPoint::new(-h, -h, z, basis));
            figure.add_point(AxonPoint::new(-h, h, z, basis));
            figure.add_point(AxonPoint::new(h, h, z, basis));
            figure.add_point(AxonPoint::new(h, -h, z, basis));
        }
        for i in 0..4 {
            let next = (i + 1) % 4;
            figure.add_edge(i, next);
            figure.add_edge(i + 4, next + 4);
            figure.add_edge(i, i + 4);
        }
        figure
    }

    /// A cut-diamond shape: a `sides`-gon crown ring under a wider girdle
    /// ring, tapering to a single culet point at the origin.
    pub fn diamond(sides: usize, basis: Axonometry) -> Self {
        let mut figure = Self::new();
        let step = 2.0 * PI / sides as f64;
        for i in 0..sides {
            let phi = step * i as f64;
            figure.add_point(AxonPoint::new(
                10.0 * (phi + PI / sides as f64).cos(),
                10.0 * (phi + PI / sides as f64).sin(),
                15.0,
                basis,
            ));
        }
        for i in 0..sides {
            let phi = step * i as f64;
            figure.add_point(AxonPoint::new(
                13.0 * phi.cos(),
                13.0 * phi.sin(),
                13.0,
                basis,
            ));
        }
        let apex = figure.add_point(AxonPoint::new(0.0, 0.0, 0.0, basis));
        for i in 0..sides {
            let next = (i + 1) % sides;
            figure.add_edge(i, next);
            figure.add_edge(i + sides, next + sides);
            figure.add_edge(i + sides, apex);
            figure.add_edge(i, i + sides);
            figure.add_edge(i, next + sides);
        }
        figure
    }

    /// The three coordinate axes as segments from the origin, handy as a
    /// static frame of reference behind an animated figure.
    pub fn axes(length: f64, basis: Axonometry) -> Self {
        let mut figure = Self::new();
        let origin = figure.add_point(AxonPoint::new(0.0, 0.0, 0.0, basis));
        let x = figure.add_point(AxonPoint::new(length, 0.0, 0.0, basis));
        let y = figure.add_point(AxonPoint::new(0.0, length, 0.0, basis));
        let z = figure.add_point(AxonPoint::new(0.0, 0.0, length, basis));
        figure.add_edge(origin, x);
        figure.add_edge(origin, y);
        figure.add_edge(origin, z);
        figure
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}
