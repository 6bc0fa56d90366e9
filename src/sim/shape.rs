//! Shape geometry: containment, signed edge distances, extents
//!
//! The tricky part of the arena sim: every polygon edge is a half-plane
//! `y = ±√3·x + c` (tilted) or `y = c` (horizontal), with the interior on a
//! fixed side. Containment is the conjunction of all half-plane tests;
//! `distance_to_edges` reports the signed perpendicular distance to each edge
//! line, negative strictly inside, zero on the boundary, positive outside.
//! The two must agree for every point.
//!
//! Polygons cache their translated vertices and edge-line constants. The cache
//! is re-derived by `solve` at construction and after every `translate`, so a
//! caller never observes stale geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::SetupError;

/// √3, the slope magnitude of every tilted edge in this shape family
pub(crate) const SQRT_3: f32 = 1.732_050_8;

/// `(A² + B²)^½` for edge lines `Ax + By = C` with `A, B ∈ {1, ±√3}`
const EDGE_NORM: f32 = 2.0;

fn validate_size(size: f32) -> Result<f32, SetupError> {
    if size.is_finite() && size >= 0.0 {
        Ok(size)
    } else {
        Err(SetupError::InvalidShapeSize(size))
    }
}

/// Shape kind tag, for spawn tables and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

/// Where a shape's extent sits relative to an axis-aligned line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Entirely on the near side of the line
    Before,
    /// The extent straddles the line (touching counts)
    Between,
    /// Entirely past the line
    After,
}

fn classify(min: f32, max: f32, line: f32) -> Relation {
    if max < line {
        Relation::Before
    } else if min > line {
        Relation::After
    } else {
        Relation::Between
    }
}

/// A circle: center plus radius, no cached geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Result<Self, SetupError> {
        Ok(Self {
            center,
            radius: validate_size(radius)?,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Boundary inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// An equilateral triangle, apex up
///
/// `size` is the circumradius; the edge length is `√3·size`. Vertex order is
/// `[top, left, right]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triangle {
    center: Vec2,
    size: f32,
    vertices: [Vec2; 3],
    /// `c` in the left tilted edge line `y = √3·x + c`
    left_edge_c: f32,
    /// `c` in the right tilted edge line `y = -√3·x + c`
    right_edge_c: f32,
}

/// Indices into [`Triangle::vertices`]
const TRI_LEFT: usize = 1;
const TRI_RIGHT: usize = 2;

impl Triangle {
    pub fn new(center: Vec2, size: f32) -> Result<Self, SetupError> {
        let mut triangle = Self {
            center,
            size: validate_size(size)?,
            vertices: [Vec2::ZERO; 3],
            left_edge_c: 0.0,
            right_edge_c: 0.0,
        };
        triangle.solve();
        Ok(triangle)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; 3] {
        &self.vertices
    }

    /// Recompute translated vertices and edge-line constants from `center`.
    /// The single synchronization point for cached geometry.
    fn solve(&mut self) {
        let half_edge = SQRT_3 * self.size / 2.0;
        let third_height = self.size / 2.0;
        self.vertices = [
            self.center + Vec2::new(0.0, self.size),
            self.center + Vec2::new(-half_edge, -third_height),
            self.center + Vec2::new(half_edge, -third_height),
        ];

        let left = self.vertices[TRI_LEFT];
        let right = self.vertices[TRI_RIGHT];
        self.left_edge_c = left.y - left.x * SQRT_3;
        self.right_edge_c = right.y + right.x * SQRT_3;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
        self.solve();
    }

    /// All three half-plane tests, boundary inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.y >= self.vertices[TRI_LEFT].y
            && SQRT_3 * point.x + self.left_edge_c >= point.y
            && -SQRT_3 * point.x + self.right_edge_c >= point.y
    }

    /// Signed perpendicular distance to each edge line, in order
    /// `[bottom, left tilted, right tilted]`. Negative strictly inside.
    pub fn distance_to_edges(&self, point: Vec2) -> [f32; 3] {
        [
            self.vertices[TRI_LEFT].y - point.y,
            (point.y - SQRT_3 * point.x - self.left_edge_c) / EDGE_NORM,
            (point.y + SQRT_3 * point.x - self.right_edge_c) / EDGE_NORM,
        ]
    }
}

/// A regular hexagon with horizontal top and bottom edges
///
/// `size` is the edge length, which for a regular hexagon equals the
/// circumradius. Vertex order is `[left, topLeft, topRight, right,
/// bottomRight, bottomLeft]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hexagon {
    center: Vec2,
    size: f32,
    /// Distance from center to the horizontal edges, `√3/2·size`
    apothem: f32,
    vertices: [Vec2; 6],
    /// `c` in `y = √3·x + c` for the top-left edge; the bottom-right edge
    /// uses the same slope with `c - 4·apothem`
    left_edge_c: f32,
    /// `c` in `y = -√3·x + c` for the top-right edge; the bottom-left edge
    /// uses the same slope with `c - 4·apothem`
    right_edge_c: f32,
}

/// Indices into [`Hexagon::vertices`]
const HEX_LEFT: usize = 0;
const HEX_TOP_LEFT: usize = 1;
const HEX_RIGHT: usize = 3;
const HEX_BOTTOM_LEFT: usize = 5;

impl Hexagon {
    pub fn new(center: Vec2, size: f32) -> Result<Self, SetupError> {
        let size = validate_size(size)?;
        let mut hexagon = Self {
            center,
            size,
            apothem: SQRT_3 * size / 2.0,
            vertices: [Vec2::ZERO; 6],
            left_edge_c: 0.0,
            right_edge_c: 0.0,
        };
        hexagon.solve();
        Ok(hexagon)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn apothem(&self) -> f32 {
        self.apothem
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; 6] {
        &self.vertices
    }

    /// Recompute translated vertices and edge-line constants from `center`.
    fn solve(&mut self) {
        let half = self.size / 2.0;
        let apothem = self.apothem;
        self.vertices = [
            self.center + Vec2::new(-self.size, 0.0),
            self.center + Vec2::new(-half, apothem),
            self.center + Vec2::new(half, apothem),
            self.center + Vec2::new(self.size, 0.0),
            self.center + Vec2::new(half, -apothem),
            self.center + Vec2::new(-half, -apothem),
        ];

        let left = self.vertices[HEX_LEFT];
        let right = self.vertices[HEX_RIGHT];
        self.left_edge_c = left.y - left.x * SQRT_3;
        self.right_edge_c = right.y + right.x * SQRT_3;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
        self.solve();
    }

    /// All six half-plane tests, boundary inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        if point.y < self.vertices[HEX_BOTTOM_LEFT].y || point.y > self.vertices[HEX_TOP_LEFT].y {
            return false;
        }

        // Each tilted constant serves two parallel edges 4·apothem apart.
        let spread = 4.0 * self.apothem;

        let left_top = SQRT_3 * point.x + self.left_edge_c;
        if point.y > left_top || point.y < left_top - spread {
            return false;
        }

        let right_top = -SQRT_3 * point.x + self.right_edge_c;
        if point.y > right_top || point.y < right_top - spread {
            return false;
        }

        true
    }

    /// Signed perpendicular distance to each edge line, in order
    /// `[bottom, top, topLeft, bottomRight, topRight, bottomLeft]`.
    /// Negative strictly inside.
    pub fn distance_to_edges(&self, point: Vec2) -> [f32; 6] {
        let spread = 4.0 * self.apothem;
        [
            self.vertices[HEX_BOTTOM_LEFT].y - point.y,
            point.y - self.vertices[HEX_TOP_LEFT].y,
            (point.y - SQRT_3 * point.x - self.left_edge_c) / EDGE_NORM,
            (SQRT_3 * point.x - point.y + self.left_edge_c - spread) / EDGE_NORM,
            (point.y + SQRT_3 * point.x - self.right_edge_c) / EDGE_NORM,
            (self.right_edge_c - spread - point.y - SQRT_3 * point.x) / EDGE_NORM,
        ]
    }
}

/// The closed set of arena shapes
///
/// Collision dispatch pattern-matches variant pairs exhaustively, so adding a
/// shape kind is a compile-checked change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Hexagon(Hexagon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Hexagon(_) => ShapeKind::Hexagon,
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::Triangle(t) => t.center(),
            Shape::Hexagon(h) => h.center(),
        }
    }

    /// Boundary-inclusive containment
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle(c) => c.contains(point),
            Shape::Triangle(t) => t.contains(point),
            Shape::Hexagon(h) => h.contains(point),
        }
    }

    /// Polygon vertices. Reaching this through a circle violates the closed
    /// dispatch invariant and is a fatal logic error.
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            Shape::Triangle(t) => t.vertices(),
            Shape::Hexagon(h) => h.vertices(),
            Shape::Circle(_) => unreachable!("vertices are defined for polygons only"),
        }
    }

    /// Move the center; cached polygon geometry is re-solved before return.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Circle(c) => c.translate(delta),
            Shape::Triangle(t) => t.translate(delta),
            Shape::Hexagon(h) => h.translate(delta),
        }
    }

    /// Horizontal extent `(min_x, max_x)`
    pub fn span_x(&self) -> (f32, f32) {
        match self {
            Shape::Circle(c) => (c.center().x - c.radius(), c.center().x + c.radius()),
            Shape::Triangle(t) => axis_span(t.vertices().iter().map(|v| v.x)),
            Shape::Hexagon(h) => axis_span(h.vertices().iter().map(|v| v.x)),
        }
    }

    /// Vertical extent `(min_y, max_y)`
    pub fn span_y(&self) -> (f32, f32) {
        match self {
            Shape::Circle(c) => (c.center().y - c.radius(), c.center().y + c.radius()),
            Shape::Triangle(t) => axis_span(t.vertices().iter().map(|v| v.y)),
            Shape::Hexagon(h) => axis_span(h.vertices().iter().map(|v| v.y)),
        }
    }

    /// Classify the shape's vertical extent against the horizontal line `y`
    pub fn relative_to_horizontal(&self, y: f32) -> Relation {
        let (min, max) = self.span_y();
        classify(min, max, y)
    }

    /// Classify the shape's horizontal extent against the vertical line `x`
    pub fn relative_to_vertical(&self, x: f32) -> Relation {
        let (min, max) = self.span_x();
        classify(min, max, x)
    }
}

fn axis_span(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Tolerance for values derived through √3 arithmetic
    const EPS: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    /// Sorted copy, for comparing distance vectors as multisets
    fn sorted<const N: usize>(mut values: [f32; N]) -> [f32; N] {
        values.sort_by(f32::total_cmp);
        values
    }

    #[test]
    fn circle_contains_center_and_cardinal_boundary() {
        // Integer-friendly values keep the distance computation exact.
        let center = Vec2::new(3.0, 4.0);
        let radius = 7.0;
        let circle = Circle::new(center, radius).unwrap();

        assert!(circle.contains(center));
        for offset in [
            Vec2::new(0.0, radius),
            Vec2::new(0.0, -radius),
            Vec2::new(radius, 0.0),
            Vec2::new(-radius, 0.0),
        ] {
            assert!(circle.contains(center + offset));
            assert!(!circle.contains(center + offset * 2.0));
        }
    }

    #[test]
    fn circle_rejects_non_finite_radius() {
        assert!(Circle::new(Vec2::ZERO, f32::NAN).is_err());
        assert!(Circle::new(Vec2::ZERO, -1.0).is_err());
        assert!(Triangle::new(Vec2::ZERO, f32::INFINITY).is_err());
        assert!(Hexagon::new(Vec2::ZERO, -0.5).is_err());
    }

    #[test]
    fn triangle_contains_center_and_bottom_edge_midpoint() {
        let center = Vec2::new(6.0, 3.0);
        let triangle = Triangle::new(center, 8.0).unwrap();

        assert!(triangle.contains(center));

        // Midpoint of the horizontal bottom edge: the y comparison is exact.
        let [_, left, right] = *triangle.vertices();
        let midpoint = Vec2::new((left.x + right.x) / 2.0, left.y);
        assert!(triangle.contains(midpoint));

        // A point one circumradius to the side is well clear of the slanted
        // edges.
        assert!(!triangle.contains(center + Vec2::new(8.0, 0.0)));
    }

    #[test]
    fn triangle_center_is_equidistant_from_all_edges() {
        let size = 8.0;
        let center = Vec2::new(6.0, 3.0);
        let triangle = Triangle::new(center, size).unwrap();

        for d in triangle.distance_to_edges(center) {
            assert_close(d, -size / 2.0);
        }
    }

    #[test]
    fn triangle_vertices_touch_their_two_edges() {
        let size = 8.0;
        let height = 1.5 * size;
        let triangle = Triangle::new(Vec2::new(6.0, 3.0), size).unwrap();

        for &vertex in triangle.vertices() {
            let distances = sorted(triangle.distance_to_edges(vertex));
            // Opposite edge, then the two edges meeting at the vertex.
            assert_close(distances[0], -height);
            assert_close(distances[1], 0.0);
            assert_close(distances[2], 0.0);
            // Boundary inclusive within float noise of the edge lines.
            assert!(distances.iter().all(|&d| d <= EPS));
        }
    }

    #[test]
    fn triangle_distances_above_apex() {
        let size = 8.0;
        let height = 1.5 * size;
        let center = Vec2::new(6.0, 3.0);
        let triangle = Triangle::new(center, size).unwrap();

        // One circumradius above the apex: past both tilted edges, deep
        // inside the bottom half-plane.
        let point = center + Vec2::new(0.0, size + height);
        let distances = sorted(triangle.distance_to_edges(point));
        assert_close(distances[0], -2.0 * height);
        assert_close(distances[1], height / 2.0);
        assert_close(distances[2], height / 2.0);
        assert!(!triangle.contains(point));
    }

    #[test]
    fn hexagon_contains_center_and_bottom_edge_midpoint() {
        let center = Vec2::new(4.0, 9.0);
        let hexagon = Hexagon::new(center, 6.0).unwrap();

        assert!(hexagon.contains(center));

        let bottom_left = hexagon.vertices()[HEX_BOTTOM_LEFT];
        let bottom_right = hexagon.vertices()[4];
        let midpoint = Vec2::new((bottom_left.x + bottom_right.x) / 2.0, bottom_left.y);
        assert!(hexagon.contains(midpoint));

        // The circumradius pokes past the apothem vertically.
        assert!(!hexagon.contains(center + Vec2::new(0.0, 6.0)));
    }

    #[test]
    fn hexagon_center_is_equidistant_from_all_edges() {
        let hexagon = Hexagon::new(Vec2::new(4.0, 9.0), 6.0).unwrap();
        let apothem = hexagon.apothem();

        for d in hexagon.distance_to_edges(Vec2::new(4.0, 9.0)) {
            assert_close(d, -apothem);
        }
    }

    #[test]
    fn hexagon_vertices_touch_their_two_edges() {
        let hexagon = Hexagon::new(Vec2::new(4.0, 9.0), 6.0).unwrap();
        let apothem = hexagon.apothem();

        for &vertex in hexagon.vertices() {
            let distances = sorted(hexagon.distance_to_edges(vertex));
            // Two far parallel edges, two adjacent-but-not-meeting edges,
            // then the two edges meeting at the vertex.
            assert_close(distances[0], -2.0 * apothem);
            assert_close(distances[1], -2.0 * apothem);
            assert_close(distances[2], -apothem);
            assert_close(distances[3], -apothem);
            assert_close(distances[4], 0.0);
            assert_close(distances[5], 0.0);
            assert!(distances.iter().all(|&d| d <= EPS));
        }
    }

    #[test]
    fn hexagon_distances_above_top_edge() {
        let center = Vec2::new(4.0, 9.0);
        let hexagon = Hexagon::new(center, 6.0).unwrap();
        let apothem = hexagon.apothem();

        // One apothem above the top edge: outside the top half-plane, on the
        // extensions of both upper tilted edge lines.
        let point = center + Vec2::new(0.0, 2.0 * apothem);
        let distances = sorted(hexagon.distance_to_edges(point));
        assert_close(distances[0], -3.0 * apothem);
        assert_close(distances[1], -2.0 * apothem);
        assert_close(distances[2], -2.0 * apothem);
        assert_close(distances[3], 0.0);
        assert_close(distances[4], 0.0);
        assert_close(distances[5], apothem);
        assert!(!hexagon.contains(point));
    }

    #[test]
    fn relation_classifies_extent_against_lines() {
        let shape = Shape::Circle(Circle::new(Vec2::new(10.0, 10.0), 5.0).unwrap());

        assert_eq!(shape.relative_to_vertical(0.0), Relation::After);
        assert_eq!(shape.relative_to_vertical(12.0), Relation::Between);
        assert_eq!(shape.relative_to_vertical(20.0), Relation::Before);
        assert_eq!(shape.relative_to_horizontal(15.0), Relation::Between);
        assert_eq!(shape.relative_to_horizontal(16.0), Relation::Before);
        assert_eq!(shape.relative_to_horizontal(4.0), Relation::After);
    }

    #[test]
    fn polygon_spans_match_vertex_extents() {
        let triangle = Triangle::new(Vec2::new(0.0, 0.0), 10.0).unwrap();
        let shape = Shape::Triangle(triangle);
        let (min_y, max_y) = shape.span_y();
        assert_close(min_y, -5.0);
        assert_close(max_y, 10.0);

        let hexagon = Hexagon::new(Vec2::new(0.0, 0.0), 10.0).unwrap();
        let shape = Shape::Hexagon(hexagon.clone());
        let (min_x, max_x) = shape.span_x();
        assert_close(min_x, -10.0);
        assert_close(max_x, 10.0);
        let (min_y, max_y) = shape.span_y();
        assert_close(min_y, -hexagon.apothem());
        assert_close(max_y, hexagon.apothem());
    }

    proptest! {
        #[test]
        fn triangle_containment_matches_edge_distances(
            cx in -100.0f32..100.0,
            cy in -100.0f32..100.0,
            size in 1.0f32..40.0,
            px in -200.0f32..200.0,
            py in -200.0f32..200.0,
        ) {
            let triangle = Triangle::new(Vec2::new(cx, cy), size).unwrap();
            let point = Vec2::new(px, py);
            let distances = triangle.distance_to_edges(point);
            // The two implementations may disagree within float noise of an
            // edge line; everywhere else they must match exactly.
            prop_assume!(distances.iter().all(|d| d.abs() > 1e-3));
            prop_assert_eq!(
                triangle.contains(point),
                distances.iter().all(|&d| d <= 0.0)
            );
        }

        #[test]
        fn hexagon_containment_matches_edge_distances(
            cx in -100.0f32..100.0,
            cy in -100.0f32..100.0,
            size in 1.0f32..40.0,
            px in -200.0f32..200.0,
            py in -200.0f32..200.0,
        ) {
            let hexagon = Hexagon::new(Vec2::new(cx, cy), size).unwrap();
            let point = Vec2::new(px, py);
            let distances = hexagon.distance_to_edges(point);
            prop_assume!(distances.iter().all(|d| d.abs() > 1e-3));
            prop_assert_eq!(
                hexagon.contains(point),
                distances.iter().all(|&d| d <= 0.0)
            );
        }

        #[test]
        fn translate_matches_fresh_construction(
            cx in -100.0f32..100.0,
            cy in -100.0f32..100.0,
            size in 1.0f32..40.0,
            dx in -50.0f32..50.0,
            dy in -50.0f32..50.0,
        ) {
            // Cached geometry after a move must equal the geometry of a shape
            // built directly at the destination.
            let delta = Vec2::new(dx, dy);

            let mut moved = Triangle::new(Vec2::new(cx, cy), size).unwrap();
            moved.translate(delta);
            let fresh = Triangle::new(Vec2::new(cx, cy) + delta, size).unwrap();
            for (a, b) in moved.vertices().iter().zip(fresh.vertices()) {
                prop_assert!(a.distance(*b) < 1e-3);
            }

            let mut moved = Hexagon::new(Vec2::new(cx, cy), size).unwrap();
            moved.translate(delta);
            let fresh = Hexagon::new(Vec2::new(cx, cy) + delta, size).unwrap();
            for (a, b) in moved.vertices().iter().zip(fresh.vertices()) {
                prop_assert!(a.distance(*b) < 1e-3);
            }
        }

        #[test]
        fn every_shape_contains_its_own_center(
            cx in -100.0f32..100.0,
            cy in -100.0f32..100.0,
            size in 1.0f32..40.0,
        ) {
            let center = Vec2::new(cx, cy);
            prop_assert!(Circle::new(center, size).unwrap().contains(center));
            prop_assert!(Triangle::new(center, size).unwrap().contains(center));
            prop_assert!(Hexagon::new(center, size).unwrap().contains(center));
        }
    }
}
