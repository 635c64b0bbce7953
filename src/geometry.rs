// src/geometry.rs

use std::f64::consts::PI;
use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use crate::error::{FigureError, Result};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point {
    abscissa: f64,
    ordinate: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { abscissa: 0.0, ordinate: 0.0 };

    pub fn new(abscissa: f64, ordinate: f64) -> Self {
        Self { abscissa, ordinate }
    }

    pub fn abscissa(&self) -> f64 {
        self.abscissa
    }

    pub fn set_abscissa(&mut self, abscissa: f64) {
        self.abscissa = abscissa;
    }

    pub fn ordinate(&self) -> f64 {
        self.ordinate
    }

    pub fn set_ordinate(&mut self, ordinate: f64) {
        self.ordinate = ordinate;
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.abscissa, self.ordinate)
    }

    /// Coordinates as `[abscissa, ordinate]`, laid out exactly like the struct.
    pub fn to_array(self) -> [f64; 2] {
        bytemuck::cast(self)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.abscissa, self.ordinate)
    }
}

/// Circle with a non-negative radius. Negative radii are clamped to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Circle centered at the origin.
    pub fn new(radius: f64) -> Self {
        Self::with_center(Point::ORIGIN, radius)
    }

    pub fn with_center(center: Point, radius: f64) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center: {}, radius: {})", self.center, self.radius)
    }
}

/// Axis-aligned rectangle anchored with corner A at the origin.
///
/// Corners go counter-clockwise from the origin up the ordinate axis:
/// A = (0, 0), B = (0, height), C = (width, height), D = (width, 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0) }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(0.0);
    }

    pub fn point_a(&self) -> Point {
        Point::ORIGIN
    }

    pub fn point_b(&self) -> Point {
        Point::new(0.0, self.height)
    }

    pub fn point_c(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn point_d(&self) -> Point {
        Point::new(self.width, 0.0)
    }

    pub fn corners(&self) -> [Point; 4] {
        [self.point_a(), self.point_b(), self.point_c(), self.point_d()]
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(width: {}, height: {})", self.width, self.height)
    }
}

/// Triangle described by its three side lengths.
///
/// `Triangle::new` accepts any sides so that a candidate can be checked with
/// [`Triangle::is_valid`]; use [`Triangle::try_new`] when the sides must form
/// a real triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    side_a: f64,
    side_b: f64,
    side_c: f64,
}

impl Triangle {
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Self {
        Self { side_a, side_b, side_c }
    }

    pub fn try_new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self> {
        let triangle = Self::new(side_a, side_b, side_c);
        if triangle.is_valid() {
            Ok(triangle)
        } else {
            Err(FigureError::InvalidTriangle { a: side_a, b: side_b, c: side_c })
        }
    }

    pub fn side_a(&self) -> f64 {
        self.side_a
    }

    pub fn side_b(&self) -> f64 {
        self.side_b
    }

    pub fn side_c(&self) -> f64 {
        self.side_c
    }

    pub fn sides(&self) -> [f64; 3] {
        [self.side_a, self.side_b, self.side_c]
    }

    /// Strict triangle inequality on every pair of sides.
    pub fn is_valid(&self) -> bool {
        let (a, b, c) = (self.side_a, self.side_b, self.side_c);
        a + b > c && a + c > b && b + c > a
    }

    /// Heron's formula. Zero for candidates that are not triangles.
    pub fn area(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        let s = self.perimeter() / 2.0;
        (s * (s - self.side_a) * (s - self.side_b) * (s - self.side_c)).sqrt()
    }

    pub fn perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(sides: {}, {}, {})", self.side_a, self.side_b, self.side_c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Circle,
    Point,
    Rectangle,
    Triangle,
}

impl FigureKind {
    pub const ALL: [FigureKind; 4] = [
        FigureKind::Circle,
        FigureKind::Point,
        FigureKind::Rectangle,
        FigureKind::Triangle,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Figure {
    Point(Point),
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Figure {
    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Point(_) => FigureKind::Point,
            Figure::Circle(_) => FigureKind::Circle,
            Figure::Rectangle(_) => FigureKind::Rectangle,
            Figure::Triangle(_) => FigureKind::Triangle,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Figure::Point(_) => 0.0,
            Figure::Circle(circle) => circle.area(),
            Figure::Rectangle(rectangle) => rectangle.area(),
            Figure::Triangle(triangle) => triangle.area(),
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Figure::Point(_) => 0.0,
            Figure::Circle(circle) => circle.perimeter(),
            Figure::Rectangle(rectangle) => rectangle.perimeter(),
            Figure::Triangle(triangle) => triangle.perimeter(),
        }
    }
}

impl From<Point> for Figure {
    fn from(point: Point) -> Self {
        Figure::Point(point)
    }
}

impl From<Circle> for Figure {
    fn from(circle: Circle) -> Self {
        Figure::Circle(circle)
    }
}

impl From<Rectangle> for Figure {
    fn from(rectangle: Rectangle) -> Self {
        Figure::Rectangle(rectangle)
    }
}

impl From<Triangle> for Figure {
    fn from(triangle: Triangle) -> Self {
        Figure::Triangle(triangle)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Point(point) => fmt::Display::fmt(point, f),
            Figure::Circle(circle) => fmt::Display::fmt(circle, f),
            Figure::Rectangle(rectangle) => fmt::Display::fmt(rectangle, f),
            Figure::Triangle(triangle) => fmt::Display::fmt(triangle, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn point_setters_and_layout() {
        let mut p = Point::new(1.0, 2.0);
        p.set_abscissa(3.0);
        p.set_ordinate(-4.0);
        assert_eq!(p.to_array(), [3.0, -4.0]);
        assert_eq!(Point::from(p.to_dvec2()), p);
        assert!((p.distance(&Point::ORIGIN) - 5.0).abs() < EPS);
    }

    #[test]
    fn rectangle_corners_form_right_angles() {
        let r = Rectangle::new(4.0, 3.0);
        let [a, b, c, d] = r.corners();
        assert_eq!(a, Point::ORIGIN);
        assert!((a.distance(&b) - 3.0).abs() < EPS);
        assert!((b.distance(&c) - 4.0).abs() < EPS);
        assert!((c.distance(&d) - 3.0).abs() < EPS);
        assert!((d.distance(&a) - 4.0).abs() < EPS);
        // Pythagoras on both diagonals means every corner is a right angle.
        assert!((a.distance(&c) - 5.0).abs() < EPS);
        assert!((b.distance(&d) - 5.0).abs() < EPS);
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let mut r = Rectangle::new(-1.0, 2.0);
        assert_eq!(r.width(), 0.0);
        r.set_height(-7.5);
        assert_eq!(r.height(), 0.0);

        let mut c = Circle::new(-3.0);
        assert_eq!(c.radius(), 0.0);
        c.set_radius(2.0);
        assert_eq!(c.radius(), 2.0);
        assert_eq!(c.center(), Point::ORIGIN);
    }

    #[test]
    fn triangle_validity_is_strict() {
        assert!(Triangle::new(3.0, 4.0, 5.0).is_valid());
        assert!(!Triangle::new(1.0, 2.0, 3.0).is_valid());
        assert!(!Triangle::new(3.0, 1.0, 2.0).is_valid());
        assert!(!Triangle::new(0.0, 0.0, 0.0).is_valid());
        assert_eq!(
            Triangle::try_new(1.0, 1.0, 5.0),
            Err(FigureError::InvalidTriangle { a: 1.0, b: 1.0, c: 5.0 })
        );
    }

    #[test]
    fn areas_and_perimeters() {
        let t = Triangle::new(3.0, 4.0, 5.0);
        assert!((t.area() - 6.0).abs() < EPS);
        assert_eq!(t.perimeter(), 12.0);
        assert_eq!(Triangle::new(1.0, 2.0, 3.0).area(), 0.0);

        let figures: [Figure; 3] = [
            Rectangle::new(4.0, 3.0).into(),
            Circle::new(1.0).into(),
            Point::new(9.0, 9.0).into(),
        ];
        assert_eq!(figures[0].area(), 12.0);
        assert_eq!(figures[0].perimeter(), 14.0);
        assert!((figures[1].area() - PI).abs() < EPS);
        assert_eq!(figures[2].area(), 0.0);
        assert_eq!(figures[2].kind(), FigureKind::Point);
    }
}
