// src/generator.rs

use rand::distributions::{Distribution, Standard};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::{FigureError, Result};
use crate::geometry::{Circle, Figure, FigureKind, Point, Rectangle, Triangle};

/// Uniform pick among the four kinds: 0 = circle, 1 = point, 2 = rectangle, 3 = triangle.
impl Distribution<FigureKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FigureKind {
        FigureKind::ALL[rng.gen_range(0..FigureKind::ALL.len())]
    }
}

const ZERO_BOUND_KINDS: [FigureKind; 3] =
    [FigureKind::Circle, FigureKind::Point, FigureKind::Rectangle];

/// Produces figures whose dimensions are drawn from `[max_coordinate, 2 * max_coordinate)`.
///
/// Each generator owns its random source. The default `ThreadRng` ties a
/// generator to the thread that built it; use [`FigureGenerator::seeded`] or
/// [`FigureGenerator::with_rng`] with a `Send` RNG to move one across threads.
#[derive(Clone, Debug)]
pub struct FigureGenerator<R: Rng = ThreadRng> {
    max_coordinate: u32,
    rng: R,
}

impl FigureGenerator<ThreadRng> {
    pub fn new(max_coordinate: i32) -> Self {
        Self::with_rng(max_coordinate, rand::thread_rng())
    }
}

impl FigureGenerator<StdRng> {
    /// Reproducible generator: equal seeds yield equal figure sequences.
    pub fn seeded(max_coordinate: i32, seed: u64) -> Self {
        Self::with_rng(max_coordinate, StdRng::seed_from_u64(seed))
    }
}

impl Default for FigureGenerator<ThreadRng> {
    /// Generator with a random positive bound.
    fn default() -> Self {
        let mut rng = rand::thread_rng();
        let max_coordinate = rng.gen_range(1..=i32::MAX);
        Self::with_rng(max_coordinate, rng)
    }
}

impl<R: Rng> FigureGenerator<R> {
    pub fn with_rng(max_coordinate: i32, rng: R) -> Self {
        let mut generator = Self { max_coordinate: 0, rng };
        generator.set_max_coordinate(max_coordinate);
        generator
    }

    pub fn max_coordinate(&self) -> u32 {
        self.max_coordinate
    }

    /// Negative bounds are stored as zero.
    pub fn set_max_coordinate(&mut self, max_coordinate: i32) {
        if max_coordinate < 0 {
            log::warn!("Negative maximum coordinate {} clamped to 0", max_coordinate);
        }
        self.max_coordinate = u32::try_from(max_coordinate).unwrap_or(0);
    }

    /// Uniform draw from `[max_coordinate, 2 * max_coordinate)`, or 0 when the bound is 0.
    pub(crate) fn next_int(&mut self) -> u64 {
        let low = u64::from(self.max_coordinate);
        if low == 0 {
            return 0;
        }
        let value = self.rng.gen_range(low..2 * low);
        log::trace!("Drew {} from [{}, {})", value, low, 2 * low);
        value
    }

    fn next_f64(&mut self) -> f64 {
        // Draws stay below 2^32, so the conversion is exact.
        self.next_int() as f64
    }

    pub fn create_point(&mut self) -> Point {
        let abscissa = self.next_f64();
        let ordinate = self.next_f64();
        Point::new(abscissa, ordinate)
    }

    pub fn create_circle(&mut self) -> Circle {
        let radius = self.next_f64();
        Circle::new(radius)
    }

    pub fn create_rectangle(&mut self) -> Rectangle {
        let width = self.next_f64();
        let height = self.next_f64();
        Rectangle::new(width, height)
    }

    /// Draws three sides until they satisfy the triangle inequality.
    ///
    /// With a positive bound every draw already passes (any two sides sum to
    /// at least `2 * max_coordinate`, which exceeds the largest possible side).
    /// With a zero bound all sides are zero and no triangle exists.
    pub fn create_triangle(&mut self) -> Result<Triangle> {
        if self.max_coordinate == 0 {
            return Err(FigureError::DegenerateBound);
        }
        loop {
            let side_a = self.next_f64();
            let side_b = self.next_f64();
            let side_c = self.next_f64();
            let candidate = Triangle::new(side_a, side_b, side_c);
            if candidate.is_valid() {
                return Ok(candidate);
            }
            log::debug!("Rejected degenerate triangle {}", candidate);
        }
    }

    pub fn create_figure_of(&mut self, kind: FigureKind) -> Result<Figure> {
        let figure = match kind {
            FigureKind::Circle => self.create_circle().into(),
            FigureKind::Point => self.create_point().into(),
            FigureKind::Rectangle => self.create_rectangle().into(),
            FigureKind::Triangle => self.create_triangle()?.into(),
        };
        log::trace!("Created {}", figure);
        Ok(figure)
    }

    /// One figure of a uniformly chosen kind.
    ///
    /// With a zero bound triangles cannot exist, so the kind is drawn
    /// uniformly among circles, points and rectangles instead.
    pub fn create_figure(&mut self) -> Result<Figure> {
        let kind = if self.max_coordinate == 0 {
            ZERO_BOUND_KINDS[self.rng.gen_range(0..ZERO_BOUND_KINDS.len())]
        } else {
            self.rng.gen()
        };
        self.create_figure_of(kind)
    }

    pub fn create_figures(&mut self, number: i64) -> Result<Vec<Figure>> {
        if number < 0 {
            return Err(FigureError::InvalidArgument(number));
        }
        log::debug!("Creating {} figures with maximum coordinate {}", number, self.max_coordinate);
        (0..number).map(|_| self.create_figure()).collect()
    }
}
