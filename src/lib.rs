// src/lib.rs

pub mod error;
pub mod geometry;
pub mod generator;

pub use error::{FigureError, Result};
pub use generator::FigureGenerator;
pub use geometry::{Circle, Figure, FigureKind, Point, Rectangle, Triangle};
