// src/error.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("number of figures must be not negative, got {0}")]
    InvalidArgument(i64),
    #[error("sides {a}, {b}, {c} do not form a triangle")]
    InvalidTriangle { a: f64, b: f64, c: f64 },
    /// Every side drawn with a zero bound is zero, so no triangle can be built.
    #[error("no valid triangle exists for a maximum coordinate of 0")]
    DegenerateBound,
}

pub type Result<T> = std::result::Result<T, FigureError>;
