//! Core traits and types for levelset.
//!
//! This crate defines the function abstraction that point sets are built on:
//!
//! - [`Function`] — a scalar function of an n-dimensional point with an
//!   analytic gradient
//! - [`LinearFunction`] — `f(x) = Σ cᵢ·xᵢ`
//! - [`QuadraticFunction`] — the diagonal quadratic form `f(x) = Σ cᵢ·xᵢ²`
//! - [`DimensionError`] — a point whose length does not fit a function
//!
//! Points are plain coordinate slices (`&[f64]`).

mod error;
mod function;

pub use error::DimensionError;
pub use function::{Function, LinearFunction, QuadraticFunction};
