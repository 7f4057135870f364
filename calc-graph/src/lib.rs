//! A graph of a single function of `x` and its derivative.
//!
//! A [`GraphModel`] owns a compiled [`RealFunction`](calc_compute::function::RealFunction), its
//! derivative, and the [`Viewport`] to show them in. Drawing is left to the caller; the model
//! only provides the points to draw, through [`GraphModel::plot`].

pub mod graph;

pub use graph::{Curve, GraphModel, GraphOptions, GraphPoint, Plot, Viewport};
